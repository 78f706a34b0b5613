use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::test::harness::{assert_error, FakeAccount};
use crate::utils::{TokenLedger, VaultLedger};

// Only the checks that run before the token CPI are exercised here.
#[test]
fn test_vault_ledger_guards_before_cpi() {
    let mut authority = FakeAccount::new();
    let mut vault = FakeAccount::new();
    let mut destination = FakeAccount::new();
    let mut mint = FakeAccount::new();
    let mut token_program = FakeAccount::new();

    let airdrop_key = authority.key;
    let claimant = Pubkey::new_unique();
    let bump = [254u8];
    let seeds: &[&[u8]] = &[b"airdrop", &bump];
    let signer = &[seeds];

    let mut ledger = VaultLedger::new(
        authority.info(),
        vault.info(),
        500,
        destination.info(),
        claimant,
        7,
        mint.info(),
        6,
        token_program.info(),
        signer,
    );

    assert_eq!(ledger.balance_of(&airdrop_key), 500);
    assert_eq!(ledger.balance_of(&claimant), 7);
    assert_eq!(ledger.balance_of(&Pubkey::new_unique()), 0);

    assert_error(
        ledger.transfer(&Pubkey::new_unique(), 1),
        AirdropError::TransferFailed,
    );
    assert_error(ledger.transfer(&claimant, 501), AirdropError::InsufficientBalance);

    assert_eq!(ledger.balance_of(&airdrop_key), 500);
    assert_eq!(ledger.balance_of(&claimant), 7);
}
