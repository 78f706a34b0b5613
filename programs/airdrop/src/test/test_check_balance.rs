use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use anchor_spl::token::ID as TOKEN_PROGRAM_ID;

use crate::error::AirdropError;
use crate::instructions::identity_balance;
use crate::test::harness::{assert_error, FakeAccount};

const TOKEN_ACCOUNT_LEN: usize = 165;

/// Raw SPL token account: mint, owner, amount, no delegate, initialized,
/// not native, no delegated amount, no close authority.
fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(TOKEN_ACCOUNT_LEN);
    data.extend_from_slice(mint.as_ref());
    data.extend_from_slice(owner.as_ref());
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&[0u8; 4 + 32]);
    data.push(1);
    data.extend_from_slice(&[0u8; 4 + 8]);
    data.extend_from_slice(&0u64.to_le_bytes());
    data.extend_from_slice(&[0u8; 4 + 32]);
    assert_eq!(data.len(), TOKEN_ACCOUNT_LEN);
    data
}

fn ata(identity: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(identity, mint, &TOKEN_PROGRAM_ID)
}

#[test]
fn test_balance_of_identity_with_tokens() {
    let identity = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut account = FakeAccount::with(
        ata(&identity, &mint),
        TOKEN_PROGRAM_ID,
        token_account_data(&mint, &identity, 100),
    );

    assert_eq!(
        identity_balance(&account.info(), &identity, &mint, &TOKEN_PROGRAM_ID).unwrap(),
        100
    );
}

#[test]
fn test_identity_without_token_account_has_zero() {
    let identity = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut account = FakeAccount::with(ata(&identity, &mint), Pubkey::default(), Vec::new());

    assert_eq!(
        identity_balance(&account.info(), &identity, &mint, &TOKEN_PROGRAM_ID).unwrap(),
        0
    );
}

#[test]
fn test_account_of_other_identity_rejected() {
    let identity = Pubkey::new_unique();
    let someone_else = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut account = FakeAccount::with(
        ata(&someone_else, &mint),
        TOKEN_PROGRAM_ID,
        token_account_data(&mint, &someone_else, 500),
    );

    assert_error(
        identity_balance(&account.info(), &identity, &mint, &TOKEN_PROGRAM_ID),
        AirdropError::BalanceAccountMismatch,
    );
}

#[test]
fn test_account_not_owned_by_token_program_rejected() {
    let identity = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut account = FakeAccount::with(
        ata(&identity, &mint),
        Pubkey::new_unique(),
        token_account_data(&mint, &identity, 100),
    );

    assert_error(
        identity_balance(&account.info(), &identity, &mint, &TOKEN_PROGRAM_ID),
        AirdropError::BalanceAccountMismatch,
    );
}
