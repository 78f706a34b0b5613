use anchor_lang::prelude::*;
use crate::error::AirdropError;
use crate::utils::transfer_token;

/// The token ledger as seen by the airdrop controller.
///
/// The controller never keeps balances itself. It only asks the ledger to
/// move tokens out of its own holdings and to report balances.
pub trait TokenLedger {
    /// Balance held by `owner`.
    fn balance_of(&self, owner: &Pubkey) -> u64;

    /// Moves `amount` from the controller's holdings to `to`.
    ///
    /// Fails with `InsufficientBalance` when the controller holds less than
    /// `amount`, and `TransferFailed` for any other rejection. A failed
    /// transfer moves nothing.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/**
 * On-chain ledger backed by the airdrop vault
 *
 * Moves tokens from the vault token account to one destination token
 * account, signing as the airdrop PDA. Only the two parties of the transfer
 * are visible: the vault (keyed by the airdrop PDA that owns it) and the
 * destination (keyed by its owner). Balances are cached at construction and
 * kept in step with every transfer made through this ledger.
 */
pub struct VaultLedger<'a, 'info> {
    authority: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    vault_balance: u64,
    destination: AccountInfo<'info>,
    destination_owner: Pubkey,
    destination_balance: u64,
    mint: AccountInfo<'info>,
    decimals: u8,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authority: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        vault_balance: u64,
        destination: AccountInfo<'info>,
        destination_owner: Pubkey,
        destination_balance: u64,
        mint: AccountInfo<'info>,
        decimals: u8,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            authority,
            vault,
            vault_balance,
            destination,
            destination_owner,
            destination_balance,
            mint,
            decimals,
            token_program,
            signer_seeds,
        }
    }
}

impl TokenLedger for VaultLedger<'_, '_> {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        if *owner == self.authority.key() {
            self.vault_balance
        } else if *owner == self.destination_owner {
            self.destination_balance
        } else {
            0
        }
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.destination_owner, AirdropError::TransferFailed);
        require!(self.vault_balance >= amount, AirdropError::InsufficientBalance);

        let destination_balance = self
            .destination_balance
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            self.destination.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds),
        )
        .map_err(|err| {
            msg!("Vault transfer of {} rejected: {}", amount, err);
            error!(AirdropError::TransferFailed)
        })?;

        self.vault_balance -= amount;
        self.destination_balance = destination_balance;
        Ok(())
    }
}
