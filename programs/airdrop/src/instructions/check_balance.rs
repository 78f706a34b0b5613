use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::error::*;
use crate::state::*;

/// Read-only balance lookup for an identity, through its associated token
/// account of the airdrop's mint.
#[derive(Accounts)]
pub struct CheckBalance<'info> {
    pub airdrop: Account<'info, AirdropConfig>,

    #[account(
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: the identity's associated token account, verified against the
    /// derived address in the handler. May not exist yet.
    pub identity_token_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Balance of `identity`, read from `token_account`, which must be the
/// identity's associated token account. A missing account holds nothing.
pub fn identity_balance(
    token_account: &AccountInfo,
    identity: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<u64> {
    let expected = get_associated_token_address_with_program_id(identity, mint, token_program);
    require_keys_eq!(
        token_account.key(),
        expected,
        AirdropError::BalanceAccountMismatch
    );

    if token_account.data_is_empty() {
        return Ok(0);
    }

    require_keys_eq!(
        *token_account.owner,
        *token_program,
        AirdropError::BalanceAccountMismatch
    );
    let data = token_account.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    require_keys_eq!(account.mint, *mint, AirdropError::TokenMintMismatch);
    require_keys_eq!(account.owner, *identity, AirdropError::BalanceAccountMismatch);

    Ok(account.amount)
}

pub fn handle_check_balance(ctx: Context<CheckBalance>, identity: Pubkey) -> Result<u64> {
    identity_balance(
        &ctx.accounts.identity_token_account,
        &identity,
        &ctx.accounts.airdrop.token_mint,
        &ctx.accounts.token_program.key(),
    )
}
