use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{TokenLedger, VaultLedger};

/**
 * Account context for withdrawing tokens from the vault
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - Any amount up to the vault balance can be withdrawn at any time
 * - Tokens owed to eligible recipients who have not claimed yet are not
 *   reserved, the owner can withdraw them too
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    pub airdrop: Account<'info, AirdropConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Caller's token account, credited with the withdrawn tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Checked against the stored owner by the handler
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Guard, then move `amount` from the controller to the owner.
pub fn execute_withdraw<L: TokenLedger>(
    airdrop_key: Pubkey,
    airdrop: &AirdropConfig,
    caller: Pubkey,
    amount: u64,
    ledger: &mut L,
) -> Result<TokensWithdrawn> {
    airdrop.assert_owner(&caller)?;
    ledger.transfer(&airdrop.owner, amount)?;

    Ok(TokensWithdrawn {
        airdrop: airdrop_key,
        owner: airdrop.owner,
        amount,
        remaining: ledger.balance_of(&airdrop_key),
    })
}

pub fn handle_withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let airdrop_key = airdrop.key();
    let caller = ctx.accounts.owner.key();

    let bump = [airdrop.bump];
    let seeds: &[&[u8]] = &[
        AIRDROP_SEED.as_bytes(),
        airdrop.token_mint.as_ref(),
        airdrop.creator.as_ref(),
        &bump,
    ];
    let signer = &[seeds];

    let mut ledger = VaultLedger::new(
        airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_vault.amount,
        ctx.accounts.owner_token_account.to_account_info(),
        caller,
        ctx.accounts.owner_token_account.amount,
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_mint.decimals,
        ctx.accounts.token_program.to_account_info(),
        signer,
    );

    let event = execute_withdraw(airdrop_key, airdrop, caller, amount, &mut ledger)?;

    msg!(
        "withdraw_tokens: owner={} amount={} remaining={}",
        event.owner,
        amount,
        event.remaining,
    );

    emit_cpi!(event);

    Ok(())
}
