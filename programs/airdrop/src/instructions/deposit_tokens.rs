use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/// Tops up the vault. Anyone may fund an airdrop.
#[event_cpi]
#[derive(Accounts)]
pub struct DepositTokens<'info> {
    pub airdrop: Account<'info, AirdropConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::InvalidAmount);

    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    ctx.accounts.token_vault.reload()?;

    emit_cpi!(TokensDeposited {
        airdrop: ctx.accounts.airdrop.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.token_vault.amount,
    });

    Ok(())
}
