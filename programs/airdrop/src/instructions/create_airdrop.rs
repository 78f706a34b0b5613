use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop controller
 *
 * - Creates the airdrop config PDA with the creator as owner
 * - Creates the vault token account PDA, owned by the config PDA
 * - Moves the initial deposit from the creator into the vault
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    /// The airdrop config account (PDA)
    /// - Derived from: ["airdrop", token_mint, creator]
    #[account(
        init,
        payer = creator,
        space = AirdropConfig::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
        ],
        bump
    )]
    pub airdrop: Account<'info, AirdropConfig>,

    /// Vault holding the tokens to distribute
    /// - Token authority is the airdrop PDA
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the initial deposit
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pays for the new accounts and becomes the first owner
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates the airdrop controller
 *
 * @param reward_amount - Tokens paid to each successful claimant
 * @param initial_deposit - Tokens moved into the vault now, may be zero
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    reward_amount: u64,
    initial_deposit: u64,
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    airdrop.bump = ctx.bumps.airdrop;
    airdrop.creator = ctx.accounts.creator.key();
    airdrop.owner = ctx.accounts.creator.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.reward_amount = reward_amount;

    if initial_deposit > 0 {
        transfer_token(
            ctx.accounts.creator.to_account_info(),
            ctx.accounts.creator_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None,
        )?;
    }

    msg!(
        "create_airdrop: owner={} reward={} deposit={}",
        airdrop.owner,
        reward_amount,
        initial_deposit,
    );

    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        owner: airdrop.owner,
        token_mint: airdrop.token_mint,
        token_vault: airdrop.token_vault,
        reward_amount,
        initial_deposit,
    });

    Ok(())
}
