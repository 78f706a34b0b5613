use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{TokenLedger, VaultLedger};

/**
 * Account context for claiming the airdrop
 *
 * Access Control: Anyone whitelisted or with enough task completions, once.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    /// Updated with the running claim totals
    #[account(mut)]
    pub airdrop: Account<'info, AirdropConfig>,

    /// Claimant's recipient record
    /// - Created here if the claimant never interacted before, in which
    ///   case the claim fails as not eligible and the creation rolls back
    #[account(
        init_if_needed,
        payer = claimant,
        space = RecipientState::LEN,
        seeds = [RECIPIENT_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub recipient_state: Account<'info, RecipientState>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives the reward
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Runs the claim state machine against a ledger
 *
 * 1. Commit: check claim status and eligibility, flip the claim flag, then
 * compute the new running totals (rolled back on overflow)
 * 2. Effect: transfer the current reward from the controller to the claimant
 * 3. On transfer failure roll the commit back and return the ledger error
 * 4. On success record the payout and running totals
 */
pub fn execute_claim<L: TokenLedger>(
    airdrop_key: Pubkey,
    airdrop: &mut AirdropConfig,
    recipient: &mut RecipientState,
    claimant: Pubkey,
    ledger: &mut L,
) -> Result<AirdropClaimed> {
    recipient.commit_claim()?;

    let amount = airdrop.reward_amount;
    let (total_claimed, claim_count) = match airdrop.totals_after_claim(amount) {
        Ok(totals) => totals,
        Err(err) => {
            recipient.rollback_claim();
            return Err(err);
        }
    };

    if let Err(err) = ledger.transfer(&claimant, amount) {
        recipient.rollback_claim();
        return Err(err);
    }

    recipient.claimed_amount = amount;
    airdrop.total_claimed = total_claimed;
    airdrop.claim_count = claim_count;

    Ok(AirdropClaimed {
        airdrop: airdrop_key,
        identity: claimant,
        amount,
    })
}

pub fn handle_claim(ctx: Context<ClaimAirdrop>) -> Result<()> {
    let airdrop_key = ctx.accounts.airdrop.key();
    let claimant = ctx.accounts.claimant.key();

    // Copy seed material out so the config can be borrowed mutably below
    let token_mint_key = ctx.accounts.airdrop.token_mint;
    let creator_key = ctx.accounts.airdrop.creator;
    let bump = [ctx.accounts.airdrop.bump];
    let seeds: &[&[u8]] = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        &bump,
    ];
    let signer = &[seeds];

    let mut ledger = VaultLedger::new(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_vault.amount,
        ctx.accounts.claimant_token_account.to_account_info(),
        claimant,
        ctx.accounts.claimant_token_account.amount,
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_mint.decimals,
        ctx.accounts.token_program.to_account_info(),
        signer,
    );

    let event = execute_claim(
        airdrop_key,
        &mut ctx.accounts.airdrop,
        &mut ctx.accounts.recipient_state,
        claimant,
        &mut ledger,
    )?;
    ctx.accounts.recipient_state.bump = ctx.bumps.recipient_state;

    msg!(
        "claim_airdrop: claimant={} amount={} vault_remaining={}",
        claimant,
        event.amount,
        ledger.balance_of(&airdrop_key),
    );

    emit_cpi!(event);

    Ok(())
}
