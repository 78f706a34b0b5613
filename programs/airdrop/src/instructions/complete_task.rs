use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for reporting a task completion
 *
 * Access Control: Anyone, for their own identity. The completion is self
 * reported and not verified on-chain.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CompleteTask<'info> {
    pub airdrop: Account<'info, AirdropConfig>,

    /// Caller's recipient record, created on first use
    /// - Derived from: ["recipient", airdrop_key, caller]
    #[account(
        init_if_needed,
        payer = caller,
        space = RecipientState::LEN,
        seeds = [RECIPIENT_SEED.as_bytes(), airdrop.key().as_ref(), caller.key().as_ref()],
        bump
    )]
    pub recipient_state: Account<'info, RecipientState>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Applies one task completion to `recipient` and builds the event.
pub fn record_task_completion(
    airdrop_key: Pubkey,
    recipient: &mut RecipientState,
    caller: Pubkey,
    task_id: u8,
) -> Result<TaskCompleted> {
    let completions = recipient.complete_task(task_id)?;
    Ok(TaskCompleted {
        airdrop: airdrop_key,
        identity: caller,
        task_id,
        completions,
    })
}

pub fn handle_complete_task(ctx: Context<CompleteTask>, task_id: u8) -> Result<()> {
    let airdrop_key = ctx.accounts.airdrop.key();
    let caller = ctx.accounts.caller.key();
    let recipient = &mut ctx.accounts.recipient_state;
    recipient.bump = ctx.bumps.recipient_state;

    let event = record_task_completion(airdrop_key, recipient, caller, task_id)?;
    emit_cpi!(event);

    Ok(())
}
