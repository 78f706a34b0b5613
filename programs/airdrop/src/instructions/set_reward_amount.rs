use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for changing the reward amount
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - No bounds, zero is accepted and makes later claims pay nothing
 * - Only affects claims made after the change
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRewardAmount<'info> {
    #[account(mut)]
    pub airdrop: Account<'info, AirdropConfig>,

    /// Checked against the stored owner by the handler
    pub owner: Signer<'info>,
}

pub fn handle_set_reward_amount(ctx: Context<SetRewardAmount>, new_amount: u64) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let airdrop = &mut ctx.accounts.airdrop;

    let old_amount = airdrop.set_reward_amount(&caller, new_amount)?;

    emit_cpi!(RewardAmountUpdated {
        airdrop: airdrop.key(),
        old_amount,
        new_amount,
    });

    Ok(())
}
