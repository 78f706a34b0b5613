use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/// Hands the airdrop to a new owner. The old owner loses every
/// administrative right immediately.
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub airdrop: Account<'info, AirdropConfig>,

    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let airdrop = &mut ctx.accounts.airdrop;

    let previous_owner = airdrop.transfer_ownership(&caller, new_owner)?;

    msg!("transfer_ownership: {} -> {}", previous_owner, new_owner);

    emit_cpi!(OwnershipTransferred {
        airdrop: airdrop.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
