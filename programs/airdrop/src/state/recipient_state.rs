use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::AirdropError;

/**
 * Per-recipient eligibility and claim record
 *
 * Derivation: ["recipient", airdrop_key, identity]
 *
 * Lifecycle:
 * 1. Created on first write: whitelisting (owner pays) or a task
 * completion / claim attempt (recipient pays)
 * 2. whitelisted only ever moves false -> true
 * 3. has_claimed only ever moves false -> true once the payout lands
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RecipientState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set by the owner through add_to_whitelist
    pub whitelisted: bool,

    /// Number of self-reported task completions
    /// - Counts calls, not distinct task ids
    pub task_completions: u8,

    /// Claim status, the only guard against paying an identity twice
    pub has_claimed: bool,

    /// Reward actually paid to this identity
    pub claimed_amount: u64,
}

impl RecipientState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RecipientState>();

    pub fn is_whitelisted(&self) -> bool {
        self.whitelisted
    }

    pub fn task_completions(&self) -> u8 {
        self.task_completions
    }

    pub fn has_claimed(&self) -> bool {
        self.has_claimed
    }

    /// Marks the identity as whitelisted. Repeated calls are no-ops.
    pub fn whitelist(&mut self) {
        self.whitelisted = true;
    }

    /// Records one completion of `task_id` and returns the new count.
    pub fn complete_task(&mut self, task_id: u8) -> Result<u8> {
        require!(
            (MIN_TASK_ID..=MAX_TASK_ID).contains(&task_id),
            AirdropError::InvalidTaskId
        );
        self.task_completions = self
            .task_completions
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(self.task_completions)
    }

    /// Whitelisted, or enough task completions.
    pub fn is_eligible(&self) -> bool {
        self.whitelisted || self.task_completions >= TASK_COMPLETION_THRESHOLD
    }

    /// First phase of a claim: checks status and eligibility, then flips the
    /// claim flag before any tokens move.
    pub fn commit_claim(&mut self) -> Result<()> {
        require!(!self.has_claimed, AirdropError::AlreadyClaimed);
        require!(self.is_eligible(), AirdropError::NotEligible);
        self.has_claimed = true;
        Ok(())
    }

    /// Undoes commit_claim after the payout failed.
    pub fn rollback_claim(&mut self) {
        self.has_claimed = false;
        self.claimed_amount = 0;
    }
}
