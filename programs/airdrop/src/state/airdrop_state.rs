use anchor_lang::prelude::*;
use crate::error::AirdropError;

/**
 * Airdrop controller state account
 *
 * Holds the configuration and running totals of one airdrop campaign.
 *
 * Derivation: ["airdrop", token_mint, creator]
 *
 * Lifecycle:
 * 1. Created during create_airdrop, creator becomes owner
 * 2. reward_amount updated by set_reward_amount
 * 3. owner updated by transfer_ownership
 * 4. total_claimed / claim_count incremented by each successful claim
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct AirdropConfig {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when the PDA signs vault transfers
    pub bump: u8,

    /// Key that created the airdrop
    /// - Part of the PDA seeds, never changes
    pub creator: Pubkey,

    /// Current owner
    /// - The only key allowed through the authorization guard
    pub owner: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Vault token account holding undistributed tokens
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Amount paid to every successful claimant, in the token's smallest unit
    pub reward_amount: u64,

    /// Sum of all rewards paid out
    pub total_claimed: u64,

    /// Number of successful claims
    pub claim_count: u64,
}

impl AirdropConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AirdropConfig>();

    /// Authorization guard run first on every administrative path.
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.owner {
            msg!("Unauthorized account: {}", caller);
            return err!(AirdropError::Unauthorized);
        }
        Ok(())
    }

    /// Replaces the reward amount and returns the previous one.
    pub fn set_reward_amount(&mut self, caller: &Pubkey, new_amount: u64) -> Result<u64> {
        self.assert_owner(caller)?;
        let old_amount = self.reward_amount;
        self.reward_amount = new_amount;
        Ok(old_amount)
    }

    /// Hands the airdrop to `new_owner` and returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.assert_owner(caller)?;
        require!(new_owner != Pubkey::default(), AirdropError::InvalidOwner);
        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(previous_owner)
    }

    /// Running totals after one more claim of `amount`, without applying them.
    pub fn totals_after_claim(&self, amount: u64) -> Result<(u64, u64)> {
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok((total_claimed, claim_count))
    }
}
