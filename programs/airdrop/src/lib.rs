use anchor_lang::prelude::*;

declare_id!("6kQ1w9rAirDRopXq1Vb5GhTask3ELiG1BLEc1a1mX2Zt");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Program
 *
 * Pays the configurable reward amount of a single mint to every eligible
 * identity, once.
 *
 * Key Features:
 * - Two eligibility paths: owner whitelist, or three self-reported task completions
 * - At-most-once claiming, the claim flag is committed before tokens move and
 *   rolled back if the transfer fails
 * - Owner-only administration: whitelist, reward amount, withdrawal, ownership
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: owner, mint, vault and reward configuration
 * - Token Vault PDA: holds the tokens to be distributed
 * - Recipient PDAs: whitelist flag, task counter and claim status per identity
 *
 * Workflow:
 * 1. Owner creates the airdrop and deposits tokens
 * 2. Owner whitelists identities, other identities complete tasks
 * 3. Eligible identities claim the reward
 * 4. Owner adjusts the reward or withdraws tokens at any time
 */
#[program]
pub mod airdrop {
    use super::*;

    /**
     * Creates a new airdrop controller and funds its vault
     *
     * @param reward_amount - Tokens paid to each successful claimant
     * @param initial_deposit - Tokens moved from the creator into the vault
     *
     * Access Control: Anyone, the creator becomes owner
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        reward_amount: u64,
        initial_deposit: u64,
    ) -> Result<()> {
        handle_create_airdrop(ctx, reward_amount, initial_deposit)
    }

    /**
     * Adds tokens to the vault
     *
     * Access Control: Anyone
     */
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        handle_deposit_tokens(ctx, amount)
    }

    /**
     * Whitelists a batch of identities
     *
     * @param identities - Identities to whitelist, recipient PDAs passed as remaining accounts in the same order
     *
     * Access Control: Owner only
     */
    pub fn add_to_whitelist<'info>(
        ctx: Context<'_, '_, 'info, 'info, AddToWhitelist<'info>>,
        identities: Vec<Pubkey>,
    ) -> Result<()> {
        handle_add_to_whitelist(ctx, identities)
    }

    /**
     * Records a task completion for the caller
     *
     * @param task_id - 1, 2 or 3
     *
     * Access Control: Anyone
     */
    pub fn complete_task(ctx: Context<CompleteTask>, task_id: u8) -> Result<()> {
        handle_complete_task(ctx, task_id)
    }

    /**
     * Pays the current reward to an eligible caller, once
     *
     * Access Control: Whitelisted callers or callers with three task completions
     */
    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>) -> Result<()> {
        handle_claim(ctx)
    }

    /**
     * Returns the airdrop-token balance of an identity
     *
     * @param identity - Identity whose associated token account is passed in
     *
     * Access Control: Anyone, read-only
     */
    pub fn check_balance(ctx: Context<CheckBalance>, identity: Pubkey) -> Result<u64> {
        handle_check_balance(ctx, identity)
    }

    /**
     * Replaces the reward amount
     *
     * Access Control: Owner only
     */
    pub fn set_reward_amount(ctx: Context<SetRewardAmount>, new_amount: u64) -> Result<()> {
        handle_set_reward_amount(ctx, new_amount)
    }

    /**
     * Withdraws tokens from the vault to the owner
     *
     * Access Control: Owner only
     */
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        handle_withdraw_tokens(ctx, amount)
    }

    /**
     * Transfers ownership of the airdrop
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }
}
