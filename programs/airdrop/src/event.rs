use anchor_lang::prelude::*;

/// Event emitted when a new airdrop controller is created
#[event]
pub struct AirdropCreated {
    /// The airdrop config account public key
    pub airdrop: Pubkey,
    /// Owner (and creator) of the airdrop
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Reward paid to each successful claimant
    pub reward_amount: u64,
    /// Tokens moved into the vault at creation
    pub initial_deposit: u64,
}

/// Event emitted when the vault is topped up
#[event]
pub struct TokensDeposited {
    pub airdrop: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    /// Vault balance after the deposit
    pub vault_balance: u64,
}

/// Event emitted once per identity added to the whitelist
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelisted {
    pub airdrop: Pubkey,
    pub identity: Pubkey,
}

/// Event emitted when a caller reports a task completion
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompleted {
    pub airdrop: Pubkey,
    pub identity: Pubkey,
    pub task_id: u8,
    /// Counter value after this completion
    pub completions: u8,
}

/// Event emitted when a claim has been paid out
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropClaimed {
    pub airdrop: Pubkey,
    pub identity: Pubkey,
    pub amount: u64,
}

/// Event emitted when the owner changes the reward amount
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardAmountUpdated {
    pub airdrop: Pubkey,
    pub old_amount: u64,
    pub new_amount: u64,
}

/// Event emitted when the owner withdraws tokens from the vault
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensWithdrawn {
    pub airdrop: Pubkey,
    /// Owner who received the tokens
    pub owner: Pubkey,
    pub amount: u64,
    /// Vault balance left after the withdrawal
    pub remaining: u64,
}

/// Event emitted when ownership moves to a new key
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub airdrop: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
