use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Values controlling eligibility, batch limits and PDA derivation for the
 * airdrop program.
 */

/// ===== ELIGIBILITY CONSTANTS =====

/// Number of task completions that makes a non-whitelisted identity eligible
/// - Compared against the completion counter, not the set of task ids
#[constant]
pub const TASK_COMPLETION_THRESHOLD: u8 = 3;

/// Lowest accepted task id
pub const MIN_TASK_ID: u8 = 1;

/// Highest accepted task id
pub const MAX_TASK_ID: u8 = 3;

/// ===== BATCH LIMITS =====

/// Maximum identities accepted by a single add_to_whitelist call
/// - Each identity costs 65 bytes: 32 of instruction data, a 32 byte account
///   key and its 1 byte index
/// - Fixed accounts, signature and blockhash take about 280 bytes, so 14
///   identities fit the 1232 byte packet without an address lookup table
pub const MAX_WHITELIST_BATCH: usize = 14;

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop config PDA derivation
/// - Used in: ["airdrop", token_mint, creator]
/// - One controller per (token, creator) pair
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault's token authority is the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for per-recipient state PDA derivation
/// - Used in: ["recipient", airdrop_key, identity]
/// - Holds whitelist flag, task counter and claim status
pub const RECIPIENT_SEED: &str = "recipient";
