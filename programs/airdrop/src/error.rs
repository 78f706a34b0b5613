use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Caller is not the airdrop owner")]
    Unauthorized,
    #[msg("New owner cannot be the default public key")]
    InvalidOwner,

    // Eligibility errors
    #[msg("Invalid task ID")]
    InvalidTaskId,
    #[msg("Not eligible for airdrop")]
    NotEligible,
    #[msg("Already claimed")]
    AlreadyClaimed,

    // Ledger errors
    #[msg("Insufficient vault balance")]
    InsufficientBalance,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Whitelist batch errors
    #[msg("Whitelist batch exceeds the maximum size")]
    WhitelistBatchTooLarge,
    #[msg("Recipient account does not match the expected PDA")]
    RecipientAccountMismatch,

    // Balance lookup errors
    #[msg("Token account is not the identity's associated token account")]
    BalanceAccountMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
}
