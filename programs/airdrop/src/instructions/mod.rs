pub mod create_airdrop;
pub mod deposit_tokens;
pub mod add_to_whitelist;
pub mod complete_task;
pub mod claim;
pub mod check_balance;
pub mod set_reward_amount;
pub mod withdraw_tokens;
pub mod transfer_ownership;

pub use create_airdrop::*;
pub use deposit_tokens::*;
pub use add_to_whitelist::*;
pub use complete_task::*;
pub use claim::*;
pub use check_balance::*;
pub use set_reward_amount::*;
pub use withdraw_tokens::*;
pub use transfer_ownership::*;
