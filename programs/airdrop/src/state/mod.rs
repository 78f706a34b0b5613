pub mod airdrop_state;
pub mod recipient_state;

pub use airdrop_state::*;
pub use recipient_state::*;
