pub mod ledger;
pub mod token;

pub use ledger::*;
pub use token::*;
