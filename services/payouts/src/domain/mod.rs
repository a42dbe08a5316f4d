//! 领域层

pub mod bank;
pub mod bank_account;
pub mod caller;
pub mod payout;
pub mod processor;
pub mod repositories;

pub use bank::*;
pub use bank_account::*;
pub use caller::*;
pub use payout::*;
pub use processor::*;
pub use repositories::*;
