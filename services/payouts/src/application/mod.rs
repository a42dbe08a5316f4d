//! 应用层

mod account_service;
mod payout_service;

pub use account_service::*;
pub use payout_service::*;
