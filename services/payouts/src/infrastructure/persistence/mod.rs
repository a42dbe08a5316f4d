//! 持久化实现

mod in_memory;
mod postgres_bank_account_repository;
mod postgres_payout_repository;
pub mod schema;

pub use in_memory::*;
pub use postgres_bank_account_repository::*;
pub use postgres_payout_repository::*;
