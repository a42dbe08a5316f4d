//! Payout Service Library
//!
//! 创作者收款账户登记与提现：
//! - `domain`: 收款账户、提现记录、处理方与仓储端口
//! - `application`: 账户登记服务、提现服务
//! - `infrastructure`: PostgreSQL / 内存存储、Paystack 处理方、metrics
//! - `api`: axum HTTP 接口

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
