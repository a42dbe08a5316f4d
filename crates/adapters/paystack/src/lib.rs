//! creatorpay-adapter-paystack - Paystack 支付处理方适配器
//!
//! 覆盖银行列表、账号解析、转账收款人创建与转账发起四个接口。
//! 不做重试，失败立即返回。

mod client;
mod dto;
mod error;

pub use client::*;
pub use dto::*;
pub use error::*;
