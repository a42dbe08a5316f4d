//! Paystack 错误定义

use creatorpay_errors::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaystackError {
    /// 连接失败、超时等传输层错误
    #[error("Paystack request failed: {0}")]
    Transport(String),

    /// Paystack 服务端错误、限流或鉴权失败
    #[error("Paystack unavailable ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Paystack 拒绝了请求内容
    #[error("Paystack rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected Paystack response: {0}")]
    InvalidResponse(String),

    #[error("Invalid Paystack configuration: {0}")]
    Config(String),
}

impl PaystackError {
    /// 是否为请求内容被拒绝（而非服务不可用）
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// 用于 metrics 标签
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Upstream { .. } => "upstream",
            Self::Rejected { .. } => "rejected",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Config(_) => "config",
        }
    }
}

impl From<PaystackError> for AppError {
    fn from(err: PaystackError) -> Self {
        match err {
            PaystackError::Rejected { message, .. } => AppError::validation(message),
            PaystackError::Config(message) => AppError::internal(message),
            other => AppError::upstream_unavailable(other.to_string()),
        }
    }
}
