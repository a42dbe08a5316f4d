//! 领域错误到 AppError 的映射

use creatorpay_domain_core::MoneyError;
use creatorpay_errors::AppError;

use crate::domain::{AccountNumberError, BankCodeError};

impl From<AccountNumberError> for AppError {
    fn from(err: AccountNumberError) -> Self {
        AppError::invalid_input(err.to_string())
    }
}

impl From<BankCodeError> for AppError {
    fn from(err: BankCodeError) -> Self {
        AppError::invalid_input(err.to_string())
    }
}

/// 金额错误属于输入错误
pub fn amount_error(err: MoneyError) -> AppError {
    AppError::invalid_input(err.to_string())
}
