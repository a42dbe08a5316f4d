//! 银行与账号校验结果

use serde::{Deserialize, Serialize};

/// 银行代码在处理方列表中找不到时使用的名称
pub const UNKNOWN_BANK: &str = "Unknown Bank";

/// 处理方支持的银行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    pub code: String,
    pub active: bool,
}

/// 在银行列表中查找银行名称
pub fn bank_name_for(banks: &[Bank], code: &str) -> String {
    banks
        .iter()
        .find(|bank| bank.code == code)
        .map(|bank| bank.name.clone())
        .unwrap_or_else(|| UNKNOWN_BANK.to_string())
}

/// 账号校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValidation {
    pub valid: bool,
    pub account_name: String,
}
