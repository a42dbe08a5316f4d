//! 收款银行账户

use chrono::{DateTime, Utc};
use creatorpay_common::CreatorId;
use creatorpay_domain_core::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 尼日利亚 NUBAN 账号长度
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// 银行代码最大长度
const MAX_BANK_CODE_LEN: usize = 16;

/// 银行账号值对象：恰好 10 位 ASCII 数字
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, AccountNumberError> {
        let value = value.into();

        // 按字节计数，非 ASCII 字符不会被误算成一位
        if value.len() != ACCOUNT_NUMBER_LEN {
            return Err(AccountNumberError::InvalidLength(value.len()));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountNumberError::NonNumeric);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 脱敏显示，只保留后四位
    pub fn masked(&self) -> String {
        format!("******{}", &self.0[ACCOUNT_NUMBER_LEN - 4..])
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountNumberError {
    #[error("Account number must be exactly 10 digits, got {0} characters")]
    InvalidLength(usize),

    #[error("Account number must contain digits only")]
    NonNumeric,
}

/// 银行代码值对象
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankCode(String);

impl BankCode {
    pub fn new(value: impl Into<String>) -> Result<Self, BankCodeError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(BankCodeError::Empty);
        }
        if value.len() > MAX_BANK_CODE_LEN
            || !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(BankCodeError::InvalidFormat(value));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankCodeError {
    #[error("Bank code is required")]
    Empty,

    #[error("Invalid bank code: {0}")]
    InvalidFormat(String),
}

/// 经处理方校验过的账户信息
#[derive(Debug, Clone)]
pub struct VerifiedAccount {
    pub account_number: AccountNumber,
    pub account_name: String,
    pub bank_code: BankCode,
    pub bank_name: String,
    pub recipient_code: String,
    pub currency: Currency,
}

/// 创作者的收款账户，每个创作者至多一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: Uuid,
    pub creator_id: CreatorId,
    pub account_number: AccountNumber,
    pub account_name: String,
    pub bank_code: BankCode,
    pub bank_name: String,
    pub recipient_code: String,
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    /// 以新 id 构建；若该创作者已有账户，持久化时保留原 id 与 created_at
    pub fn new(creator_id: CreatorId, verified: VerifiedAccount) -> Self {
        let now = Utc::now();
        Self {
            id: creatorpay_common::utils::new_id(),
            creator_id,
            account_number: verified.account_number,
            account_name: verified.account_name,
            bank_code: verified.bank_code,
            bank_name: verified.bank_name,
            recipient_code: verified.recipient_code,
            currency: verified.currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// 用新提交的账户覆盖可变字段
    pub fn overwrite_with(&mut self, incoming: &BankAccount) {
        self.account_number = incoming.account_number.clone();
        self.account_name = incoming.account_name.clone();
        self.bank_code = incoming.bank_code.clone();
        self.bank_name = incoming.bank_name.clone();
        self.recipient_code = incoming.recipient_code.clone();
        self.currency = incoming.currency.clone();
        self.updated_at = incoming.updated_at.max(self.updated_at);
    }
}
