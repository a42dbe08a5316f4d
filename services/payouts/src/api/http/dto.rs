//! HTTP 请求 / 响应结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AccountValidation, Bank, BankAccount, Payout};

#[derive(Debug, Serialize)]
pub struct BankResponse {
    pub name: String,
    pub code: String,
    pub active: bool,
}

impl From<Bank> for BankResponse {
    fn from(bank: Bank) -> Self {
        Self {
            name: bank.name,
            code: bank.code,
            active: bank.active,
        }
    }
}

/// 账号校验参数，可来自查询串或 JSON 请求体
#[derive(Debug, Default, Deserialize)]
pub struct ValidateAccountParams {
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
}

impl ValidateAccountParams {
    /// 请求体中的字段优先
    pub fn or(self, fallback: Self) -> Self {
        Self {
            account_number: self.account_number.or(fallback.account_number),
            bank_code: self.bank_code.or(fallback.bank_code),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateAccountResponse {
    pub valid: bool,
    pub account_name: String,
}

impl From<AccountValidation> for ValidateAccountResponse {
    fn from(v: AccountValidation) -> Self {
        Self {
            valid: v.valid,
            account_name: v.account_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitAccountRequest {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Debug, Serialize)]
pub struct BankAccountResponse {
    pub id: Uuid,
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub bank_code: String,
    pub recipient_code: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BankAccount> for BankAccountResponse {
    fn from(a: BankAccount) -> Self {
        Self {
            id: a.id,
            account_number: a.account_number.to_string(),
            account_name: a.account_name,
            bank_name: a.bank_name,
            bank_code: a.bank_code.to_string(),
            recipient_code: a.recipient_code,
            currency: a.currency.to_string(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
    pub deleted: bool,
    pub message: String,
}

impl DeleteAccountResponse {
    pub fn new(deleted: bool) -> Self {
        let message = if deleted {
            "Bank account deleted"
        } else {
            "No bank account to delete"
        };
        Self {
            success: true,
            deleted,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    /// 主单位金额（Naira）
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    pub id: Uuid,
    pub reference: String,
    /// 主单位金额
    pub amount: f64,
    /// 最小单位金额（kobo）
    pub amount_minor: i64,
    pub currency: String,
    pub status: String,
    pub recipient_code: String,
    pub transfer_code: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payout> for PayoutResponse {
    fn from(p: Payout) -> Self {
        Self {
            id: p.id,
            reference: p.reference,
            amount: p.amount.to_major(),
            amount_minor: p.amount.amount,
            currency: p.amount.currency.to_string(),
            status: p.status.to_string(),
            recipient_code: p.recipient_code,
            transfer_code: p.transfer_code,
            description: p.description,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
