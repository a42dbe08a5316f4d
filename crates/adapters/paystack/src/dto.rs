//! Paystack 请求 / 响应结构

use serde::{Deserialize, Serialize};

/// Paystack 统一响应包装 `{status, message, data}`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// 错误响应只关心 message
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaystackBank {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "type", default)]
    pub bank_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub bank_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateTransferRecipientRequest<'a> {
    #[serde(rename = "type")]
    pub recipient_type: &'a str,
    pub name: &'a str,
    pub account_number: &'a str,
    pub bank_code: &'a str,
    pub currency: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipientData {
    pub recipient_code: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// 发起转账请求，金额为最小单位（kobo）
#[derive(Debug, Serialize)]
pub struct InitiateTransferRequest<'a> {
    pub source: &'a str,
    pub amount: i64,
    pub recipient: &'a str,
    pub reference: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
    pub currency: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferData {
    #[serde(default)]
    pub transfer_code: Option<String>,
    pub status: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
}
