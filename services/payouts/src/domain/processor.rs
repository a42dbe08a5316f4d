//! 支付处理方端口

use async_trait::async_trait;
use creatorpay_domain_core::{Currency, Money};
use creatorpay_errors::AppResult;

use super::bank::Bank;
use super::bank_account::{AccountNumber, BankCode};

/// 转账受理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub transfer_code: Option<String>,
    /// 处理方原始状态
    pub status: String,
}

/// 支付处理方
///
/// 实现方负责把处理方错误映射为：拒绝 → `Validation`，不可达 → `UpstreamUnavailable`。
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// 支持的银行列表
    async fn list_banks(&self) -> AppResult<Vec<Bank>>;

    /// 解析账号，返回开户名
    async fn resolve_account(
        &self,
        account_number: &AccountNumber,
        bank_code: &BankCode,
    ) -> AppResult<String>;

    /// 创建收款人，返回 recipient_code
    async fn create_recipient(
        &self,
        account_name: &str,
        account_number: &AccountNumber,
        bank_code: &BankCode,
        currency: &Currency,
    ) -> AppResult<String>;

    /// 从余额向收款人转账
    async fn initiate_transfer(
        &self,
        amount: &Money,
        recipient_code: &str,
        reference: &str,
        reason: Option<&str>,
    ) -> AppResult<TransferReceipt>;
}
