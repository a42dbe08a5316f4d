//! 基于 Paystack 的支付处理方

use async_trait::async_trait;
use creatorpay_adapter_paystack::{PaystackClient, PaystackError, TransferRequest};
use creatorpay_domain_core::{Currency, Money};
use creatorpay_errors::{AppError, AppResult};

use crate::domain::{AccountNumber, Bank, BankCode, PaymentProcessor, TransferReceipt};

pub struct PaystackProcessor {
    client: PaystackClient,
    currency: Currency,
}

impl PaystackProcessor {
    pub fn new(client: PaystackClient, currency: Currency) -> Self {
        Self { client, currency }
    }
}

#[async_trait]
impl PaymentProcessor for PaystackProcessor {
    async fn list_banks(&self) -> AppResult<Vec<Bank>> {
        // 银行列表不含调用方输入，任何拒绝都视为处理方不可用
        let banks = self
            .client
            .list_banks(self.currency.as_str())
            .await
            .map_err(|e| match e {
                PaystackError::Rejected { message, .. } => {
                    AppError::upstream_unavailable(format!("Failed to list banks: {}", message))
                }
                other => other.into(),
            })?;

        Ok(banks
            .into_iter()
            .map(|b| Bank {
                name: b.name,
                code: b.code,
                active: b.active,
            })
            .collect())
    }

    async fn resolve_account(
        &self,
        account_number: &AccountNumber,
        bank_code: &BankCode,
    ) -> AppResult<String> {
        let resolved = self
            .client
            .resolve_account(account_number.as_str(), bank_code.as_str())
            .await?;
        Ok(resolved.account_name)
    }

    async fn create_recipient(
        &self,
        account_name: &str,
        account_number: &AccountNumber,
        bank_code: &BankCode,
        currency: &Currency,
    ) -> AppResult<String> {
        let recipient = self
            .client
            .create_transfer_recipient(
                account_name,
                account_number.as_str(),
                bank_code.as_str(),
                currency.as_str(),
            )
            .await?;
        Ok(recipient.recipient_code)
    }

    async fn initiate_transfer(
        &self,
        amount: &Money,
        recipient_code: &str,
        reference: &str,
        reason: Option<&str>,
    ) -> AppResult<TransferReceipt> {
        let transfer = self
            .client
            .initiate_transfer(&TransferRequest {
                amount: amount.amount,
                recipient_code,
                reference,
                reason,
                currency: amount.currency.as_str(),
            })
            .await?;

        Ok(TransferReceipt {
            transfer_code: transfer.transfer_code,
            status: transfer.status,
        })
    }
}
