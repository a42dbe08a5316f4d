//! 提现服务

use std::sync::Arc;

use creatorpay_auth_core::{Role, require_role};
use creatorpay_common::{Pagination, PagedResult};
use creatorpay_domain_core::{Currency, Money};
use creatorpay_errors::{AppError, AppResult};
use tracing::{error, info, instrument};

use crate::domain::{
    BankAccountRepository, Caller, DEFAULT_DESCRIPTION, PaymentProcessor, Payout,
    PayoutRepository, PayoutStatus,
};
use crate::error::amount_error;
use crate::infrastructure::observability::{record_payout_failed, record_payout_initiated};

pub struct PayoutService {
    accounts: Arc<dyn BankAccountRepository>,
    payouts: Arc<dyn PayoutRepository>,
    processor: Arc<dyn PaymentProcessor>,
    currency: Currency,
}

impl PayoutService {
    pub fn new(
        accounts: Arc<dyn BankAccountRepository>,
        payouts: Arc<dyn PayoutRepository>,
        processor: Arc<dyn PaymentProcessor>,
        currency: Currency,
    ) -> Self {
        Self {
            accounts,
            payouts,
            processor,
            currency,
        }
    }

    /// 向已登记的收款账户提现
    ///
    /// `amount` 为主单位（Naira），以最小单位发给处理方并落库。
    #[instrument(skip(self, description), fields(creator_id = %caller.id))]
    pub async fn withdraw(
        &self,
        caller: &Caller,
        amount: f64,
        description: Option<String>,
    ) -> AppResult<Payout> {
        let result = self.initiate(caller, amount, description).await;
        if let Err(e) = &result {
            record_payout_failed(e);
        }
        result
    }

    async fn initiate(
        &self,
        caller: &Caller,
        amount: f64,
        description: Option<String>,
    ) -> AppResult<Payout> {
        require_role!(caller.role, Role::Creator, "withdraw funds");

        let amount =
            Money::positive_from_major(amount, self.currency.clone()).map_err(amount_error)?;

        let account = self
            .accounts
            .find_by_creator(&caller.id)
            .await?
            .ok_or_else(|| AppError::failed_precondition("Please add a valid bank account first"))?;

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let payout = Payout::new(
            caller.id,
            amount,
            Payout::new_reference(),
            account.recipient_code.clone(),
            Some(description),
        );

        let receipt = self
            .processor
            .initiate_transfer(
                &payout.amount,
                &payout.recipient_code,
                &payout.reference,
                payout.description.as_deref(),
            )
            .await?;

        let payout = payout.accepted(
            PayoutStatus::from_processor(&receipt.status),
            receipt.transfer_code,
        );

        // 转账已被处理方受理，落库失败需要人工对账
        if let Err(e) = self.payouts.insert(&payout).await {
            error!(
                reference = %payout.reference,
                transfer_code = ?payout.transfer_code,
                error = %e,
                "Transfer initiated but payout record was not saved"
            );
            return Err(e);
        }

        record_payout_initiated(payout.status.as_str());
        info!(
            reference = %payout.reference,
            amount = %payout.amount,
            status = %payout.status,
            "Payout initiated"
        );
        Ok(payout)
    }

    /// 创作者的提现记录，按时间倒序
    pub async fn history(
        &self,
        caller: &Caller,
        pagination: &Pagination,
    ) -> AppResult<PagedResult<Payout>> {
        require_role!(caller.role, Role::Creator, "view payouts");

        let (items, total) = self
            .payouts
            .list_by_creator(&caller.id, pagination)
            .await?;
        Ok(PagedResult::new(items, total, pagination))
    }
}
