//! 收款账户登记服务

use std::sync::Arc;

use creatorpay_auth_core::{Role, require_role};
use creatorpay_domain_core::Currency;
use creatorpay_errors::{AppError, AppResult};
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    AccountNumber, AccountValidation, Bank, BankAccount, BankAccountRepository, BankCode, Caller,
    PaymentProcessor, VerifiedAccount, bank_name_for,
};
use crate::infrastructure::observability::{record_account_deleted, record_account_submission};

pub struct AccountRegistrationService {
    accounts: Arc<dyn BankAccountRepository>,
    processor: Arc<dyn PaymentProcessor>,
    currency: Currency,
}

impl AccountRegistrationService {
    pub fn new(
        accounts: Arc<dyn BankAccountRepository>,
        processor: Arc<dyn PaymentProcessor>,
        currency: Currency,
    ) -> Self {
        Self {
            accounts,
            processor,
            currency,
        }
    }

    /// 处理方支持的银行列表，不落库
    pub async fn list_banks(&self) -> AppResult<Vec<Bank>> {
        self.processor.list_banks().await
    }

    /// 校验账号与银行是否匹配
    pub async fn validate_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> AppResult<AccountValidation> {
        let (account_number, bank_code) = parse_account_input(account_number, bank_code)?;
        self.resolve(&account_number, &bank_code).await
    }

    /// 登记或更新创作者的收款账户
    ///
    /// 先检查输入格式，再检查角色；处理方调用全部成功后才写库。
    #[instrument(skip(self, account_number, bank_code), fields(creator_id = %caller.id))]
    pub async fn submit_account(
        &self,
        caller: &Caller,
        account_number: &str,
        bank_code: &str,
    ) -> AppResult<BankAccount> {
        let result = self.register(caller, account_number, bank_code).await;
        record_account_submission(&result);
        result
    }

    async fn register(
        &self,
        caller: &Caller,
        account_number: &str,
        bank_code: &str,
    ) -> AppResult<BankAccount> {
        let (account_number, bank_code) = parse_account_input(account_number, bank_code)?;
        require_role!(caller.role, Role::Creator, "add bank accounts");

        let validation = self.resolve(&account_number, &bank_code).await?;

        let recipient_code = self
            .processor
            .create_recipient(
                &validation.account_name,
                &account_number,
                &bank_code,
                &self.currency,
            )
            .await
            .map_err(|e| match e {
                AppError::Validation(msg) => {
                    AppError::upstream_unavailable(format!("Failed to create recipient: {}", msg))
                }
                other => other,
            })?;

        let banks = self.processor.list_banks().await?;
        let bank_name = bank_name_for(&banks, bank_code.as_str());

        let account = BankAccount::new(
            caller.id,
            VerifiedAccount {
                account_number,
                account_name: validation.account_name,
                bank_code,
                bank_name,
                recipient_code,
                currency: self.currency.clone(),
            },
        );
        let saved = self.accounts.upsert(&account).await?;

        info!(
            account_id = %saved.id,
            account = %saved.account_number.masked(),
            bank_code = %saved.bank_code,
            "Bank account saved"
        );
        Ok(saved)
    }

    /// 获取创作者的收款账户
    pub async fn get_account(&self, caller: &Caller) -> AppResult<BankAccount> {
        require_role!(caller.role, Role::Creator, "view bank accounts");

        self.accounts
            .find_by_creator(&caller.id)
            .await?
            .ok_or_else(|| AppError::not_found("No bank account found"))
    }

    /// 删除创作者的收款账户；不存在时同样成功，返回 false
    pub async fn delete_account(&self, caller: &Caller) -> AppResult<bool> {
        require_role!(caller.role, Role::Creator, "delete bank accounts");

        let deleted = self.accounts.delete_by_creator(&caller.id).await?;
        record_account_deleted(deleted);

        if deleted {
            info!(creator_id = %caller.id, "Bank account deleted");
        } else {
            debug!(creator_id = %caller.id, "No bank account to delete");
        }
        Ok(deleted)
    }

    /// 存储可用性
    pub async fn health_check(&self) -> AppResult<()> {
        self.accounts.health_check().await
    }

    async fn resolve(
        &self,
        account_number: &AccountNumber,
        bank_code: &BankCode,
    ) -> AppResult<AccountValidation> {
        let account_name = self
            .processor
            .resolve_account(account_number, bank_code)
            .await?;

        if account_name.trim().is_empty() {
            warn!(bank_code = %bank_code, "Processor resolved account without a name");
            return Err(AppError::validation("Invalid account number or bank code"));
        }

        Ok(AccountValidation {
            valid: true,
            account_name,
        })
    }
}

fn parse_account_input(account_number: &str, bank_code: &str) -> AppResult<(AccountNumber, BankCode)> {
    Ok((AccountNumber::new(account_number)?, BankCode::new(bank_code)?))
}
