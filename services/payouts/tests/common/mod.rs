//! 集成测试共用的 mock 与装配
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use creatorpay_auth_core::{Role, TokenService};
use creatorpay_common::CreatorId;
use creatorpay_domain_core::{Currency, Money};
use creatorpay_errors::{AppError, AppResult};
use payout_service::api::http::AppState;
use payout_service::application::{AccountRegistrationService, PayoutService};
use payout_service::domain::{
    AccountNumber, Bank, BankCode, Caller, PaymentProcessor, TransferReceipt,
};
use payout_service::infrastructure::persistence::{
    InMemoryBankAccountRepository, InMemoryPayoutRepository,
};

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";

/// 已发起的转账
#[derive(Debug, Clone)]
pub struct RecordedTransfer {
    pub amount: i64,
    pub recipient_code: String,
    pub reference: String,
    pub reason: Option<String>,
}

/// 手写的支付处理方 mock
///
/// 已知账号：0690000031@011 → ADA LOVELACE，0123456789@044 → GRACE HOPPER
pub struct MockProcessor {
    calls: Mutex<Vec<&'static str>>,
    recipient_seq: AtomicUsize,
    pub unavailable: AtomicBool,
    pub reject_recipient: AtomicBool,
    pub transfer_status: Mutex<String>,
    pub transfers: Mutex<Vec<RecordedTransfer>>,
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            recipient_seq: AtomicUsize::new(0),
            unavailable: AtomicBool::new(false),
            reject_recipient: AtomicBool::new(false),
            transfer_status: Mutex::new("pending".to_string()),
            transfers: Mutex::new(Vec::new()),
        }
    }
}

impl MockProcessor {
    fn record(&self, operation: &'static str) -> AppResult<()> {
        self.calls.lock().unwrap().push(operation);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("Paystack request failed: connection refused"));
        }
        Ok(())
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|op| **op == operation)
            .count()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_transfer_status(&self, status: &str) {
        *self.transfer_status.lock().unwrap() = status.to_string();
    }
}

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn list_banks(&self) -> AppResult<Vec<Bank>> {
        self.record("list_banks")?;
        Ok(vec![
            Bank {
                name: "Access Bank".to_string(),
                code: "044".to_string(),
                active: true,
            },
            Bank {
                name: "First Bank of Nigeria".to_string(),
                code: "011".to_string(),
                active: true,
            },
        ])
    }

    async fn resolve_account(
        &self,
        account_number: &AccountNumber,
        bank_code: &BankCode,
    ) -> AppResult<String> {
        self.record("resolve_account")?;
        match (account_number.as_str(), bank_code.as_str()) {
            ("0690000031", "011") => Ok("ADA LOVELACE".to_string()),
            ("0123456789", "044") => Ok("GRACE HOPPER".to_string()),
            ("0690000031", "999") => Ok("ADA LOVELACE".to_string()),
            ("1111111111", "011") => Ok(String::new()),
            _ => Err(AppError::validation(
                "Could not resolve account name. Check parameters or try again.",
            )),
        }
    }

    async fn create_recipient(
        &self,
        _account_name: &str,
        _account_number: &AccountNumber,
        _bank_code: &BankCode,
        _currency: &Currency,
    ) -> AppResult<String> {
        self.record("create_recipient")?;
        if self.reject_recipient.load(Ordering::SeqCst) {
            return Err(AppError::validation("Recipient could not be created"));
        }
        let seq = self.recipient_seq.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("RCP_{:04}", seq))
    }

    async fn initiate_transfer(
        &self,
        amount: &Money,
        recipient_code: &str,
        reference: &str,
        reason: Option<&str>,
    ) -> AppResult<TransferReceipt> {
        self.record("initiate_transfer")?;
        self.transfers.lock().unwrap().push(RecordedTransfer {
            amount: amount.amount,
            recipient_code: recipient_code.to_string(),
            reference: reference.to_string(),
            reason: reason.map(str::to_string),
        });
        Ok(TransferReceipt {
            transfer_code: Some(format!("TRF_{}", &reference[reference.len() - 6..])),
            status: self.transfer_status.lock().unwrap().clone(),
        })
    }
}

/// 内存存储 + mock 处理方装配的服务
pub struct Harness {
    pub accounts_repo: Arc<InMemoryBankAccountRepository>,
    pub payouts_repo: Arc<InMemoryPayoutRepository>,
    pub processor: Arc<MockProcessor>,
    pub accounts: Arc<AccountRegistrationService>,
    pub payouts: Arc<PayoutService>,
}

impl Harness {
    pub fn new() -> Self {
        let accounts_repo = Arc::new(InMemoryBankAccountRepository::new());
        let payouts_repo = Arc::new(InMemoryPayoutRepository::new());
        let processor = Arc::new(MockProcessor::default());

        let accounts = Arc::new(AccountRegistrationService::new(
            accounts_repo.clone(),
            processor.clone(),
            Currency::ngn(),
        ));
        let payouts = Arc::new(PayoutService::new(
            accounts_repo.clone(),
            payouts_repo.clone(),
            processor.clone(),
            Currency::ngn(),
        ));

        Self {
            accounts_repo,
            payouts_repo,
            processor,
            accounts,
            payouts,
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            accounts: self.accounts.clone(),
            payouts: self.payouts.clone(),
            tokens: tokens(),
            metrics: None,
        }
    }
}

pub fn tokens() -> TokenService {
    TokenService::new(JWT_SECRET, 3600, "creatorpay", "creatorpay-api")
}

pub fn creator() -> Caller {
    Caller::new(CreatorId::new(), Role::Creator)
}

pub fn business() -> Caller {
    Caller::new(CreatorId::new(), Role::Business)
}
