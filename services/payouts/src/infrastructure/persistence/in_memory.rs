//! 内存存储（开发与测试使用）

use std::collections::HashMap;

use async_trait::async_trait;
use creatorpay_common::{CreatorId, Pagination};
use creatorpay_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::{BankAccount, BankAccountRepository, Payout, PayoutRepository};

#[derive(Default)]
pub struct InMemoryBankAccountRepository {
    accounts: RwLock<HashMap<CreatorId, BankAccount>>,
}

impl InMemoryBankAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前记录数
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl BankAccountRepository for InMemoryBankAccountRepository {
    async fn find_by_creator(&self, creator_id: &CreatorId) -> AppResult<Option<BankAccount>> {
        Ok(self.accounts.read().await.get(creator_id).cloned())
    }

    async fn upsert(&self, account: &BankAccount) -> AppResult<BankAccount> {
        // 写锁覆盖整个读改写过程
        let mut accounts = self.accounts.write().await;
        let saved = accounts
            .entry(account.creator_id)
            .and_modify(|existing| existing.overwrite_with(account))
            .or_insert_with(|| account.clone());
        Ok(saved.clone())
    }

    async fn delete_by_creator(&self, creator_id: &CreatorId) -> AppResult<bool> {
        Ok(self.accounts.write().await.remove(creator_id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPayoutRepository {
    payouts: RwLock<Vec<Payout>>,
}

impl InMemoryPayoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayoutRepository for InMemoryPayoutRepository {
    async fn insert(&self, payout: &Payout) -> AppResult<()> {
        let mut payouts = self.payouts.write().await;
        if payouts.iter().any(|p| p.reference == payout.reference) {
            return Err(AppError::conflict(format!(
                "Payout reference already exists: {}",
                payout.reference
            )));
        }
        payouts.push(payout.clone());
        Ok(())
    }

    async fn list_by_creator(
        &self,
        creator_id: &CreatorId,
        pagination: &Pagination,
    ) -> AppResult<(Vec<Payout>, u64)> {
        let payouts = self.payouts.read().await;

        // 插入顺序即时间顺序，倒序遍历得到最新优先
        let owned: Vec<&Payout> = payouts
            .iter()
            .rev()
            .filter(|p| &p.creator_id == creator_id)
            .collect();
        let total = owned.len() as u64;

        let items = owned
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(pagination.page_size as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }
}
