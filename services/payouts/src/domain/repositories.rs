//! Repository trait

use async_trait::async_trait;
use creatorpay_common::{CreatorId, Pagination};
use creatorpay_errors::AppResult;

use super::bank_account::BankAccount;
use super::payout::Payout;

#[async_trait]
pub trait BankAccountRepository: Send + Sync {
    /// 查找创作者的收款账户
    async fn find_by_creator(&self, creator_id: &CreatorId) -> AppResult<Option<BankAccount>>;

    /// 原子地创建或覆盖创作者的收款账户，返回持久化后的记录
    ///
    /// 已存在时保留 `id` 与 `created_at`。
    async fn upsert(&self, account: &BankAccount) -> AppResult<BankAccount>;

    /// 删除创作者的收款账户，返回是否确实删除了记录
    async fn delete_by_creator(&self, creator_id: &CreatorId) -> AppResult<bool>;

    /// 存储可用性检查
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
pub trait PayoutRepository: Send + Sync {
    /// 保存提现记录，reference 重复时返回 Conflict
    async fn insert(&self, payout: &Payout) -> AppResult<()>;

    /// 分页查询创作者的提现记录（按创建时间倒序），同时返回总数
    async fn list_by_creator(
        &self,
        creator_id: &CreatorId,
        pagination: &Pagination,
    ) -> AppResult<(Vec<Payout>, u64)>;
}
