//! PostgreSQL 提现记录 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use creatorpay_adapter_postgres::map_sqlx_error;
use creatorpay_common::{CreatorId, Pagination};
use creatorpay_domain_core::{Currency, Money};
use creatorpay_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Payout, PayoutRepository, PayoutStatus};

pub struct PostgresPayoutRepository {
    pool: PgPool,
}

impl PostgresPayoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayoutRepository for PostgresPayoutRepository {
    async fn insert(&self, payout: &Payout) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO payouts (id, creator_id, amount, currency, reference, status,
                                 recipient_code, transfer_code, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(payout.id)
        .bind(payout.creator_id.0)
        .bind(payout.amount.amount)
        .bind(payout.amount.currency.as_str())
        .bind(&payout.reference)
        .bind(payout.status.as_str())
        .bind(&payout.recipient_code)
        .bind(&payout.transfer_code)
        .bind(&payout.description)
        .bind(payout.created_at)
        .bind(payout.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to save payout", e))?;

        Ok(())
    }

    async fn list_by_creator(
        &self,
        creator_id: &CreatorId,
        pagination: &Pagination,
    ) -> AppResult<(Vec<Payout>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payouts WHERE creator_id = $1")
            .bind(creator_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to count payouts", e))?;

        let rows = sqlx::query_as::<_, PayoutRow>(
            r#"
            SELECT id, creator_id, amount, currency, reference, status, recipient_code,
                   transfer_code, description, created_at, updated_at
            FROM payouts
            WHERE creator_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(creator_id.0)
        .bind(pagination.page_size as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list payouts", e))?;

        let payouts = rows
            .into_iter()
            .map(PayoutRow::into_payout)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((payouts, total.max(0) as u64))
    }
}

#[derive(sqlx::FromRow)]
struct PayoutRow {
    id: Uuid,
    creator_id: Uuid,
    amount: i64,
    currency: String,
    reference: String,
    status: String,
    recipient_code: String,
    transfer_code: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PayoutRow {
    fn into_payout(self) -> AppResult<Payout> {
        let status = self
            .status
            .parse::<PayoutStatus>()
            .map_err(|e| AppError::database(format!("Corrupt payout {}: {}", self.id, e)))?;

        Ok(Payout {
            id: self.id,
            creator_id: CreatorId::from_uuid(self.creator_id),
            amount: Money::new(self.amount, Currency::new(&self.currency)),
            reference: self.reference,
            status,
            recipient_code: self.recipient_code,
            transfer_code: self.transfer_code,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
