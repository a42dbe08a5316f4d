//! PostgreSQL 收款账户 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use creatorpay_adapter_postgres::{check_connection, map_sqlx_error};
use creatorpay_common::CreatorId;
use creatorpay_domain_core::Currency;
use creatorpay_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{AccountNumber, BankAccount, BankAccountRepository, BankCode};

pub struct PostgresBankAccountRepository {
    pool: PgPool,
}

impl PostgresBankAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BankAccountRepository for PostgresBankAccountRepository {
    async fn find_by_creator(&self, creator_id: &CreatorId) -> AppResult<Option<BankAccount>> {
        let row = sqlx::query_as::<_, BankAccountRow>(
            r#"
            SELECT id, creator_id, account_number, account_name, bank_code, bank_name,
                   recipient_code, currency, created_at, updated_at
            FROM bank_accounts
            WHERE creator_id = $1
            "#,
        )
        .bind(creator_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find bank account", e))?;

        row.map(BankAccountRow::into_account).transpose()
    }

    async fn upsert(&self, account: &BankAccount) -> AppResult<BankAccount> {
        // 单条语句完成插入或覆盖，creator_id 唯一约束保证每个创作者只有一行
        let row = sqlx::query_as::<_, BankAccountRow>(
            r#"
            INSERT INTO bank_accounts (id, creator_id, account_number, account_name, bank_code,
                                       bank_name, recipient_code, currency, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (creator_id) DO UPDATE SET
                account_number = EXCLUDED.account_number,
                account_name = EXCLUDED.account_name,
                bank_code = EXCLUDED.bank_code,
                bank_name = EXCLUDED.bank_name,
                recipient_code = EXCLUDED.recipient_code,
                currency = EXCLUDED.currency,
                updated_at = GREATEST(EXCLUDED.updated_at, bank_accounts.updated_at)
            RETURNING id, creator_id, account_number, account_name, bank_code, bank_name,
                      recipient_code, currency, created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(account.creator_id.0)
        .bind(account.account_number.as_str())
        .bind(&account.account_name)
        .bind(account.bank_code.as_str())
        .bind(&account.bank_name)
        .bind(&account.recipient_code)
        .bind(account.currency.as_str())
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to save bank account", e))?;

        row.into_account()
    }

    async fn delete_by_creator(&self, creator_id: &CreatorId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bank_accounts WHERE creator_id = $1")
            .bind(creator_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete bank account", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<()> {
        check_connection(&self.pool).await
    }
}

#[derive(sqlx::FromRow)]
struct BankAccountRow {
    id: Uuid,
    creator_id: Uuid,
    account_number: String,
    account_name: String,
    bank_code: String,
    bank_name: String,
    recipient_code: String,
    currency: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BankAccountRow {
    fn into_account(self) -> AppResult<BankAccount> {
        let account_number = AccountNumber::new(self.account_number)
            .map_err(|e| AppError::database(format!("Corrupt bank account {}: {}", self.id, e)))?;
        let bank_code = BankCode::new(self.bank_code)
            .map_err(|e| AppError::database(format!("Corrupt bank account {}: {}", self.id, e)))?;

        Ok(BankAccount {
            id: self.id,
            creator_id: CreatorId::from_uuid(self.creator_id),
            account_number,
            account_name: self.account_name,
            bank_code,
            bank_name: self.bank_name,
            recipient_code: self.recipient_code,
            currency: Currency::new(&self.currency),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
