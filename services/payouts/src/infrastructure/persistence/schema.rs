//! 表结构（启动时按需创建）

pub const CREATE_BANK_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS bank_accounts (
    id              UUID PRIMARY KEY,
    creator_id      UUID NOT NULL UNIQUE,
    account_number  VARCHAR(10) NOT NULL,
    account_name    VARCHAR(255) NOT NULL,
    bank_code       VARCHAR(16) NOT NULL,
    bank_name       VARCHAR(255) NOT NULL,
    recipient_code  VARCHAR(64) NOT NULL,
    currency        VARCHAR(3) NOT NULL DEFAULT 'NGN',
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_PAYOUTS: &str = r#"
CREATE TABLE IF NOT EXISTS payouts (
    id              UUID PRIMARY KEY,
    creator_id      UUID NOT NULL,
    amount          BIGINT NOT NULL CHECK (amount > 0),
    currency        VARCHAR(3) NOT NULL,
    reference       VARCHAR(64) NOT NULL UNIQUE,
    status          VARCHAR(16) NOT NULL,
    recipient_code  VARCHAR(64) NOT NULL,
    transfer_code   VARCHAR(64),
    description     TEXT,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_PAYOUTS_CREATOR_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_payouts_creator_created
    ON payouts (creator_id, created_at DESC)
"#;

/// 按依赖顺序排列的全部 DDL
pub const ALL: &[&str] = &[CREATE_BANK_ACCOUNTS, CREATE_PAYOUTS, CREATE_PAYOUTS_CREATOR_INDEX];
