//! sqlx 错误映射

use creatorpay_errors::AppError;

/// PostgreSQL 唯一约束冲突
const UNIQUE_VIOLATION: &str = "23505";

/// 将 sqlx 错误映射为 AppError，唯一约束冲突映射为 Conflict
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return AppError::conflict(format!("{}: {}", context, db_err.message()));
        }
    }
    AppError::database(format!("{}: {}", context, err))
}
