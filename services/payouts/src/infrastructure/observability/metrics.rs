//! Payout Service Metrics
//!
//! 业务指标记录

use creatorpay_errors::AppError;
use metrics::counter;

// ============================================================================
// 收款账户 Metrics
// ============================================================================

/// 记录收款账户提交结果
pub fn record_account_submission<T>(result: &Result<T, AppError>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => outcome_label(e),
    };
    counter!("creatorpay_account_submissions_total", "outcome" => outcome).increment(1);
}

/// 记录收款账户删除
pub fn record_account_deleted(deleted: bool) {
    let labels = [("deleted", deleted.to_string())];
    counter!("creatorpay_account_deletions_total", &labels).increment(1);
}

// ============================================================================
// 提现 Metrics
// ============================================================================

/// 记录已受理的提现
pub fn record_payout_initiated(status: &str) {
    let labels = [("status", status.to_string())];
    counter!("creatorpay_payouts_initiated_total", &labels).increment(1);
}

/// 记录被拒绝或失败的提现请求
pub fn record_payout_failed(err: &AppError) {
    counter!("creatorpay_payouts_failed_total", "outcome" => outcome_label(err)).increment(1);
}

fn outcome_label(err: &AppError) -> &'static str {
    match err {
        AppError::InvalidInput(_) => "invalid_input",
        AppError::Unauthenticated(_) | AppError::Forbidden(_) => "unauthorized",
        AppError::Validation(_) => "rejected",
        AppError::FailedPrecondition(_) => "precondition",
        AppError::UpstreamUnavailable(_) => "upstream_unavailable",
        _ => "error",
    }
}
