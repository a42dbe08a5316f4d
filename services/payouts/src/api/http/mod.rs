//! HTTP API

mod accounts;
mod dto;
mod extract;
mod health;
mod middleware;
mod payouts;

pub use dto::*;
pub use extract::*;
pub use middleware::*;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use creatorpay_auth_core::TokenService;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::application::{AccountRegistrationService, PayoutService};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountRegistrationService>,
    pub payouts: Arc<PayoutService>,
    pub tokens: TokenService,
    /// 未启用 metrics 时为 None，`/metrics` 返回 404
    pub metrics: Option<PrometheusHandle>,
}

/// 构建完整路由
///
/// `/api` 下全部需要 bearer token；探针与 `/metrics` 无需认证。
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/payouts/banks", get(accounts::list_banks))
        .route("/payouts/validate-account", post(accounts::validate_account))
        .route("/creator/submit-account", post(accounts::submit_account))
        .route(
            "/payouts/bank-account",
            post(accounts::submit_account)
                .get(accounts::get_account)
                .delete(accounts::delete_account),
        )
        .route("/payouts/withdraw", post(payouts::withdraw))
        .route("/payouts/history", get(payouts::history))
        .route_layer(axum::middleware::from_fn_with_state(
            state.tokens.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", api)
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
