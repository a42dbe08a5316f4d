//! 提现接口

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use creatorpay_common::{PagedResult, Pagination};
use creatorpay_errors::{AppError, AppResult};

use super::{ApiJson, AppState, CurrentCaller, HistoryQuery, PayoutResponse, WithdrawRequest};

pub(super) async fn withdraw(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiJson(request): ApiJson<WithdrawRequest>,
) -> AppResult<Json<PayoutResponse>> {
    let payout = state
        .payouts
        .withdraw(&caller, request.amount, request.description)
        .await?;
    Ok(Json(payout.into()))
}

pub(super) async fn history(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> AppResult<Json<PagedResult<PayoutResponse>>> {
    let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
    let pagination = Pagination::from_query(query.page, query.page_size);

    let page = state.payouts.history(&caller, &pagination).await?;
    Ok(Json(page.map(PayoutResponse::from)))
}
