//! 收款账户接口

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
};
use creatorpay_errors::{AppError, AppResult};

use super::{
    ApiJson, AppState, BankAccountResponse, BankResponse, CurrentCaller, DeleteAccountResponse,
    SubmitAccountRequest, ValidateAccountParams, ValidateAccountResponse,
};

pub(super) async fn list_banks(State(state): State<AppState>) -> AppResult<Json<Vec<BankResponse>>> {
    let banks = state.accounts.list_banks().await?;
    Ok(Json(banks.into_iter().map(BankResponse::from).collect()))
}

/// 参数可放在查询串或 JSON 请求体中，请求体优先
pub(super) async fn validate_account(
    State(state): State<AppState>,
    query: Result<Query<ValidateAccountParams>, QueryRejection>,
    body: Bytes,
) -> AppResult<Json<ValidateAccountResponse>> {
    let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;

    let params = if body.iter().all(u8::is_ascii_whitespace) {
        query
    } else {
        serde_json::from_slice::<ValidateAccountParams>(&body)
            .map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {}", e)))?
            .or(query)
    };

    let account_number = params
        .account_number
        .ok_or_else(|| AppError::invalid_input("account_number is required"))?;
    let bank_code = params
        .bank_code
        .ok_or_else(|| AppError::invalid_input("bank_code is required"))?;

    let validation = state
        .accounts
        .validate_account(&account_number, &bank_code)
        .await?;
    Ok(Json(validation.into()))
}

pub(super) async fn submit_account(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiJson(request): ApiJson<SubmitAccountRequest>,
) -> AppResult<Json<BankAccountResponse>> {
    let account = state
        .accounts
        .submit_account(&caller, &request.account_number, &request.bank_code)
        .await?;
    Ok(Json(account.into()))
}

pub(super) async fn get_account(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> AppResult<Json<BankAccountResponse>> {
    let account = state.accounts.get_account(&caller).await?;
    Ok(Json(account.into()))
}

pub(super) async fn delete_account(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> AppResult<Json<DeleteAccountResponse>> {
    let deleted = state.accounts.delete_account(&caller).await?;
    Ok(Json(DeleteAccountResponse::new(deleted)))
}
