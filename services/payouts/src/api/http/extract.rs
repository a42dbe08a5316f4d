//! 请求体提取器

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use creatorpay_errors::AppError;
use serde::de::DeserializeOwned;

/// JSON 请求体，解析失败统一返回 400 Problem Details
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        Ok(Self(value))
    }
}
