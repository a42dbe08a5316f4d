//! 认证中间件

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use creatorpay_auth_core::{Claims, TokenService};
use creatorpay_errors::AppError;
use tracing::{debug, warn};

use crate::domain::Caller;

/// 当前调用者提取器
///
/// 依赖 auth_middleware 先把 Claims 放进请求扩展
pub struct CurrentCaller(pub Caller);

impl<S> FromRequestParts<S> for CurrentCaller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or_else(|| AppError::unauthenticated("Missing credentials"))?;

        Caller::from_claims(claims).map(CurrentCaller)
    }
}

/// JWT 认证中间件
///
/// 验证 access token 并将 claims 注入到请求扩展中
pub async fn auth_middleware(
    State(token_service): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            warn!("Missing or invalid authorization header");
            AppError::unauthenticated("Missing or invalid authorization header")
        })?;

    let claims = token_service.validate_access_token(token).map_err(|e| {
        warn!(error = %e, "Token validation failed");
        e
    })?;

    debug!(subject = %claims.sub, role = %claims.role, "Token validated");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
