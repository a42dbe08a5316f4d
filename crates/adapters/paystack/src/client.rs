//! Paystack HTTP 客户端

use std::time::Duration;

use metrics::counter;
use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::dto::{
    ApiEnvelope, CreateTransferRecipientRequest, ErrorEnvelope, InitiateTransferRequest,
    PaystackBank, RecipientData, ResolvedAccount, TransferData,
};
use crate::error::PaystackError;

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// 尼日利亚银行账号类型
const NUBAN: &str = "nuban";

/// Paystack 客户端配置
#[derive(Debug, Clone)]
pub struct PaystackClientConfig {
    pub base_url: String,
    pub secret_key: Secret<String>,
    pub timeout: Duration,
}

impl PaystackClientConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            secret_key: Secret::new(secret_key.into()),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// 发起转账参数
#[derive(Debug, Clone)]
pub struct TransferRequest<'a> {
    /// 金额（最小单位）
    pub amount: i64,
    pub recipient_code: &'a str,
    pub reference: &'a str,
    pub reason: Option<&'a str>,
    pub currency: &'a str,
}

/// Paystack 客户端
///
/// 内部 `reqwest::Client` 复用连接池，可廉价 clone。
#[derive(Clone)]
pub struct PaystackClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: Secret<String>,
}

impl PaystackClient {
    pub fn new(config: PaystackClientConfig) -> Result<Self, PaystackError> {
        Url::parse(&config.base_url)
            .map_err(|e| PaystackError::Config(format!("invalid base_url: {}", e)))?;

        if config.secret_key.expose_secret().is_empty() {
            return Err(PaystackError::Config("secret_key is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PaystackError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret_key: config.secret_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 获取支持的银行列表
    pub async fn list_banks(&self, currency: &str) -> Result<Vec<PaystackBank>, PaystackError> {
        let request = self
            .http
            .get(self.endpoint("bank"))
            .query(&[("currency", currency), ("perPage", "100")]);

        self.send("list_banks", request).await
    }

    /// 解析账号，返回开户名
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ResolvedAccount, PaystackError> {
        let request = self
            .http
            .get(self.endpoint("bank/resolve"))
            .query(&[("account_number", account_number), ("bank_code", bank_code)]);

        self.send("resolve_account", request).await
    }

    /// 创建转账收款人，返回 recipient_code（RCP_...）
    pub async fn create_transfer_recipient(
        &self,
        name: &str,
        account_number: &str,
        bank_code: &str,
        currency: &str,
    ) -> Result<RecipientData, PaystackError> {
        let body = CreateTransferRecipientRequest {
            recipient_type: NUBAN,
            name,
            account_number,
            bank_code,
            currency,
        };
        let request = self.http.post(self.endpoint("transferrecipient")).json(&body);

        self.send("create_transfer_recipient", request).await
    }

    /// 从余额发起转账
    pub async fn initiate_transfer(
        &self,
        transfer: &TransferRequest<'_>,
    ) -> Result<TransferData, PaystackError> {
        let body = InitiateTransferRequest {
            source: "balance",
            amount: transfer.amount,
            recipient: transfer.recipient_code,
            reference: transfer.reference,
            reason: transfer.reason,
            currency: transfer.currency,
        };
        let request = self.http.post(self.endpoint("transfer")).json(&body);

        self.send("initiate_transfer", request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, PaystackError> {
        let result = self.execute(request).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        counter!(
            "creatorpay_processor_calls_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);

        match &result {
            Ok(_) => debug!(operation, "Paystack call succeeded"),
            Err(e) if e.is_rejection() => debug!(operation, error = %e, "Paystack rejected request"),
            Err(e) => warn!(operation, error = %e, "Paystack call failed"),
        }

        result
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, PaystackError> {
        let response = request
            .bearer_auth(self.secret_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaystackError::Transport("request timed out".to_string())
                } else {
                    PaystackError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PaystackError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body, status);
            return Err(if is_upstream_failure(status) {
                PaystackError::Upstream {
                    status: status.as_u16(),
                    message,
                }
            } else {
                PaystackError::Rejected {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|e| PaystackError::InvalidResponse(e.to_string()))?;

        if !envelope.status {
            return Err(PaystackError::Rejected {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        envelope
            .data
            .ok_or_else(|| PaystackError::InvalidResponse("missing data field".to_string()))
    }
}

/// 5xx、限流和鉴权失败都不是调用方输入的问题
fn is_upstream_failure(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
}

fn error_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}
