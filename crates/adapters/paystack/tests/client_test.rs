//! Paystack 客户端集成测试（本地假 Paystack 服务）

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use creatorpay_adapter_paystack::{
    PaystackClient, PaystackClientConfig, PaystackError, TransferRequest,
};
use serde_json::{Value, json};

const SECRET: &str = "sk_test_fake_secret";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", SECRET))
        .unwrap_or(false)
}

async fn list_banks(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": false, "message": "Invalid key"})),
        );
    }
    assert_eq!(params.get("currency").map(String::as_str), Some("NGN"));

    (
        StatusCode::OK,
        Json(json!({
            "status": true,
            "message": "Banks retrieved",
            "data": [
                {"id": 1, "name": "Access Bank", "code": "044", "active": true, "type": "nuban"},
                {"id": 7, "name": "First Bank of Nigeria", "code": "011", "active": true, "type": "nuban"}
            ]
        })),
    )
}

async fn resolve(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let account_number = params.get("account_number").cloned().unwrap_or_default();
    let bank_code = params.get("bank_code").cloned().unwrap_or_default();

    if account_number == "0690000031" && bank_code == "011" {
        (
            StatusCode::OK,
            Json(json!({
                "status": true,
                "message": "Account number resolved",
                "data": {"account_number": account_number, "account_name": "ADA LOVELACE", "bank_id": 7}
            })),
        )
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": false,
                "message": "Could not resolve account name. Check parameters or try again."
            })),
        )
    }
}

async fn create_recipient(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    assert_eq!(body["type"], "nuban");
    assert_eq!(body["currency"], "NGN");
    (
        StatusCode::CREATED,
        Json(json!({
            "status": true,
            "message": "Transfer recipient created successfully",
            "data": {
                "active": true,
                "name": body["name"],
                "recipient_code": "RCP_1a2b3c4d5e",
                "type": "nuban"
            }
        })),
    )
}

async fn transfer(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    assert_eq!(body["source"], "balance");
    (
        StatusCode::OK,
        Json(json!({
            "status": true,
            "message": "Transfer has been queued",
            "data": {
                "transfer_code": "TRF_abc123",
                "status": "pending",
                "reference": body["reference"],
                "amount": body["amount"]
            }
        })),
    )
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn fake_paystack() -> String {
    spawn(
        Router::new()
            .route("/bank", get(list_banks))
            .route("/bank/resolve", get(resolve))
            .route("/transferrecipient", post(create_recipient))
            .route("/transfer", post(transfer)),
    )
    .await
}

fn client(base_url: &str, secret: &str) -> PaystackClient {
    PaystackClient::new(
        PaystackClientConfig::new(secret)
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_list_banks() {
    let base = fake_paystack().await;
    let banks = client(&base, SECRET).list_banks("NGN").await.unwrap();

    assert_eq!(banks.len(), 2);
    assert_eq!(banks[1].code, "011");
    assert_eq!(banks[1].name, "First Bank of Nigeria");
    assert!(banks[1].active);
}

#[tokio::test]
async fn test_bad_secret_is_upstream_failure() {
    let base = fake_paystack().await;
    let err = client(&base, "sk_wrong").list_banks("NGN").await.unwrap_err();

    match err {
        PaystackError::Upstream { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid key");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_account() {
    let base = fake_paystack().await;
    let resolved = client(&base, SECRET)
        .resolve_account("0690000031", "011")
        .await
        .unwrap();

    assert_eq!(resolved.account_name, "ADA LOVELACE");
    assert_eq!(resolved.account_number, "0690000031");
}

#[tokio::test]
async fn test_resolve_unknown_account_is_rejection() {
    let base = fake_paystack().await;
    let err = client(&base, SECRET)
        .resolve_account("0000000000", "011")
        .await
        .unwrap_err();

    assert!(err.is_rejection());
    assert!(err.to_string().contains("Could not resolve account name"));
}

#[tokio::test]
async fn test_create_transfer_recipient() {
    let base = fake_paystack().await;
    let recipient = client(&base, SECRET)
        .create_transfer_recipient("ADA LOVELACE", "0690000031", "011", "NGN")
        .await
        .unwrap();

    assert_eq!(recipient.recipient_code, "RCP_1a2b3c4d5e");
    assert_eq!(recipient.active, Some(true));
}

#[tokio::test]
async fn test_initiate_transfer() {
    let base = fake_paystack().await;
    let transfer = client(&base, SECRET)
        .initiate_transfer(&TransferRequest {
            amount: 250_000,
            recipient_code: "RCP_1a2b3c4d5e",
            reference: "payout_0123456789ab",
            reason: Some("Campaign payout"),
            currency: "NGN",
        })
        .await
        .unwrap();

    assert_eq!(transfer.transfer_code.as_deref(), Some("TRF_abc123"));
    assert_eq!(transfer.status, "pending");
    assert_eq!(transfer.reference.as_deref(), Some("payout_0123456789ab"));
    assert_eq!(transfer.amount, Some(250_000));
}

#[tokio::test]
async fn test_status_false_on_200_is_rejection() {
    let base = spawn(Router::new().route(
        "/bank/resolve",
        get(|| async { Json(json!({"status": false, "message": "Unknown bank code"})) }),
    ))
    .await;

    let err = client(&base, SECRET)
        .resolve_account("0690000031", "999")
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn test_server_error_is_upstream_failure() {
    let base = spawn(Router::new().route(
        "/bank",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    ))
    .await;

    let err = client(&base, SECRET).list_banks("NGN").await.unwrap_err();
    assert!(matches!(err, PaystackError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let base = spawn(Router::new().route("/bank", get(|| async { "not json" }))).await;

    let err = client(&base, SECRET).list_banks("NGN").await.unwrap_err();
    assert!(matches!(err, PaystackError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr), SECRET)
        .list_banks("NGN")
        .await
        .unwrap_err();
    assert!(matches!(err, PaystackError::Transport(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let base = spawn(Router::new().route(
        "/bank",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"status": true, "message": "late", "data": []}))
        }),
    ))
    .await;

    let slow_client = PaystackClient::new(
        PaystackClientConfig::new(SECRET)
            .with_base_url(&base)
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = slow_client.list_banks("NGN").await.unwrap_err();
    match err {
        PaystackError::Transport(message) => assert!(message.contains("timed out")),
        other => panic!("expected timeout, got {other:?}"),
    }
}
