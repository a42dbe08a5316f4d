//! Payout Service - 创作者收款与提现服务入口

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use creatorpay_adapter_paystack::{PaystackClient, PaystackClientConfig};
use creatorpay_adapter_postgres::{PostgresConfig, create_pool, ensure_schema};
use creatorpay_auth_core::TokenService;
use creatorpay_bootstrap::{RuntimeConfig, init_runtime, shutdown_signal};
use creatorpay_config::AppConfig;
use creatorpay_domain_core::Currency;
use creatorpay_telemetry::init_metrics;
use payout_service::api::http::{AppState, router};
use payout_service::application::{AccountRegistrationService, PayoutService};
use payout_service::domain::{BankAccountRepository, PaymentProcessor, PayoutRepository};
use payout_service::infrastructure::persistence::{
    InMemoryBankAccountRepository, InMemoryPayoutRepository, PostgresBankAccountRepository,
    PostgresPayoutRepository, schema,
};
use payout_service::infrastructure::processor::PaystackProcessor;
use secrecy::ExposeSecret;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};
use tracing::{info, warn};

/// 请求体上限
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let runtime = RuntimeConfig::default();
    let config = AppConfig::load(&runtime.config_dir)?;
    init_runtime(&config);

    let metrics = if config.telemetry.metrics_enabled {
        Some(init_metrics()?)
    } else {
        None
    };

    // 组装存储
    let (accounts, payouts) = build_store(&config).await?;

    // 组装支付处理方
    let currency = Currency::new(&config.paystack.currency);
    let client = PaystackClient::new(
        PaystackClientConfig::new(config.paystack.secret_key.expose_secret().clone())
            .with_base_url(&config.paystack.base_url)
            .with_timeout(Duration::from_secs(config.paystack.timeout_secs)),
    )?;
    let processor: Arc<dyn PaymentProcessor> =
        Arc::new(PaystackProcessor::new(client, currency.clone()));

    // 组装应用服务
    let state = AppState {
        accounts: Arc::new(AccountRegistrationService::new(
            accounts.clone(),
            processor.clone(),
            currency.clone(),
        )),
        payouts: Arc::new(PayoutService::new(accounts, payouts, processor, currency)),
        tokens: TokenService::new(
            config.jwt.secret.expose_secret(),
            config.jwt.access_token_ttl_secs,
            config.jwt.issuer.clone(),
            config.jwt.audience.clone(),
        ),
        metrics,
    };

    let app = router(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Payout service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Payout service stopped");
    Ok(())
}

async fn build_store(
    config: &AppConfig,
) -> Result<(Arc<dyn BankAccountRepository>, Arc<dyn PayoutRepository>), Box<dyn std::error::Error>>
{
    let Some(database) = &config.database else {
        warn!("No database configured, using in-memory store");
        return Ok((
            Arc::new(InMemoryBankAccountRepository::new()),
            Arc::new(InMemoryPayoutRepository::new()),
        ));
    };

    let pool = create_pool(
        &PostgresConfig::new(database.url.expose_secret().clone())
            .with_max_connections(database.max_connections),
    )
    .await?;

    if database.auto_create_schema {
        ensure_schema(&pool, schema::ALL).await?;
        info!("Database schema ensured");
    }

    Ok((
        Arc::new(PostgresBankAccountRepository::new(pool.clone())),
        Arc::new(PostgresPayoutRepository::new(pool)),
    ))
}
