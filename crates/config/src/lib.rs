//! creatorpay-config - 配置加载库
//!
//! 加载顺序：`default.toml` → `<APP_ENV>.toml` → `CREATORPAY_` 前缀环境变量，
//! 嵌套字段用 `__` 分隔（如 `CREATORPAY_PAYSTACK__SECRET_KEY`）。

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "CREATORPAY_";

/// JWT 密钥最小长度
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// 启动时自动建表（CREATE TABLE IF NOT EXISTS）
    #[serde(default = "default_true")]
    pub auto_create_schema: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// JWT 配置
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    /// 签发访问令牌的有效期（秒）
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: i64,
}

fn default_issuer() -> String {
    "creatorpay".to_string()
}

fn default_audience() -> String {
    "creatorpay-api".to_string()
}

fn default_access_token_ttl() -> i64 {
    3600
}

impl JwtConfig {
    /// 验证 JWT 密钥强度
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.expose_secret().len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "jwt.secret must be at least {} characters long",
                MIN_JWT_SECRET_LEN
            )));
        }
        Ok(())
    }
}

/// Paystack 配置
#[derive(Debug, Clone, Deserialize)]
pub struct PaystackConfig {
    pub secret_key: Secret<String>,
    #[serde(default = "default_paystack_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 唯一支持的结算币种
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_paystack_base_url() -> String {
    "https://api.paystack.co".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency() -> String {
    "NGN".to_string()
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    /// 未配置时使用内存存储
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub paystack: PaystackConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.jwt.validate()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

#[cfg(test)]
mod tests;
