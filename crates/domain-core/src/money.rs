//! 货币值对象

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 货币代码（ISO 4217）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(pub String);

impl Currency {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn ngn() -> Self {
        Self("NGN".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::ngn()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("Amount must be a finite number")]
    NotFinite,

    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Amount is too large")]
    Overflow,
}

/// 金额值对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// 金额（以最小单位存储，如 kobo）
    pub amount: i64,
    /// 货币代码
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// 从主单位金额（如 Naira）创建，四舍五入到最小单位
    pub fn from_major(amount: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        let minor = (amount * 100.0).round();
        if minor > i64::MAX as f64 || minor < i64::MIN as f64 {
            return Err(MoneyError::Overflow);
        }
        Ok(Self::new(minor as i64, currency))
    }

    /// 从主单位金额创建，要求严格大于零
    pub fn positive_from_major(amount: f64, currency: Currency) -> Result<Self, MoneyError> {
        let money = Self::from_major(amount, currency)?;
        if !money.is_positive() {
            return Err(MoneyError::NotPositive);
        }
        Ok(money)
    }

    /// 转换为主单位（用于显示）
    pub fn to_major(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.to_major())
    }
}
