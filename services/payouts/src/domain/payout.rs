//! 提现记录

use chrono::{DateTime, Utc};
use creatorpay_common::{CreatorId, utils::short_reference};
use creatorpay_domain_core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 提现引用号前缀
pub const PAYOUT_REFERENCE_PREFIX: &str = "payout";

/// 未填写说明时的默认值
pub const DEFAULT_DESCRIPTION: &str = "Payout";

/// 提现状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Processing,
    Success,
    Failed,
    Reversed,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Reversed => "reversed",
        }
    }

    /// 映射处理方返回的转账状态
    ///
    /// `otp` 表示等待 OTP 确认，仍视为 pending；未知状态同样按 pending 记录。
    pub fn from_processor(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "processing" => Self::Processing,
            "success" => Self::Success,
            "failed" | "abandoned" | "rejected" | "blocked" => Self::Failed,
            "reversed" => Self::Reversed,
            _ => Self::Pending,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Reversed)
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            "reversed" => Ok(Self::Reversed),
            other => Err(format!("Unknown payout status: {}", other)),
        }
    }
}

/// 提现记录（只追加）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: Uuid,
    pub creator_id: CreatorId,
    /// 金额（最小单位）
    pub amount: Money,
    pub reference: String,
    pub status: PayoutStatus,
    pub recipient_code: String,
    pub transfer_code: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payout {
    pub fn new(
        creator_id: CreatorId,
        amount: Money,
        reference: String,
        recipient_code: String,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: creatorpay_common::utils::new_id(),
            creator_id,
            amount,
            reference,
            status: PayoutStatus::Pending,
            recipient_code,
            transfer_code: None,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// 生成新的提现引用号 `payout_<12 位十六进制>`
    pub fn new_reference() -> String {
        short_reference(PAYOUT_REFERENCE_PREFIX)
    }

    /// 记录处理方受理结果
    pub fn accepted(mut self, status: PayoutStatus, transfer_code: Option<String>) -> Self {
        self.status = status;
        self.transfer_code = transfer_code;
        self.updated_at = Utc::now();
        self
    }
}
