//! 请求方身份

use creatorpay_auth_core::{Claims, Role};
use creatorpay_common::CreatorId;
use creatorpay_errors::AppResult;

/// 从 bearer token 解析出的调用者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: CreatorId,
    pub role: Role,
}

impl Caller {
    pub fn new(id: CreatorId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn from_claims(claims: &Claims) -> AppResult<Self> {
        Ok(Self {
            id: claims.creator_id()?,
            role: claims.role,
        })
    }

    pub fn is_creator(&self) -> bool {
        self.role == Role::Creator
    }
}
