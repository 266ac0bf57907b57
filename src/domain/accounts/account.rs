//! Account Entity Implementation
//!
//! 토큰 검증 이후 호출자 측 권한 확인에 사용되는 계정 엔티티입니다.
//! 토큰 자체는 계정 상태를 담지 않으므로, 서명이 유효한 토큰이라도
//! 잠기거나 비활성화된 계정의 요청은 여기서 거부됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 상태
///
/// 인증 상태 기계의 마지막 단계에서 평가됩니다:
/// 유효한 토큰 + `Active` → Authenticated,
/// 유효한 토큰 + `Locked`/`Disabled` → Rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// 정상 계정
    Active,
    /// 잠긴 계정 (예: 로그인 시도 초과)
    Locked,
    /// 비활성화된 계정 (예: 탈퇴 처리)
    Disabled,
}

/// 계정 엔티티
///
/// `users` 컬렉션의 레코드 중 인증 판정에 필요한 필드만 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 계정 이메일 (unique)
    pub email: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 계정 잠금 여부
    #[serde(default)]
    pub is_locked: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Account {
    /// 인증 판정용 계정 상태를 계산합니다.
    ///
    /// 잠금이 비활성화보다 우선합니다.
    pub fn status(&self) -> AccountStatus {
        if self.is_locked {
            AccountStatus::Locked
        } else if !self.is_active {
            AccountStatus::Disabled
        } else {
            AccountStatus::Active
        }
    }

    /// 토큰 sub 클레임에 사용되는 식별자 문자열로 변환합니다.
    pub fn subject(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
