//! Signing Key Entity Implementation
//!
//! JWT 서명에 사용되는 키 엔티티입니다.
//! 키는 순환 작업(`KeyRotator`)에 의해서만 생성되고 삭제되며,
//! 생성 시점부터 고정된 순환 주기만큼만 유효합니다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use mongodb::bson::{oid::ObjectId, DateTime};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// HMAC-SHA-512 서명에 필요한 최소 키 자료 크기 (바이트)
pub const KEY_MATERIAL_BYTES: usize = 64;

/// 서명 키 엔티티
///
/// 토큰 서명과 검증에 사용되는 비밀 키 자료를 표현하는 도메인 엔티티입니다.
/// 정상 운영 상태에서는 만료되지 않은 키가 항상 정확히 하나 존재하지만,
/// 다중 인스턴스 환경에서 순환이 동시에 실행되면 일시적으로 두 개 이상
/// 존재할 수 있습니다. 서명과 검증은 언제나 가장 최근에 생성된 키를
/// 선택하므로 이 상태는 허용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningKey {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 키 고유 식별자 (UUID v4, unique)
    pub key_id: String,
    /// base64로 인코딩된 키 자료 (64바이트 이상의 랜덤 엔트로피)
    pub secret: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 만료 시간 (생성 시간 + 순환 주기, 항상 설정됨)
    pub expires_at: DateTime,
}

impl SigningKey {
    /// 새 서명 키를 생성합니다.
    ///
    /// 암호학적으로 안전한 난수 생성기에서 64바이트의 키 자료를 뽑아
    /// base64로 인코딩하여 저장합니다. HMAC-SHA-512 서명에 적합한
    /// 엔트로피를 보장합니다.
    ///
    /// # 인자
    ///
    /// * `window` - 키 유효 기간 (순환 주기)
    pub fn generate(window: chrono::Duration) -> Self {
        let mut material = [0u8; KEY_MATERIAL_BYTES];
        rand::rng().fill_bytes(&mut material);

        let now = DateTime::now();
        let expires_at =
            DateTime::from_millis(now.timestamp_millis() + window.num_milliseconds());

        Self {
            id: None,
            key_id: Uuid::new_v4().to_string(),
            secret: STANDARD.encode(material),
            created_at: now,
            expires_at,
        }
    }

    /// 주어진 시점 기준으로 키가 만료되었는지 확인합니다.
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        self.expires_at < now
    }

    /// 현재 시점 기준으로 키가 만료되었는지 확인합니다.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(DateTime::now())
    }

    /// base64로 저장된 키 자료를 원본 바이트로 복원합니다.
    ///
    /// # Errors
    ///
    /// 저장된 값이 올바른 base64가 아니면 `AppError::InternalError`를
    /// 반환합니다. 저장소가 손상된 경우에만 발생할 수 있습니다.
    pub fn secret_bytes(&self) -> AppResult<Vec<u8>> {
        STANDARD
            .decode(&self.secret)
            .map_err(|e| AppError::InternalError(format!("서명 키 자료 디코딩 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_has_enough_entropy() {
        let key = SigningKey::generate(chrono::Duration::days(28));
        let material = key.secret_bytes().unwrap();

        assert!(material.len() >= KEY_MATERIAL_BYTES);
    }

    #[test]
    fn test_generated_keys_are_unique() {
        let a = SigningKey::generate(chrono::Duration::days(28));
        let b = SigningKey::generate(chrono::Duration::days(28));

        assert_ne!(a.key_id, b.key_id);
        assert_ne!(a.secret, b.secret);
    }

    #[test]
    fn test_expires_at_follows_rotation_window() {
        let key = SigningKey::generate(chrono::Duration::days(28));

        let lifetime_millis =
            key.expires_at.timestamp_millis() - key.created_at.timestamp_millis();
        assert_eq!(
            lifetime_millis,
            chrono::Duration::days(28).num_milliseconds()
        );
        assert!(!key.is_expired());
    }

    #[test]
    fn test_is_expired_at() {
        let key = SigningKey::generate(chrono::Duration::days(1));

        let before_expiry =
            DateTime::from_millis(key.expires_at.timestamp_millis() - 1_000);
        let after_expiry =
            DateTime::from_millis(key.expires_at.timestamp_millis() + 1_000);

        assert!(!key.is_expired_at(before_expiry));
        assert!(key.is_expired_at(after_expiry));
    }
}
