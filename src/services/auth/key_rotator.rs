//! 서명 키 순환 서비스 구현
//!
//! 만료되지 않은 서명 키가 항상 정확히 하나 존재하도록 유지합니다.
//! 만료된 키는 일괄 삭제되고, 활성 키가 없으면 새 키가 발급됩니다.
//!
//! 삭제와 삽입은 서로 독립적인 멱등 단계이므로, 어느 단계에서 실패하더라도
//! 일관성이 깨지지 않으며 재실행은 항상 안전합니다.

use std::sync::Arc;

use mongodb::bson::DateTime;

use crate::config::RotationConfig;
use crate::domain::keys::SigningKey;
use crate::errors::AppResult;
use crate::repositories::keys::KeyStore;

/// 한 번의 순환 실행 결과
///
/// 로깅과 테스트 검증에 사용됩니다.
#[derive(Debug, PartialEq)]
pub struct RotationReport {
    /// 삭제된 만료 키 개수
    pub deleted: u64,
    /// 새로 발급된 키의 key_id (발급되지 않았으면 None)
    pub created: Option<String>,
}

/// 서명 키 순환 서비스
///
/// 매일 1회 + 프로세스 기동 시 1회 실행되는 것을 전제로 설계되었습니다.
/// 단일 인스턴스에서는 자기 자신과 겹쳐 실행되지 않습니다. 다중 인스턴스
/// 환경에서 동시에 실행되면 같은 주기에 키가 두 개 생길 수 있으나,
/// 서명/검증이 항상 최신 키를 선택하므로 허용되는 상태입니다.
pub struct KeyRotator {
    store: Arc<dyn KeyStore>,
    /// 새 키의 유효 기간 (순환 주기)
    window: chrono::Duration,
}

impl KeyRotator {
    /// 명시적 순환 주기로 순환 서비스를 생성합니다.
    pub fn new(store: Arc<dyn KeyStore>, window: chrono::Duration) -> Self {
        Self { store, window }
    }

    /// 환경 변수 설정(`KEY_ROTATION_WINDOW_DAYS`)으로 순환 서비스를 생성합니다.
    pub fn from_env(store: Arc<dyn KeyStore>) -> Self {
        Self::new(store, chrono::Duration::days(RotationConfig::window_days()))
    }

    /// 키 순환을 1회 실행합니다.
    ///
    /// 1. 만료된 키를 모두 조회하여 일괄 삭제합니다. 삭제할 키가 없는 것은
    ///    에러가 아니며 로그만 남깁니다.
    /// 2. 가장 최근에 생성된 키를 조회하여, 없거나 만료되었으면 새 키를
    ///    발급해 저장합니다.
    ///
    /// 완료 시점에 저장소에는 만료되지 않은 키가 정확히 하나 존재하고
    /// 만료된 키는 없습니다 (동시 변경이 없다는 가정 하에).
    ///
    /// # Errors
    ///
    /// 영속 계층 에러는 그대로 전파됩니다. 자동 재시도는 하지 않으며,
    /// 다음 스케줄 실행에서 재시도됩니다.
    pub async fn rotate(&self) -> AppResult<RotationReport> {
        let now = DateTime::now();

        // 1단계: 만료된 키 일괄 삭제
        let expired = self.store.find_expired(now).await?;
        let deleted = if expired.is_empty() {
            log::debug!("만료된 서명 키 없음");
            0
        } else {
            let count = self.store.delete_batch(&expired).await?;
            log::info!("만료된 서명 키 {}개 삭제됨", count);
            count
        };

        // 2단계: 활성 키가 없으면 새 키 발급
        let created = match self.store.find_most_recent().await? {
            Some(key) if !key.is_expired_at(now) => {
                log::debug!("활성 서명 키 유지: {}", key.key_id);
                None
            }
            _ => {
                let key = SigningKey::generate(self.window);
                self.store.save(&key).await?;
                log::info!("새 서명 키 발급됨: {} (만료: {})", key.key_id, key.expires_at);
                Some(key.key_id)
            }
        };

        Ok(RotationReport { deleted, created })
    }
}
