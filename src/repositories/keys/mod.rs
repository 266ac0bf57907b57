//! 서명 키 저장소 모듈
//!
//! `KeyStore`는 키 순환(`KeyRotator`)과 토큰 발급/검증(`TokenCodec`)이
//! 공유하는 유일한 영속 계층 계약입니다. 프로세스 전역 싱글톤 없이
//! 명시적으로 주입됩니다.
//!
//! "활성 키 없음" 판정이 올바르려면 구현체는 최소한
//! read-your-writes 일관성을 제공해야 합니다.

pub mod memory;
pub mod signing_key_repo;

use async_trait::async_trait;
use mongodb::bson::DateTime;

use crate::domain::keys::SigningKey;
use crate::errors::AppResult;

pub use memory::InMemoryKeyStore;
pub use signing_key_repo::SigningKeyRepository;

/// 서명 키 영속 계층 계약
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// 새 서명 키를 저장합니다.
    async fn save(&self, key: &SigningKey) -> AppResult<()>;

    /// 가장 최근에 생성된 키를 조회합니다.
    ///
    /// 만료 여부와 무관하게 `created_at`이 가장 큰 키를 반환합니다.
    async fn find_most_recent(&self) -> AppResult<Option<SigningKey>>;

    /// 주어진 시점 이전에 만료된 키들을 조회합니다.
    async fn find_expired(&self, before: DateTime) -> AppResult<Vec<SigningKey>>;

    /// 주어진 키들을 일괄 삭제하고 삭제된 개수를 반환합니다.
    async fn delete_batch(&self, keys: &[SigningKey]) -> AppResult<u64>;
}
