//! 인메모리 `KeyStore` 구현
//!
//! 테스트와 데이터베이스 없는 로컬 실행을 위한 구현체입니다.
//! MongoDB 구현과 동일한 계약(read-your-writes, 최신 키 우선)을 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::keys::SigningKey;
use crate::errors::{AppError, AppResult};
use crate::repositories::keys::KeyStore;

/// 인메모리 서명 키 저장소
#[derive(Default)]
pub struct InMemoryKeyStore {
    keys: Mutex<Vec<SigningKey>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키 개수를 반환합니다. 테스트 검증용입니다.
    pub fn len(&self) -> usize {
        self.keys.lock().map(|keys| keys.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<SigningKey>>> {
        self.keys
            .lock()
            .map_err(|_| AppError::InternalError("키 저장소 잠금 오염".to_string()))
    }
}

#[async_trait]
impl KeyStore for InMemoryKeyStore {
    async fn save(&self, key: &SigningKey) -> AppResult<()> {
        let mut keys = self.lock()?;

        let mut stored = key.clone();
        if stored.id.is_none() {
            stored.id = Some(ObjectId::new());
        }
        keys.push(stored);

        Ok(())
    }

    async fn find_most_recent(&self) -> AppResult<Option<SigningKey>> {
        let keys = self.lock()?;

        Ok(keys.iter().max_by_key(|k| k.created_at).cloned())
    }

    async fn find_expired(&self, before: DateTime) -> AppResult<Vec<SigningKey>> {
        let keys = self.lock()?;

        Ok(keys
            .iter()
            .filter(|k| k.expires_at < before)
            .cloned()
            .collect())
    }

    async fn delete_batch(&self, to_delete: &[SigningKey]) -> AppResult<u64> {
        let mut keys = self.lock()?;

        let before = keys.len();
        keys.retain(|k| !to_delete.iter().any(|d| d.key_id == k.key_id));

        Ok((before - keys.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_assigns_object_id() {
        let store = InMemoryKeyStore::new();
        let key = SigningKey::generate(chrono::Duration::days(28));

        store.save(&key).await.unwrap();

        let stored = store.find_most_recent().await.unwrap().unwrap();
        assert!(stored.id.is_some());
        assert_eq!(stored.key_id, key.key_id);
    }

    #[actix_web::test]
    async fn test_find_most_recent_picks_newest() {
        let store = InMemoryKeyStore::new();

        let mut old = SigningKey::generate(chrono::Duration::days(28));
        old.created_at = DateTime::from_millis(old.created_at.timestamp_millis() - 60_000);
        let new = SigningKey::generate(chrono::Duration::days(28));

        store.save(&old).await.unwrap();
        store.save(&new).await.unwrap();

        let most_recent = store.find_most_recent().await.unwrap().unwrap();
        assert_eq!(most_recent.key_id, new.key_id);
    }

    #[actix_web::test]
    async fn test_delete_batch_removes_only_given_keys() {
        let store = InMemoryKeyStore::new();
        let a = SigningKey::generate(chrono::Duration::days(28));
        let b = SigningKey::generate(chrono::Duration::days(28));

        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();

        let deleted = store.delete_batch(std::slice::from_ref(&a)).await.unwrap();

        assert_eq!(deleted, 1);
        assert_eq!(store.len(), 1);
        let remaining = store.find_most_recent().await.unwrap().unwrap();
        assert_eq!(remaining.key_id, b.key_id);
    }
}
