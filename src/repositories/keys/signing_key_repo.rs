//! # 서명 키 리포지토리 구현
//!
//! 서명 키 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `signing_keys` 컬렉션을 저장소로 사용합니다.
//!
//! ## 인덱스
//!
//! - `key_id` (unique): 키 식별자 중복 방지
//! - `created_at` (desc): 최신 키 조회 최적화

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::keys::SigningKey;
use crate::errors::{AppError, AppResult};
use crate::repositories::keys::KeyStore;

/// 서명 키 데이터 액세스 리포지토리
///
/// `KeyStore` 계약의 MongoDB 구현체입니다. 순환 작업과 토큰 코덱에
/// `Arc<dyn KeyStore>`로 주입됩니다.
pub struct SigningKeyRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl SigningKeyRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `signing_keys` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<SigningKey> {
        self.db.get_database().collection::<SigningKey>("signing_keys")
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 무시하므로 기동 시마다
    /// 호출해도 안전합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let key_id_index = IndexModel::builder()
            .keys(doc! { "key_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .build();

        self.collection()
            .create_indexes(vec![key_id_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyStore for SigningKeyRepository {
    async fn save(&self, key: &SigningKey) -> AppResult<()> {
        self.collection()
            .insert_one(key)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_most_recent(&self) -> AppResult<Option<SigningKey>> {
        self.collection()
            .find_one(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_expired(&self, before: DateTime) -> AppResult<Vec<SigningKey>> {
        let cursor = self
            .collection()
            .find(doc! { "expires_at": { "$lt": before } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_batch(&self, keys: &[SigningKey]) -> AppResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        let key_ids: Vec<&str> = keys.iter().map(|k| k.key_id.as_str()).collect();

        let result = self
            .collection()
            .delete_many(doc! { "key_id": { "$in": key_ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
