//! 계정 리포지토리 구현
//!
//! `users` 컬렉션에서 인증 판정에 필요한 계정 상태를 조회합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::accounts::{Account, AccountStatus};
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountDirectory;

/// 계정 데이터 액세스 리포지토리
///
/// `AccountDirectory` 계약의 MongoDB 구현체입니다.
pub struct AccountRepository {
    db: Arc<Database>,
}

impl AccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.get_database().collection::<Account>("users")
    }
}

#[async_trait]
impl AccountDirectory for AccountRepository {
    async fn find_status(&self, subject: &str) -> AppResult<Option<AccountStatus>> {
        // 서명이 유효한 토큰의 sub는 발급 시점의 ObjectId 문자열이므로
        // 파싱 실패는 알 수 없는 주체로 취급한다
        let object_id = match ObjectId::parse_str(subject) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };

        let account = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(account.map(|a| a.status()))
    }
}
