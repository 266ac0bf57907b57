//! 인메모리 `AccountDirectory` 구현 (테스트용)

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::accounts::AccountStatus;
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountDirectory;

/// 주체 식별자 → 계정 상태 매핑을 담는 인메모리 디렉터리
#[derive(Default)]
pub struct InMemoryAccountDirectory {
    accounts: Mutex<HashMap<String, AccountStatus>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 계정 상태를 등록합니다.
    pub fn insert(&self, subject: &str, status: AccountStatus) {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.insert(subject.to_string(), status);
        }
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_status(&self, subject: &str) -> AppResult<Option<AccountStatus>> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| AppError::InternalError("계정 디렉터리 잠금 오염".to_string()))?;

        Ok(accounts.get(subject).copied())
    }
}
