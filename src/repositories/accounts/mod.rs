//! 계정 조회 모듈
//!
//! 토큰 검증 이후의 계정 상태 확인(잠금/비활성화)을 위한 계약입니다.
//! 토큰 코덱은 이 계층을 전혀 알지 못합니다. 계정 상태는 호출자
//! (미들웨어)가 확인합니다.

pub mod account_repo;
pub mod memory;

use async_trait::async_trait;

use crate::domain::accounts::AccountStatus;
use crate::errors::AppResult;

pub use account_repo::AccountRepository;
pub use memory::InMemoryAccountDirectory;

/// 계정 상태 조회 계약
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// 토큰 주체 식별자로 계정 상태를 조회합니다.
    ///
    /// 해당하는 계정이 없으면 `Ok(None)`을 반환합니다.
    async fn find_status(&self, subject: &str) -> AppResult<Option<AccountStatus>>;
}
