//! 데이터 액세스 계층 모듈
//!
//! 영속 계층 계약(trait)과 그 구현체들을 제공합니다.
//!
//! - [`keys`] - 서명 키 저장소 (`KeyStore`)
//! - [`accounts`] - 계정 상태 조회 (`AccountDirectory`)

pub mod accounts;
pub mod keys;

pub use accounts::AccountDirectory;
pub use keys::KeyStore;
