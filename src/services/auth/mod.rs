//! 인증 서비스 모듈
//!
//! - [`key_rotator`] - 서명 키 순환 (만료 키 정리 + 신규 발급)
//! - [`token_codec`] - JWT 발급/검증
//! - [`rotation_scheduler`] - 주기적 순환 실행 태스크

pub mod key_rotator;
pub mod rotation_scheduler;
pub mod token_codec;

pub use key_rotator::{KeyRotator, RotationReport};
pub use rotation_scheduler::{interval_from_env, spawn_rotation_task};
pub use token_codec::TokenCodec;
