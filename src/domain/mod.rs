//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`keys`] - 서명 키 엔티티 (순환 작업이 생성/삭제하는 영속 객체)
//! - [`token`] - 토큰 클레임과 발급 응답 (영속되지 않는 상태 없는 자격 증명)
//! - [`auth`] - 요청 인증 모드, 역할 요구사항, 인증된 사용자 표현
//! - [`accounts`] - 호출자 측 권한 확인에 쓰이는 계정 뷰

pub mod accounts;
pub mod auth;
pub mod keys;
pub mod token;

pub use accounts::{Account, AccountStatus};
pub use auth::{AuthMode, AuthenticatedUser, RequiredRole};
pub use keys::SigningKey;
pub use token::{TokenClaims, TokenResponse};
