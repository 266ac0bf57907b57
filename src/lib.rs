//! JWT 서명 키 순환 / 토큰 검증 서비스
//!
//! 포트폴리오 백엔드의 인증 코어입니다. 서명 키의 주기적 순환과
//! 상태 없는 JWT 발급/검증, 그리고 요청 인증 미들웨어를 제공합니다.
//!
//! # Features
//!
//! - **키 순환**: 만료된 서명 키 일괄 정리 + 활성 키 자동 발급 (매일 1회)
//! - **토큰 발급/검증**: HMAC-SHA-512 기반 단기 액세스 토큰 (기본 2시간)
//! - **요청 인증**: 토큰 검증 + 계정 잠금/비활성화 확인 미들웨어
//! - **MongoDB**: 서명 키와 계정 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 헬스체크, 토큰 발급/세션 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthMiddleware │ ← Bearer 토큰 검증 + 계정 상태 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← KeyRotator / TokenCodec
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← KeyStore / AccountDirectory
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← signing_keys / users 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jwt_keyring_service::repositories::keys::InMemoryKeyStore;
//! use jwt_keyring_service::services::auth::{KeyRotator, TokenCodec};
//!
//! let store = Arc::new(InMemoryKeyStore::new());
//! let rotator = KeyRotator::from_env(store.clone());
//! let codec = TokenCodec::from_env(store);
//!
//! rotator.rotate().await?;
//! let token = codec.issue("user-id", &["USER".to_string()]).await?;
//! let claims = codec.validate(&token).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
