//! 서명 키 도메인 엔티티 모듈

pub mod signing_key;

pub use signing_key::SigningKey;
