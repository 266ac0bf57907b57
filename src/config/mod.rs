//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`jwt_config`] - 토큰 발급 및 서명 키 순환 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 런타임 설정값 파싱 오류는 기본값으로 대체

pub mod jwt_config;

pub use jwt_config::{JwtConfig, RotationConfig};
