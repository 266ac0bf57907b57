//! # JWT / 키 순환 설정 모듈
//!
//! 토큰 발급과 서명 키 순환에 관련된 설정을 관리합니다.
//! 환경 변수 기반으로 동작하며, 모든 값에 개발 환경용 기본값이 있습니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! # 토큰 설정
//! export JWT_EXPIRATION_HOURS="2"
//! export JWT_ISSUER="portfolio-backend"
//! export JWT_AUDIENCE="portfolio-clients"
//!
//! # 키 순환 설정
//! export KEY_ROTATION_WINDOW_DAYS="28"
//! export KEY_ROTATION_INTERVAL_HOURS="24"
//! ```
//!
//! ## 주의사항
//!
//! 키 순환 주기(`KEY_ROTATION_WINDOW_DAYS`)는 반드시 토큰 유효 기간
//! (`JWT_EXPIRATION_HOURS`)보다 길어야 합니다. 그렇지 않으면 아직 유효한
//! 토큰의 서명 키가 삭제되어 검증이 불가능해집니다.

use std::env;

/// JSON Web Token (JWT) 발급 관련 설정을 관리하는 구조체
///
/// 토큰 유효 기간, 발급자(issuer), 대상(audience) 클레임을 관리합니다.
/// 서명 비밀키는 여기서 관리하지 않습니다. 키는 저장소의 `SigningKey`
/// 레코드에서 제공되며 순환 작업이 주기적으로 교체합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 2시간. 키 순환 주기(기본 28일)보다 충분히 짧아야 합니다.
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="2"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2)
    }

    /// 토큰의 `iss` 클레임에 기록할 발급자 식별자를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `portfolio-backend`
    pub fn issuer() -> String {
        env::var("JWT_ISSUER")
            .unwrap_or_else(|_| "portfolio-backend".to_string())
    }

    /// 토큰의 `aud` 클레임에 기록할 대상 식별자를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `portfolio-clients`
    pub fn audience() -> String {
        env::var("JWT_AUDIENCE")
            .unwrap_or_else(|_| "portfolio-clients".to_string())
    }
}

/// 서명 키 순환 관련 설정을 관리하는 구조체
///
/// 키의 유효 기간(순환 주기)과 순환 작업의 실행 간격을 관리합니다.
pub struct RotationConfig;

impl RotationConfig {
    /// 서명 키의 유효 기간을 일 단위로 반환합니다.
    ///
    /// 새로 발급되는 키의 `expires_at`은 생성 시점에서 이 기간만큼
    /// 뒤로 설정됩니다.
    ///
    /// # 기본값
    ///
    /// 28일
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export KEY_ROTATION_WINDOW_DAYS="28"
    /// ```
    pub fn window_days() -> i64 {
        env::var("KEY_ROTATION_WINDOW_DAYS")
            .unwrap_or_else(|_| "28".to_string())
            .parse()
            .unwrap_or(28)
    }

    /// 순환 작업의 실행 간격을 시간 단위로 반환합니다.
    ///
    /// 키 유효 기간 안에 최소 한 번은 실행되어야 합니다.
    ///
    /// # 기본값
    ///
    /// 24시간 (매일 1회)
    pub fn interval_hours() -> u64 {
        env::var("KEY_ROTATION_INTERVAL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}
