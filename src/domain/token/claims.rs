//! JWT 클레임 정의
//!
//! 발급되는 토큰에 포함되는 클레임 집합입니다. 토큰은 저장되지 않는
//! 상태 없는(stateless) 자격 증명이며, 검증은 서명과 만료 시간으로만
//! 이루어집니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰 클레임
///
/// 발급 시점에 채워지고 검증 성공 시 그대로 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰 주체 (사용자 식별자)
    pub sub: String,
    /// 사용자 역할 목록
    pub roles: Vec<String>,
    /// 발급자
    pub iss: String,
    /// 대상
    pub aud: String,
    /// 발급 시간 (Unix timestamp, 초)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp, 초)
    pub exp: i64,
}

/// 토큰 발급 응답
///
/// HTTP 발급 엔드포인트가 반환하는 형태입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 발급된 JWT 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
