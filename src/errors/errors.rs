//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 서명 키 순환 / 토큰 검증 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | HTTP 상태 | 의미 |
//! |------|-----------|------|
//! | `NoActiveKey` | 500 | 발급 가능한 서명 키 없음 (순환 작업 미실행) |
//! | `InvalidToken` | 401 | 서명 검증 실패 또는 손상된 토큰 (일반 메시지) |
//! | `TokenExpired` | 401 | 서명은 유효하지만 만료된 토큰 (구체적 메시지) |
//! | `AccountLocked` | 403 | 유효한 토큰이지만 잠긴 계정 |
//! | `AccountDisabled` | 403 | 유효한 토큰이지만 비활성화된 계정 |
//!
//! `TokenExpired`와 `InvalidToken`을 구분하는 이유: 클라이언트가 만료 응답을
//! 받으면 토큰 재발급을 시도할 수 있지만, 서명 실패는 재시도할 수 없습니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 발급 가능한 서명 키가 없음 (500 Internal Server Error)
    ///
    /// 키 순환 작업이 한 번도 실행되지 않았거나 저장소가 비어 있는 경우입니다.
    #[error("No active signing key available")]
    NoActiveKey,

    /// 서명 검증 실패 또는 형식이 잘못된 토큰 (401 Unauthorized)
    #[error("Invalid token")]
    InvalidToken,

    /// 형식과 서명은 유효하지만 만료 시점이 지난 토큰 (401 Unauthorized)
    #[error("Token expired")]
    TokenExpired,

    /// 유효한 토큰이지만 계정이 잠김 (403 Forbidden)
    #[error("Account locked")]
    AccountLocked,

    /// 유효한 토큰이지만 계정이 비활성화됨 (403 Forbidden)
    #[error("Account disabled")]
    AccountDisabled,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::AccountLocked | AppError::AccountDisabled => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
