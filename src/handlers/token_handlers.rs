//! 토큰 API 핸들러
//!
//! 토큰 발급 엔드포인트와 현재 세션 확인 엔드포인트를 제공합니다.
//! 발급 엔드포인트는 로그인 플로우(이 서비스 범위 밖)가 호출하는 내부
//! 계약이며, 호출자 인증은 그 플로우의 책임입니다.

use actix_web::{get, post, web, HttpMessage, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::token::TokenResponse;
use crate::errors::AppError;
use crate::middlewares::AuthContext;

/// 토큰 발급 요청 본문
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    /// 토큰 주체 (사용자 식별자)
    pub subject: String,
    /// 토큰에 담을 역할 목록
    #[serde(default)]
    pub roles: Vec<String>,
}

/// 토큰 발급 API 핸들러
///
/// `POST /api/v1/tokens`
#[post("/tokens")]
pub async fn issue_token(
    ctx: web::Data<AuthContext>,
    body: web::Json<IssueTokenRequest>,
) -> Result<HttpResponse, AppError> {
    if body.subject.trim().is_empty() {
        return Err(AppError::ValidationError(
            "subject는 비어 있을 수 없습니다".to_string(),
        ));
    }

    let access_token = ctx.codec.issue(&body.subject, &body.roles).await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: ctx.codec.validity_secs(),
    }))
}

/// 현재 세션 확인 API 핸들러
///
/// `GET /api/v1/session` (인증 미들웨어 뒤에서만 동작)
///
/// 미들웨어가 채운 인증 정보를 그대로 돌려줍니다. 인증 정보가 없다는 것은
/// 미들웨어 없이 등록되었다는 뜻이므로 401로 응답합니다.
#[get("/session")]
pub async fn current_session(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or(AppError::InvalidToken)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "subject": user.subject,
        "roles": user.roles,
    })))
}
