//! API 라우트 설정 모듈
//!
//! 서비스가 노출하는 얇은 운영용 엔드포인트들을 등록합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/admin")
//!         .wrap(AuthMiddleware::required_with_roles(ctx.clone(), vec!["admin"]))
//!         .service(some_admin_handler)
//! );
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers::token_handlers;
use crate::middlewares::{AuthContext, AuthMiddleware};

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `ctx` - 인증 협력자 묶음 (핸들러와 미들웨어에 주입됨)
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, ctx: &AuthContext) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .app_data(web::Data::new(ctx.clone()))
            // 토큰 발급은 로그인 플로우가 호출하는 내부 계약 (인증 불필요)
            .service(token_handlers::issue_token)
            // 그 외 엔드포인트는 Bearer 토큰 필수
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required(ctx.clone()))
                    .service(token_handlers::current_session),
            ),
    );
}

/// 헬스체크 엔드포인트
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
