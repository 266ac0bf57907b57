//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::middlewares::AuthContext;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 토큰 검증과 계정 조회 협력자
    ctx: AuthContext,
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(ctx: AuthContext, mode: AuthMode) -> Self {
        Self {
            ctx,
            mode,
            required_role: None,
        }
    }

    /// 역할 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_role(ctx: AuthContext, mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            ctx,
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required(ctx: AuthContext) -> Self {
        Self::new(ctx, AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional(ctx: AuthContext) -> Self {
        Self::new(ctx, AuthMode::Optional)
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(ctx: AuthContext, role: &str) -> Self {
        Self::new_with_role(ctx, AuthMode::Required, RequiredRole::Single(role.to_string()))
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(ctx: AuthContext, roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_role(ctx, AuthMode::Required, RequiredRole::Any(role_strings))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            ctx: self.ctx.clone(),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::domain::accounts::AccountStatus;
    use crate::domain::keys::SigningKey;
    use crate::handlers::token_handlers::current_session;
    use crate::repositories::accounts::InMemoryAccountDirectory;
    use crate::repositories::keys::{InMemoryKeyStore, KeyStore};
    use crate::services::auth::TokenCodec;

    struct TestAuth {
        store: Arc<InMemoryKeyStore>,
        accounts: Arc<InMemoryAccountDirectory>,
        ctx: AuthContext,
    }

    async fn test_auth() -> TestAuth {
        let store = Arc::new(InMemoryKeyStore::new());
        store
            .save(&SigningKey::generate(chrono::Duration::days(28)))
            .await
            .unwrap();

        let accounts = Arc::new(InMemoryAccountDirectory::new());
        let codec = Arc::new(TokenCodec::new(
            store.clone(),
            "portfolio-backend".to_string(),
            "portfolio-clients".to_string(),
            chrono::Duration::hours(2),
        ));
        let ctx = AuthContext {
            codec,
            accounts: accounts.clone(),
        };

        TestAuth {
            store,
            accounts,
            ctx,
        }
    }

    /// 같은 키로 서명되었지만 이미 만료된 토큰을 만듭니다
    async fn issue_expired_token(auth: &TestAuth, subject: &str) -> String {
        let expired_codec = TokenCodec::new(
            auth.store.clone(),
            "portfolio-backend".to_string(),
            "portfolio-clients".to_string(),
            chrono::Duration::seconds(-10),
        );
        expired_codec
            .issue(subject, &["USER".to_string()])
            .await
            .unwrap()
    }

    async fn probe() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_required_route_without_header_is_401() {
        let auth = test_auth().await;
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/session").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_route_without_header_proceeds() {
        let auth = test_auth().await;
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::optional(auth.ctx.clone()))
                    .route("/probe", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/probe").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_expired_token_is_401_with_expired_reason() {
        let auth = test_auth().await;
        auth.accounts.insert("alice", AccountStatus::Active);
        let token = issue_expired_token(&auth, "alice").await;

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("expired"));
    }

    #[actix_web::test]
    async fn test_garbage_token_is_401_generic() {
        let auth = test_auth().await;
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(!body.contains("expired"));
    }

    #[actix_web::test]
    async fn test_locked_account_is_403_despite_valid_token() {
        let auth = test_auth().await;
        auth.accounts.insert("bob", AccountStatus::Locked);
        let token = auth
            .ctx
            .codec
            .issue("bob", &["USER".to_string()])
            .await
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_disabled_account_is_403() {
        let auth = test_auth().await;
        auth.accounts.insert("carol", AccountStatus::Disabled);
        let token = auth
            .ctx
            .codec
            .issue("carol", &["USER".to_string()])
            .await
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_unknown_subject_is_401() {
        let auth = test_auth().await;
        // 계정 디렉터리에 등록하지 않은 주체
        let token = auth
            .ctx
            .codec
            .issue("ghost", &["USER".to_string()])
            .await
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_and_active_account_reaches_handler() {
        let auth = test_auth().await;
        auth.accounts.insert("alice", AccountStatus::Active);
        let token = auth
            .ctx
            .codec
            .issue("alice", &["USER".to_string()])
            .await
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required(auth.ctx.clone()))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("alice"));
        assert!(body.contains("USER"));
    }

    #[actix_web::test]
    async fn test_missing_role_is_403() {
        let auth = test_auth().await;
        auth.accounts.insert("alice", AccountStatus::Active);
        let token = auth
            .ctx
            .codec
            .issue("alice", &["USER".to_string()])
            .await
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware::required_with_role(auth.ctx.clone(), "admin"))
                    .service(current_session),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
