//! AuthMiddleware 인증 로직의 핵심적인 기능
//!
//! 요청별 인증 상태 기계:
//! `Unauthenticated → TokenPresent → {Valid, Expired, Invalid}
//! → {Authenticated, Rejected}`

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::accounts::AccountStatus;
use crate::domain::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::errors::AppError;
use crate::middlewares::AuthContext;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub ctx: AuthContext,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let ctx = self.ctx.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            // Authorization 헤더에서 Bearer 토큰 추출 시도
            let bearer = extract_bearer_token(&req);

            match (&mode, bearer) {
                // 토큰 없음: Optional 모드는 비인증 상태로 진행
                (AuthMode::Optional, None) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
                // 토큰 없음: Required 모드는 401 거부
                (AuthMode::Required, None) => {
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // 토큰 존재: 검증 + 계정 상태 확인
                (_, Some(token)) => match authenticate_token(&token, &ctx).await {
                    Ok(user) => {
                        // 역할 검증
                        if let Some(ref required) = required_role {
                            if !required.is_satisfied(&user.roles) {
                                if mode == AuthMode::Required {
                                    log::warn!(
                                        "권한 부족: 주체 {} ({:?}), 필요 권한: {:?}",
                                        user.subject,
                                        user.roles,
                                        required
                                    );
                                    let response =
                                        HttpResponse::Forbidden().json(serde_json::json!({
                                            "error": "insufficient_permissions",
                                            "message": "접근 권한이 부족합니다"
                                        }));
                                    let (req, _) = req.into_parts();
                                    let res = ServiceResponse::new(req, response)
                                        .map_into_right_body();
                                    return Ok(res);
                                }
                                log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                            } else {
                                req.extensions_mut().insert(user.clone());
                                log::debug!("인증 성공: 주체 {}", user.subject);
                            }
                        } else {
                            req.extensions_mut().insert(user.clone());
                            log::debug!("인증 성공: 주체 {}", user.subject);
                        }
                    }
                    Err(err) => {
                        // Optional 모드에서는 검증 실패도 비인증 진행으로 처리
                        if mode == AuthMode::Required {
                            log::warn!("인증 실패: {}", err);
                            let response = err.error_response();
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response).map_into_right_body();
                            return Ok(res);
                        }
                        log::debug!("선택적 인증: 토큰 검증 실패, 비인증 진행 ({})", err);
                    }
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Authorization 헤더에서 Bearer 토큰 부분만 추출합니다.
///
/// 헤더가 없거나 Bearer 형식이 아니면 `None`을 반환하며, 이 경우 요청은
/// 비인증(Unauthenticated) 상태로 남습니다.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// 토큰을 검증하고 계정 상태를 확인하여 인증된 사용자를 만듭니다.
///
/// 서명이 유효한 토큰이라도 주체 계정이 잠기거나 비활성화되었으면
/// 거부됩니다. 이는 토큰 유효성 위에 계층화된 인가 시점 확인입니다.
async fn authenticate_token(token: &str, ctx: &AuthContext) -> Result<AuthenticatedUser, AppError> {
    let claims = ctx.codec.validate(token).await?;

    match ctx.accounts.find_status(&claims.sub).await? {
        None => Err(AppError::InvalidToken),
        Some(AccountStatus::Locked) => Err(AppError::AccountLocked),
        Some(AccountStatus::Disabled) => Err(AppError::AccountDisabled),
        Some(AccountStatus::Active) => Ok(AuthenticatedUser {
            subject: claims.sub,
            roles: claims.roles,
        }),
    }
}
