//! 요청 인증 미들웨어 모듈
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 계정 상태를
//! 확인한 뒤 인증된 사용자 정보를 Request Extensions에 채웁니다.

pub mod auth_inner;
pub mod auth_middleware;

use std::sync::Arc;

use crate::repositories::accounts::AccountDirectory;
use crate::services::auth::TokenCodec;

pub use auth_middleware::AuthMiddleware;

/// 인증 미들웨어가 사용하는 협력자 묶음
///
/// 프로세스 전역 싱글톤 대신 명시적으로 주입됩니다. 토큰 검증은
/// `TokenCodec`이, 검증 성공 이후의 계정 잠금/비활성화 확인은
/// `AccountDirectory`가 담당합니다.
#[derive(Clone)]
pub struct AuthContext {
    /// 토큰 발급/검증 서비스
    pub codec: Arc<TokenCodec>,
    /// 계정 상태 조회
    pub accounts: Arc<dyn AccountDirectory>,
}
