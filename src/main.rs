//! 서명 키 순환 / 토큰 검증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 키 순환 백그라운드 태스크를
//! 기동합니다. MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를
//! 제공합니다.

use std::sync::Arc;

use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use jwt_keyring_service::db::Database;
use jwt_keyring_service::middlewares::AuthContext;
use jwt_keyring_service::repositories::accounts::{AccountDirectory, AccountRepository};
use jwt_keyring_service::repositories::keys::{KeyStore, SigningKeyRepository};
use jwt_keyring_service::routes::configure_all_routes;
use jwt_keyring_service::services::auth::{
    interval_from_env, spawn_rotation_task, KeyRotator, TokenCodec,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 키 순환 / 토큰 검증 서비스 시작중...");

    // 데이터 스토어 및 인증 협력자 초기화
    let ctx = initialize_auth_context().await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(ctx).await
}

/// MongoDB 연결과 인증 협력자들을 초기화합니다
///
/// 데이터베이스 연결 → 인덱스 생성 → 키 순환 태스크 기동 순서로
/// 진행됩니다. 순환 태스크의 첫 실행은 즉시 이루어지므로 서버가 요청을
/// 받기 시작할 때는 보통 활성 서명 키가 준비되어 있습니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_auth_context() -> AuthContext {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패"),
    );

    let key_repo = Arc::new(SigningKeyRepository::new(database.clone()));
    if let Err(e) = key_repo.ensure_indexes().await {
        // 인덱스 생성 실패는 치명적이지 않음 (조회가 느려질 뿐)
        error!("서명 키 인덱스 생성 실패: {}", e);
    }

    let key_store: Arc<dyn KeyStore> = key_repo;
    let accounts: Arc<dyn AccountDirectory> = Arc::new(AccountRepository::new(database));

    // 키 순환 태스크 기동 (기동 직후 1회 + 매 주기마다 실행)
    let rotator = Arc::new(KeyRotator::from_env(key_store.clone()));
    spawn_rotation_task(rotator, interval_from_env());
    info!("🔑 키 순환 태스크 기동됨");

    AuthContext {
        codec: Arc::new(TokenCodec::from_env(key_store)),
        accounts,
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(ctx: AuthContext) -> std::io::Result<()> {
    let bind_address = "127.0.0.1:8080";

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let ctx = ctx.clone();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &ctx))
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
