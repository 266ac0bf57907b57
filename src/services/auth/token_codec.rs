//! JWT 토큰 발급/검증 서비스 구현
//!
//! HMAC-SHA-512 서명을 사용하여 짧은 유효 기간의 액세스 토큰을 발급하고
//! 검증합니다. 서명 키는 `KeyStore`에서 가장 최근에 생성된 키를 사용합니다.
//!
//! ## 키 순환과의 관계
//!
//! 검증은 언제나 *현재의* 최신 키로 수행됩니다. 따라서 삭제된 키로 서명된
//! 토큰은 더 이상 검증할 수 없습니다. 이는 의도된 트레이드오프이며,
//! 키 순환 주기가 토큰 유효 기간보다 길어야 살아있는 토큰이 고아가 되지
//! 않습니다 (기본값: 순환 28일, 토큰 2시간).
//!
//! 이전에 발급되어 아직 만료되지 않은 구 키의 서명은 수용하지 않습니다
//! (단일 키 검증). 순환 직후 짧은 구간 동안 직전 키로 서명된 토큰이
//! `InvalidToken`으로 거부될 수 있다는 알려진 한계가 있습니다.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::DateTime;

use crate::config::JwtConfig;
use crate::domain::keys::SigningKey;
use crate::domain::token::TokenClaims;
use crate::errors::{AppError, AppResult};
use crate::repositories::keys::KeyStore;

/// JWT 토큰 발급/검증 서비스
///
/// 발급과 검증 모두 `KeyStore` 읽기 외에는 부수 효과가 없습니다.
/// 폐기 목록(blacklist)은 확인하지 않습니다. 유효성은 순수하게
/// 서명 + 만료 시간으로 결정되며, 잠금/비활성 계정 상태는 호출자가
/// sub 클레임으로 별도 확인합니다.
pub struct TokenCodec {
    store: Arc<dyn KeyStore>,
    issuer: String,
    audience: String,
    /// 토큰 유효 기간
    validity: chrono::Duration,
}

impl TokenCodec {
    /// 명시적 설정으로 코덱을 생성합니다.
    pub fn new(
        store: Arc<dyn KeyStore>,
        issuer: String,
        audience: String,
        validity: chrono::Duration,
    ) -> Self {
        Self {
            store,
            issuer,
            audience,
            validity,
        }
    }

    /// 환경 변수 설정(`JWT_*`)으로 코덱을 생성합니다.
    pub fn from_env(store: Arc<dyn KeyStore>) -> Self {
        Self::new(
            store,
            JwtConfig::issuer(),
            JwtConfig::audience(),
            chrono::Duration::hours(JwtConfig::expiration_hours()),
        )
    }

    /// 토큰 유효 기간을 초 단위로 반환합니다.
    pub fn validity_secs(&self) -> i64 {
        self.validity.num_seconds()
    }

    /// 주어진 주체와 역할로 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NoActiveKey` - 만료되지 않은 서명 키가 없는 경우.
    ///   순환 작업이 실행된 적 없다는 뜻이며 500으로 노출됩니다.
    /// * `AppError::DatabaseError` - 키 조회 실패
    pub async fn issue(&self, subject: &str, roles: &[String]) -> AppResult<String> {
        let key = self.active_key().await?;
        let now = Utc::now();

        let claims = TokenClaims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(&key.secret_bytes()?);

        encode(&Header::new(Algorithm::HS512), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// 서명, 발급자, 대상, 만료 시간을 모두 검증합니다 (leeway 0초).
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 서명은 유효하지만 만료된 토큰.
    ///   클라이언트가 재발급을 시도할 수 있도록 별도 에러로 구분됩니다.
    /// * `AppError::InvalidToken` - 서명 불일치, 손상된 형식, 발급자/대상
    ///   불일치 등 그 외 모든 검증 실패
    /// * `AppError::NoActiveKey` - 저장소에 키가 하나도 없는 경우
    pub async fn validate(&self, token: &str) -> AppResult<TokenClaims> {
        // 검증에는 최신 키를 만료 여부와 무관하게 사용한다. 키 수명 말미에
        // 발급된 토큰은 키 만료 후에도 자체 유효 기간 안에 있을 수 있으며,
        // 검증 불가 기준은 키의 만료가 아니라 삭제다.
        let key = self
            .store
            .find_most_recent()
            .await?
            .ok_or(AppError::NoActiveKey)?;

        let decoding_key = DecodingKey::from_secret(&key.secret_bytes()?);

        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }

    /// 발급에 사용할 활성 키를 조회합니다.
    ///
    /// 가장 최근에 생성된 키가 이미 만료되었다면 발급 관점에서는 활성 키가
    /// 없는 것으로 취급합니다 (순환 작업이 곧 교체할 키로 서명하지 않음).
    async fn active_key(&self) -> AppResult<SigningKey> {
        self.store
            .find_most_recent()
            .await?
            .filter(|key| !key.is_expired_at(DateTime::now()))
            .ok_or(AppError::NoActiveKey)
    }
}
