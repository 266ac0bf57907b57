//! 키 순환 스케줄러
//!
//! actix 런타임 위에서 고정 간격으로 순환 작업을 실행하는 백그라운드
//! 태스크입니다. cron 표현식 같은 정밀한 스케줄 의미는 필요하지 않으며,
//! "키 순환 주기 안에 최소 한 번 실행"만 보장하면 됩니다.

use std::sync::Arc;
use std::time::Duration;

use crate::config::RotationConfig;
use crate::services::auth::key_rotator::KeyRotator;

/// 순환 작업을 백그라운드 태스크로 기동합니다.
///
/// 첫 틱은 즉시 실행되므로 프로세스 기동 시 1회 실행이 보장되고,
/// 이후에는 주어진 간격마다 실행됩니다. 태스크는 자기 자신과 겹치지
/// 않습니다 (이전 실행이 끝나야 다음 틱을 소비).
///
/// 실행 실패는 로그만 남기고 다음 틱에서 재시도합니다. 순환 실패가
/// 계속되면 기존 활성 키가 만료된 뒤 토큰 발급이 `NoActiveKey`로
/// 실패하기 시작합니다.
pub fn spawn_rotation_task(rotator: Arc<KeyRotator>, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(every);

        loop {
            ticker.tick().await;

            match rotator.rotate().await {
                Ok(report) => {
                    log::info!(
                        "키 순환 완료: 삭제 {}개, 신규 발급 {:?}",
                        report.deleted,
                        report.created
                    );
                }
                Err(e) => {
                    log::error!("키 순환 실패 (다음 주기에 재시도): {}", e);
                }
            }
        }
    });
}

/// 환경 변수 설정(`KEY_ROTATION_INTERVAL_HOURS`) 기반 실행 간격을 반환합니다.
pub fn interval_from_env() -> Duration {
    Duration::from_secs(RotationConfig::interval_hours() * 3600)
}
