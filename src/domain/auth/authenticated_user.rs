//! 인증된 사용자 표현
//!
//! 미들웨어가 토큰 검증과 계정 상태 확인을 통과한 요청에 대해
//! Request Extensions에 저장하는 구조체입니다.

use serde::{Deserialize, Serialize};

/// 인증된 사용자 정보
///
/// 다운스트림 핸들러는 이 구조체를 통해 요청 주체와 역할을 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 sub 클레임에서 추출한 사용자 식별자
    pub subject: String,
    /// 토큰의 roles 클레임
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인합니다.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 주어진 역할 중 하나라도 보유하고 있는지 확인합니다.
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    /// 관리자 역할 보유 여부를 확인합니다.
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_has_role() {
        let user = AuthenticatedUser {
            subject: "test_id".to_string(),
            roles: vec!["user".to_string(), "admin".to_string()],
        };

        assert!(user.has_role("admin"));
        assert!(user.has_role("user"));
        assert!(!user.has_role("moderator"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_authenticated_user_has_any_role() {
        let user = AuthenticatedUser {
            subject: "test_id".to_string(),
            roles: vec!["user".to_string(), "moderator".to_string()],
        };

        assert!(user.has_any_role(&["admin", "moderator"]));
        assert!(!user.has_any_role(&["admin", "premium"]));
        assert!(!user.is_admin());
    }
}
