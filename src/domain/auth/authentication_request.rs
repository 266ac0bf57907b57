//! 요청 인증 모드와 역할 요구사항 정의

/// 라우트별 인증 모드
///
/// - `Required`: 유효한 토큰이 없으면 요청을 거부합니다.
/// - `Optional`: 토큰이 없거나 유효하지 않아도 요청을 통과시키되,
///   인증 정보는 채우지 않습니다. 권한 부여는 호출자 책임입니다.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    Required,
    Optional,
}

/// 라우트 접근에 필요한 역할 요구사항
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 단일 역할 필요
    Single(String),
    /// 주어진 역할 중 하나 이상 필요
    Any(Vec<String>),
}

impl RequiredRole {
    /// 주어진 역할 목록이 요구사항을 충족하는지 확인합니다.
    pub fn is_satisfied(&self, roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required) => roles.iter().any(|r| r == required),
            RequiredRole::Any(candidates) => {
                candidates.iter().any(|c| roles.iter().any(|r| r == c))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("admin".to_string());
        let admin_roles = vec!["admin".to_string(), "user".to_string()];
        let user_roles = vec!["user".to_string()];

        assert!(required.is_satisfied(&admin_roles));
        assert!(!required.is_satisfied(&user_roles));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["admin".to_string(), "moderator".to_string()]);
        let admin_roles = vec!["admin".to_string(), "user".to_string()];
        let moderator_roles = vec!["moderator".to_string(), "user".to_string()];
        let user_roles = vec!["user".to_string()];

        assert!(required.is_satisfied(&admin_roles));
        assert!(required.is_satisfied(&moderator_roles));
        assert!(!required.is_satisfied(&user_roles));
    }
}
