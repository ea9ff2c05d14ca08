//! 비밀번호를 제외한 사용자 투영 타입

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 비밀번호를 제외한 사용자 정보
///
/// API 응답은 전체 레코드를 그대로 반환하므로 이 타입은 응답에 쓰이지 않습니다.
/// 로그 출력처럼 비밀번호가 새어나가면 안 되는 곳에서 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User { id, name, email, .. } = user;
        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_drops_password() {
        let user = User::new("A", "a@x.com", "secret").with_id("u1");
        let dto = UserDto::from(&user);

        assert_eq!(dto.id.as_deref(), Some("u1"));
        assert!(!format!("{:?}", dto).contains("secret"));
    }
}
