//! # 사용자 관리 서비스 구현
//!
//! 사용자 목록/조회/가입/로그인/수정/삭제 여섯 가지 연산의 비즈니스 규칙을 구현합니다.
//! 각 연산은 "저장소 호출 → 결과 분류 → `AppResult` 반환" 순서를 따르며,
//! HTTP 상태 코드로의 변환은 [`AppError`]가 담당합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                  UserService                   │
//! │  list · get · register · login · update · del  │
//! └───────────────────────┬────────────────────────┘
//!                         │ Arc<dyn UserStore>
//!                         ▼
//! ┌────────────────────────────────────────────────┐
//! │   MongoUserRepository | InMemoryUserRepository │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## 알려진 제약
//!
//! - 이메일 중복은 가입 시점에만 확인합니다. 수정 시에는 확인하지 않습니다.
//! - "이메일 조회 후 저장"은 원자적이지 않아 동시 가입 요청은 둘 다 성공할 수 있습니다.
//! - 비밀번호는 비교하지 않으며 평문으로 저장됩니다.

use std::sync::Arc;
use log::{debug, info, warn};
use crate::{
    domain::{dto::users::UserDto, entities::users::User},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 요청 간 공유되는 상태는 저장소 핸들뿐이며, 모든 연산은 상태 없는 요청/응답입니다.
///
/// ## 에러 처리 전략
///
/// - **NotFound**: 대상 ID가 없거나 사용자 목록이 비어 있음
/// - **ConflictError**: 가입 시 이미 등록된 이메일
/// - **DatabaseError**: 저장소 오류 (그대로 전파)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
///
/// let user = service.register(User::new("A", "a@x.com", "p")).await?;
/// let found = service.get_user(user.id_str().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 사용자 저장소
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용 중인 저장소 이름
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// 전체 사용자 목록 조회
    ///
    /// 저장된 사용자가 하나도 없으면 빈 목록 대신 `NotFound`를 반환합니다.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.store.find_all().await?;

        if users.is_empty() {
            return Err(AppError::NotFound("아직 생성된 사용자가 없습니다".to_string()));
        }

        debug!("사용자 목록 조회: {}명", users.len());
        Ok(users)
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    /// 새 사용자 가입
    ///
    /// 같은 이메일의 사용자가 이미 있으면 `ConflictError`를 반환합니다.
    /// 요청 본문에 `id`가 들어 있어도 무시하고 저장소가 새 ID를 할당합니다.
    pub async fn register(&self, mut user: User) -> AppResult<User> {
        if self.store.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(format!("이미 사용 중인 이메일입니다: {}", user.email)));
        }

        user.id = None;
        let created = self.store.insert(user).await?;

        info!("사용자 가입 완료: {:?}", UserDto::from(&created));
        Ok(created)
    }

    /// 이메일 기반 로그인
    ///
    /// 이메일로 사용자를 조회해 그대로 반환합니다. 비밀번호는 확인하지 않습니다.
    /// 일치하는 사용자가 없으면 에러 대신 `None`을 반환합니다.
    pub async fn login(&self, credentials: &User) -> AppResult<Option<User>> {
        let user = self.store.find_by_email(&credentials.email).await?;

        match &user {
            Some(found) => info!("로그인: {:?}", UserDto::from(found)),
            None => warn!("로그인 대상 이메일 없음: {}", credentials.email),
        }

        Ok(user)
    }

    /// 사용자 정보 전체 교체
    ///
    /// 경로의 `id`가 존재해야 하며, 교체 본문의 `id`는 경로의 `id`로 덮어씁니다.
    /// 이메일 중복은 확인하지 않습니다.
    pub async fn update_user(&self, id: &str, mut replacement: User) -> AppResult<User> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("수정할 사용자를 찾을 수 없습니다: {}", id)));
        }

        if replacement.id_str().is_some_and(|payload_id| payload_id != id) {
            warn!("본문 ID {:?}를 경로 ID {}로 대체합니다", replacement.id, id);
        }
        replacement.id = Some(id.to_string());

        let updated = self.store.insert(replacement).await?;

        info!("사용자 수정 완료: {:?}", UserDto::from(&updated));
        Ok(updated)
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let user = self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("삭제할 사용자를 찾을 수 없습니다: {}", id)))?;

        self.store.delete(&user).await?;

        info!("사용자 삭제 완료: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[actix_web::test]
    async fn test_register_then_get_returns_equivalent_record() {
        let service = service();

        let created = service.register(User::new("A", "a@x.com", "p")).await.unwrap();
        let id = created.id_str().expect("id assigned").to_string();

        let found = service.get_user(&id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "A");
        assert_eq!(found.password, "p");
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_conflicts() {
        let service = service();
        service.register(User::new("A", "a@x.com", "p")).await.unwrap();

        let result = service.register(User::new("Other", "a@x.com", "q")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        let users = service.list_users().await.unwrap();
        assert_eq!(users.iter().filter(|u| u.email == "a@x.com").count(), 1);
    }

    #[actix_web::test]
    async fn test_register_ignores_payload_id() {
        let service = service();
        let first = service.register(User::new("A", "a@x.com", "p")).await.unwrap();

        let second = service
            .register(User::new("B", "b@x.com", "q").with_id(first.id.clone().unwrap()))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_list_users_empty_is_not_found() {
        let service = service();

        assert!(matches!(service.list_users().await, Err(AppError::NotFound(_))));

        let created = service.register(User::new("A", "a@x.com", "p")).await.unwrap();
        assert_eq!(service.list_users().await.unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_not_found() {
        let result = service().get_user("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_login_ignores_password() {
        let service = service();
        let created = service.register(User::new("A", "a@x.com", "p")).await.unwrap();

        let found = service
            .login(&User::new("", "a@x.com", "wrong-password"))
            .await
            .unwrap();

        assert_eq!(found, Some(created));
    }

    #[actix_web::test]
    async fn test_login_unknown_email_returns_none() {
        let found = service()
            .login(&User::new("", "ghost@x.com", ""))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_update_replaces_record_under_path_id() {
        let service = service();
        let created = service.register(User::new("A", "a@x.com", "p")).await.unwrap();
        let id = created.id.clone().unwrap();

        let updated = service
            .update_user(&id, User::new("A2", "a2@x.com", "p2").with_id("something-else"))
            .await
            .unwrap();

        assert_eq!(updated.id_str(), Some(id.as_str()));
        assert_eq!(service.get_user(&id).await.unwrap().email, "a2@x.com");
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_does_not_check_email_uniqueness() {
        let service = service();
        service.register(User::new("A", "a@x.com", "p")).await.unwrap();
        let b = service.register(User::new("B", "b@x.com", "q")).await.unwrap();

        let updated = service
            .update_user(b.id_str().unwrap(), User::new("B", "a@x.com", "q"))
            .await
            .unwrap();

        assert_eq!(updated.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_update_unknown_user_is_not_found() {
        let result = service()
            .update_user("missing", User::new("A", "a@x.com", "p"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_removes_user() {
        let service = service();
        let created = service.register(User::new("A", "a@x.com", "p")).await.unwrap();
        let id = created.id.unwrap();

        service.delete_user(&id).await.unwrap();

        assert!(matches!(service.get_user(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_user(&id).await, Err(AppError::NotFound(_))));
    }
}
