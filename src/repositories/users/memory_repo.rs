//! # 메모리 기반 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자 레코드를 보관하는 [`UserStore`] 구현체입니다.
//! 테스트와 `STORE_BACKEND=memory` 실행에 사용되며, 재시작하면 데이터가 사라집니다.

use std::sync::RwLock;
use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use super::store::UserStore;

/// 메모리 사용자 저장소
///
/// 레코드는 삽입 순서대로 보관되며, 이메일 조회는 가장 먼저 저장된 일치 항목을 반환합니다.
/// 식별자는 UUID v4 문자열로 할당됩니다.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let id = user
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        let mut users = self.users.write().context("사용자 저장소 쓰기 잠금 실패")?;

        match users.iter_mut().find(|existing| existing.id_str() == Some(id.as_str())) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().context("사용자 저장소 읽기 잠금 실패")?.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;

        Ok(users.iter().find(|user| user.id_str() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;

        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let id = user
            .id_str()
            .ok_or_else(|| AppError::ValidationError("ID가 없는 사용자는 삭제할 수 없습니다".to_string()))?;

        self.users
            .write()
            .context("사용자 저장소 쓰기 잠금 실패")?
            .retain(|existing| existing.id_str() != Some(id));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_assigns_id() {
        let repo = InMemoryUserRepository::new();

        let stored = repo.insert(User::new("A", "a@x.com", "p")).await.unwrap();

        let id = stored.id.clone().expect("id should be assigned");
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(stored));
    }

    #[actix_web::test]
    async fn test_insert_with_existing_id_overwrites() {
        let repo = InMemoryUserRepository::new();
        let stored = repo.insert(User::new("A", "a@x.com", "p")).await.unwrap();
        let id = stored.id.clone().unwrap();

        repo.insert(User::new("B", "b@x.com", "q").with_id(id.clone()))
            .await
            .unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "B");
        assert_eq!(found.email, "b@x.com");
    }

    #[actix_web::test]
    async fn test_insert_keeps_caller_supplied_id() {
        let repo = InMemoryUserRepository::new();

        let stored = repo
            .insert(User::new("A", "a@x.com", "p").with_id("custom-id"))
            .await
            .unwrap();

        assert_eq!(stored.id_str(), Some("custom-id"));
        assert!(repo.find_by_id("custom-id").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_find_by_email_returns_first_match() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(User::new("A", "dup@x.com", "p")).await.unwrap();
        repo.insert(User::new("B", "dup@x.com", "q")).await.unwrap();

        let found = repo.find_by_email("dup@x.com").await.unwrap();

        assert_eq!(found, Some(first));
        assert!(repo.find_by_email("none@x.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_all_and_delete() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        let a = repo.insert(User::new("A", "a@x.com", "p")).await.unwrap();
        let b = repo.insert(User::new("B", "b@x.com", "q")).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);

        repo.delete(&a).await.unwrap();

        let remaining = repo.find_all().await.unwrap();
        assert_eq!(remaining, vec![b]);
        assert!(repo.find_by_id(a.id_str().unwrap()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_delete_without_id_is_rejected() {
        let repo = InMemoryUserRepository::new();

        let result = repo.delete(&User::new("A", "a@x.com", "p")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
