//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](store::UserStore) trait과 두 가지 구현체를 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 컬렉션
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod memory_repo;
pub mod store;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use store::UserStore;
pub use user_repo::MongoUserRepository;
