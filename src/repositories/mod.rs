//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 구현체는 애플리케이션 시작 시 설정에 따라 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::MongoUserRepository;
//!
//! let user_repo = MongoUserRepository::new(database, "users");
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
