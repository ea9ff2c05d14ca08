//! 사용자 관리 서비스 모듈
//!
//! 사용자 목록, 조회, 가입, 로그인, 수정, 삭제 비즈니스 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store);
//! let user = user_service.register(User::new("A", "a@x.com", "p")).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
