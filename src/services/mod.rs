//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new(store));
//! App::new().app_data(user_service.clone());
//! ```

pub mod users;
