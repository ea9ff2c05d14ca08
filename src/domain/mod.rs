//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 핵심 객체 (User)
//! └── dto       - 데이터 전송 객체 (UserDto, Message)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;

pub use dto::{Message, UserDto};
pub use entities::users::User;
