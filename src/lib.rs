//! 사용자 관리 서비스 백엔드
//!
//! 사용자 가입, 이메일 로그인, 목록/조회/수정/삭제를 제공하는 REST 서비스입니다.
//! 사용자 레코드는 MongoDB 컬렉션(또는 메모리 저장소)에 문서 단위로 저장됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 조회, 전체 교체, 삭제
//! - **이메일 로그인**: 이메일로 사용자 조회 (비밀번호 미검증)
//! - **교체 가능한 저장소**: `UserStore` trait 기반 MongoDB / 메모리 백엔드
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = service.register(User::new("A", "a@x.com", "p")).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
