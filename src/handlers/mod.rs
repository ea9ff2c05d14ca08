//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! actix-web 라우팅 매크로(`#[get]`, `#[post]` 등)로 경로를 선언하고,
//! 실제 등록은 [`routes`](crate::routes) 모듈이 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`users`] - 사용자 CRUD 및 이메일 로그인 (`/api/users`)
//! - [`message`] - 인사 메시지 데모 (`/hello`)
//! - [`home`] - 홈 페이지 (`/`)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! `ResponseError` 구현을 통해 상태 코드만 담긴 응답으로 변환됩니다.

pub mod home;
pub mod message;
pub mod users;
