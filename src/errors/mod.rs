//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 `AppResult` 별칭을 제공합니다.
//! 모든 에러는 `actix_web::ResponseError`를 통해 HTTP 상태 코드로 변환됩니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
