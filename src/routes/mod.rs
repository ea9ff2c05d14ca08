//! API 라우트 설정 모듈
//!
//! (메서드, 경로) → 핸들러 매핑을 한곳에서 관리합니다.
//!
//! # Route Table
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/` | [`home::index`](crate::handlers::home::index) |
//! | `GET` | `/hello` | [`message::say_hello`](crate::handlers::message::say_hello) |
//! | `GET` | `/health` | [`health_check`] |
//! | `GET` | `/api/users` | [`users::list_users`](crate::handlers::users::list_users) |
//! | `GET` | `/api/users/{id}` | [`users::get_user`](crate::handlers::users::get_user) |
//! | `POST` | `/api/users/register` | [`users::register_user`](crate::handlers::users::register_user) |
//! | `POST` | `/api/users/login` | [`users::login_user`](crate::handlers::users::login_user) |
//! | `PATCH` | `/api/users/update/{id}` | [`users::update_user`](crate::handlers::users::update_user) |
//! | `DELETE` | `/api/users/delete/{id}` | [`users::delete_user`](crate::handlers::users::delete_user) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패는 `AppError::ValidationError`(400)로 변환됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_site_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /api/users` - 전체 목록
/// - `GET /api/users/{id}` - 단건 조회
/// - `POST /api/users/register` - 가입
/// - `POST /api/users/login` - 이메일 로그인
/// - `PATCH /api/users/update/{id}` - 전체 교체
/// - `DELETE /api/users/delete/{id}` - 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"A","email":"a@x.com","password":"p"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::register_user)
            .service(handlers::users::login_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::get_user)
    );
}

/// 사용자 관리와 무관한 페이지 라우트
fn configure_site_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::home::index)
        .service(handlers::message::say_hello);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "store": "mongodb"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.store_name(),
    }))
}
