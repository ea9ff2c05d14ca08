//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 `/api/users` 스코프 아래에 등록됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/api/users` | 전체 사용자 목록 | 200 | 404 (사용자 없음) |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 | 404 |
//! | `POST` | `/api/users/register` | 가입 | 200 | 409 (이메일 중복) |
//! | `POST` | `/api/users/login` | 이메일 로그인 | 200 (일치 없으면 `null`) | - |
//! | `PATCH` | `/api/users/update/{id}` | 전체 교체 | 200 | 404 |
//! | `DELETE` | `/api/users/delete/{id}` | 삭제 | 204 | 404 |
//!
//! 잘못된 JSON 본문은 400으로 응답합니다. 에러 응답은 본문이 비어 있습니다.

use actix_web::{web, HttpResponse, get, post, patch, delete};
use log::info;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 사용자 목록 핸들러
///
/// # 엔드포인트
///
/// `GET /api/users`
///
/// 사용자가 하나도 없으면 빈 배열이 아니라 404를 반환합니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    info!("📋 GET /api/users");

    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/users/{user_id}`
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:8080/api/users/665f1c2e9b1e8a3d4c2f0a11
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    info!("🔍 GET /api/users/{}", user_id);

    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users/register`
///
/// # 요청 본문
///
/// ```json
/// { "name": "A", "email": "a@x.com", "password": "p" }
/// ```
///
/// # 응답
///
/// - 200: 저장된 사용자 (할당된 `id` 포함)
/// - 409: 이미 등록된 이메일
#[post("/register")]
pub async fn register_user(
    service: web::Data<UserService>,
    payload: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    info!("📝 POST /api/users/register - email: {}", payload.email);

    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users/login`
///
/// 본문의 `email`로 사용자를 찾아 그대로 반환합니다. 비밀번호는 확인하지 않으며,
/// 일치하는 사용자가 없으면 200과 함께 `null`을 반환합니다.
#[post("/login")]
pub async fn login_user(
    service: web::Data<UserService>,
    payload: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    info!("🔐 POST /api/users/login - email: {}", payload.email);

    let user = service.login(&payload).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// # 엔드포인트
///
/// `PATCH /api/users/update/{user_id}`
///
/// 본문 전체로 기존 레코드를 교체합니다. 저장되는 `id`는 항상 경로의 `user_id`입니다.
#[patch("/update/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    info!("✏️ PATCH /api/users/update/{}", user_id);

    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/users/delete/{user_id}`
///
/// 물리적 삭제이며 복구할 수 없습니다.
#[delete("/delete/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    info!("🗑️ DELETE /api/users/delete/{}", user_id);

    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
