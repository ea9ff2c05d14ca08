//! 인사 메시지 핸들러
//!
//! 서비스 동작 확인용 데모 엔드포인트입니다. 사용자 관리와는 무관합니다.

use std::sync::atomic::{AtomicU64, Ordering};
use actix_web::{get, web, HttpResponse};
use crate::domain::dto::Message;

/// `GET /hello` 응답 내용
pub const HELLO_CONTENT: &str = "Hello World";

/// 인사 메시지 ID 발급기
///
/// 프로세스 단위로 1부터 증가하는 ID를 발급합니다. 모든 워커가 같은 인스턴스를 공유합니다.
#[derive(Debug, Default)]
pub struct GreetingCounter {
    next: AtomicU64,
}

impl GreetingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 메시지 ID
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// 인사 메시지 핸들러
///
/// # 엔드포인트
///
/// `GET /hello`
///
/// ```json
/// { "id": 1, "content": "Hello World" }
/// ```
#[get("/hello")]
pub async fn say_hello(counter: web::Data<GreetingCounter>) -> HttpResponse {
    HttpResponse::Ok().json(Message::new(counter.next_id(), HELLO_CONTENT))
}
