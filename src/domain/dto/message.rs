//! 인사 메시지 응답 DTO

use serde::{Deserialize, Serialize};

/// `GET /hello` 응답 본문
///
/// `id`는 프로세스 안에서 요청마다 1씩 증가합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
}

impl Message {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
