//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장소에 한 문서로 저장되며 API 요청/응답 본문으로도 그대로 사용됩니다.

use serde::{Deserialize, Deserializer, Serialize};

/// 사용자 엔티티
///
/// 시스템의 유일한 도메인 엔티티입니다. `id`는 저장소가 최초 저장 시 할당하며
/// 이후 변경되지 않습니다.
///
/// 비밀번호는 평문으로 저장되고 응답에도 포함됩니다. 해시 처리가 필요한
/// 알려진 보안 결함이지만, 기존 클라이언트와의 호환을 위해 그대로 유지합니다.
///
/// 요청 본문에서 누락되었거나 `null`인 필드는 빈 값으로 채워집니다.
/// (로그인 요청은 `email`만 보내는 경우가 많습니다)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// 저장소가 할당하는 식별자
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 표시 이름
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// 이메일 (가입 시점에만 중복 확인)
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// 평문 비밀번호
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// 아직 저장되지 않은 새 사용자 생성
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// ID 문자열 참조
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// 주어진 ID를 가진 사본을 반환합니다.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
