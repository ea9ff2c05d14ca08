//! # MongoDB 사용자 리포지토리 구현
//!
//! 사용자 엔티티를 MongoDB 컬렉션에 한 사용자당 한 문서로 저장하는
//! [`UserStore`] 구현체입니다.
//!
//! ## 문서 형태
//!
//! ```json
//! { "_id": ObjectId("665f1c2e9b1e8a3d4c2f0a11"), "name": "A", "email": "a@x.com", "password": "p" }
//! ```
//!
//! 새 레코드의 `_id`는 `ObjectId`로 저장되고, API에는 16진수 문자열로 노출됩니다.
//! `ObjectId` 형식이 아닌 ID는 문자열 `_id`로 저장됩니다. 기존 컬렉션의 문서도
//! 두 형식 중 무엇이든 그대로 읽을 수 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use crate::{
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
};
use super::store::UserStore;

/// 컬렉션에 저장되는 사용자 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: Bson,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl UserDocument {
    fn from_user(id: Bson, user: &User) -> Self {
        Self {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        let id = match document.id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        };

        User {
            id: Some(id),
            name: document.name,
            email: document.email,
            password: document.password,
        }
    }
}

/// API 문자열 ID를 저장소의 `_id` 값으로 변환
///
/// `ObjectId` 16진수 문자열이면 `ObjectId`, 아니면 문자열 그대로입니다.
fn id_key(id: &str) -> Bson {
    ObjectId::parse_str(id)
        .map(Bson::ObjectId)
        .unwrap_or_else(|_| Bson::String(id.to_string()))
}

/// MongoDB 사용자 리포지토리
///
/// ## 저장 정책
///
/// - **저장(insert)**: `_id` 기준 `replace_one` + upsert. 새 레코드 생성과
///   기존 레코드 전체 덮어쓰기를 같은 연산으로 처리합니다.
/// - **인덱스**: `email` 일반 인덱스 (조회 최적화용, 유니크 아님)
///
/// 모든 드라이버 오류는 `AppError::DatabaseError`로 변환됩니다.
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 사용자 컬렉션 이름
    collection_name: String,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection(&self.collection_name)
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// `email` 필드에 일반(비유니크) 인덱스를 생성합니다.
    /// 이메일 중복은 가입 시점에 서비스 계층에서만 확인합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_lookup".to_string())
                .build())
            .build();

        self.collection().create_index(email_index).await?;

        info!("✅ 인덱스 생성: {}(email)", self.collection_name);
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let id = user
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex())
            .clone();

        let key = id_key(&id);
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection()
            .replace_one(doc! { "_id": key.clone() }, UserDocument::from_user(key, &user))
            .with_options(options)
            .await?;

        debug!("사용자 문서 저장: {}", id);

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection().find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let document = self.collection()
            .find_one(doc! { "_id": id_key(id) })
            .await?;

        Ok(document.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let document = self.collection()
            .find_one(doc! { "email": email })
            .await?;

        Ok(document.map(User::from))
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let id = user
            .id_str()
            .ok_or_else(|| AppError::ValidationError("ID가 없는 사용자는 삭제할 수 없습니다".to_string()))?;

        let result = self.collection()
            .delete_one(doc! { "_id": id_key(id) })
            .await?;

        debug!("사용자 문서 삭제: {} ({}건)", id, result.deleted_count);

        Ok(())
    }
}
