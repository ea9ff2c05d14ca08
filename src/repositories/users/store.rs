//! 사용자 저장소 인터페이스
//!
//! 서비스 계층은 이 trait에만 의존하며, 실제 백엔드(MongoDB 또는 메모리)는
//! 애플리케이션 시작 시점에 선택되어 `Arc<dyn UserStore>`로 주입됩니다.

use async_trait::async_trait;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 레코드 저장소
///
/// 단일 문서 단위의 연산만 제공합니다. 트랜잭션이나 이메일 유니크 제약은
/// 보장하지 않으므로, "이메일 조회 후 저장" 같은 복합 연산은 경쟁 상태에 놓일 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 저장소 구현체 이름 (로그 및 헬스체크 표시용)
    fn name(&self) -> &'static str;

    /// 사용자를 저장합니다.
    ///
    /// `id`가 없으면 새 식별자를 할당하고, 같은 `id`의 레코드가 있으면 통째로 덮어씁니다.
    /// 저장된 레코드(할당된 `id` 포함)를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 모든 사용자를 반환합니다. 순서는 보장하지 않습니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자를 조회합니다. 여러 건이 있으면 첫 번째 레코드를 반환합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 주어진 사용자의 `id`와 일치하는 레코드를 삭제합니다.
    async fn delete(&self, user: &User) -> AppResult<()>;
}
