use async_trait::async_trait;
use uuid::Uuid;

use super::user_repository::UserRecord;
use crate::shared::AccountRepositoryError;

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserRecord>, AccountRepositoryError>;

    /// `email` is expected in its normalized (trimmed, lowercase) form.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AccountRepositoryError>;

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserRecord>, AccountRepositoryError>;
}
