use async_trait::async_trait;
use uuid::Uuid;

use super::admin_repository::AdminRecord;
use crate::shared::AccountRepositoryError;

#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminRecord>, AccountRepositoryError>;

    /// `email` is expected in its normalized (trimmed, lowercase) form.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AccountRepositoryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminRecord>, AccountRepositoryError>;
}
