use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::admin::application::domain::AdminRole;
use crate::shared::AccountRepositoryError;

/// An admin row as written to and read from storage. The password is
/// always a hash here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn insert_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError>;

    /// Overwrites the whole row. Last write wins.
    async fn update_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError>;
}
