use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::AccountRepositoryError;
use crate::user::application::domain::UserRole;

/// A user row as written to and read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub mobile_number: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError>;

    /// Overwrites the whole row. Last write wins.
    async fn update_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError>;
}
