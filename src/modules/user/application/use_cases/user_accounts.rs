use async_trait::async_trait;
use uuid::Uuid;

use crate::credentials::application::ports::outgoing::HashError;
use crate::shared::{AccountRepositoryError, SaveAccountError};
use crate::user::application::domain::{NewUser, UserAccount};

#[async_trait]
pub trait UserAccountsUseCase: Send + Sync {
    /// Validates the input, hashes the password and inserts the record.
    async fn register(&self, input: NewUser) -> Result<UserAccount, SaveAccountError>;

    /// Whole-record save with the same credential rules as admin accounts.
    async fn save(&self, account: &mut UserAccount) -> Result<(), SaveAccountError>;

    async fn verify_password(
        &self,
        account: &UserAccount,
        candidate: &str,
    ) -> Result<bool, HashError>;

    /// Replaces the profile picture URL and saves.
    async fn set_profile_picture(
        &self,
        account: &mut UserAccount,
        url: &str,
    ) -> Result<(), SaveAccountError>;

    /// Sets `is_active = false` and saves. Calling it again is harmless.
    async fn deactivate(&self, account: &mut UserAccount) -> Result<(), SaveAccountError>;

    /// Sets `is_active = true` and saves.
    async fn activate(&self, account: &mut UserAccount) -> Result<(), SaveAccountError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserAccount>, AccountRepositoryError>;

    async fn find_by_email(&self, email: &str)
        -> Result<Option<UserAccount>, AccountRepositoryError>;

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserAccount>, AccountRepositoryError>;
}
