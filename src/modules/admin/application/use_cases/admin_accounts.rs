use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::{AdminAccount, NewAdmin};
use crate::credentials::application::ports::outgoing::HashError;
use crate::shared::{AccountRepositoryError, SaveAccountError};

#[async_trait]
pub trait AdminAccountsUseCase: Send + Sync {
    /// Validates the input, hashes the password and inserts the record.
    async fn register(&self, input: NewAdmin) -> Result<AdminAccount, SaveAccountError>;

    /// Whole-record save. Re-hashes only if the password was set since the
    /// last load or save; always refreshes `updated_at`. On error `account`
    /// is left exactly as it was.
    async fn save(&self, account: &mut AdminAccount) -> Result<(), SaveAccountError>;

    async fn verify_password(
        &self,
        account: &AdminAccount,
        candidate: &str,
    ) -> Result<bool, HashError>;

    async fn find_by_id(&self, admin_id: Uuid)
        -> Result<Option<AdminAccount>, AccountRepositoryError>;

    async fn find_by_email(&self, email: &str)
        -> Result<Option<AdminAccount>, AccountRepositoryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError>;
}
