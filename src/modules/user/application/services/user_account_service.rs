use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::credentials::application::{ports::outgoing::HashError, services::CredentialLifecycle};
use crate::shared::domain::EmailAddress;
use crate::shared::{AccountRepositoryError, SaveAccountError};
use crate::user::application::{
    domain::{NewUser, UserAccount},
    ports::outgoing::{UserQuery, UserRepository},
    use_cases::UserAccountsUseCase,
};

pub struct UserAccountService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    repository: R,
    query: Q,
    credentials: CredentialLifecycle,
}

impl<R, Q> UserAccountService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    pub fn new(repository: R, query: Q, credentials: CredentialLifecycle) -> Self {
        Self {
            repository,
            query,
            credentials,
        }
    }

    /// Applies `change` to a copy, saves it, and only then swaps it in.
    async fn modify_and_save<F>(
        &self,
        account: &mut UserAccount,
        change: F,
    ) -> Result<(), SaveAccountError>
    where
        F: FnOnce(&mut UserAccount) + Send,
    {
        let mut draft = account.clone();
        change(&mut draft);
        self.save(&mut draft).await?;
        *account = draft;
        Ok(())
    }
}

#[async_trait]
impl<R, Q> UserAccountsUseCase for UserAccountService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    async fn register(&self, input: NewUser) -> Result<UserAccount, SaveAccountError> {
        let mut account = UserAccount::register(input, self.credentials.now()).inspect_err(|e| {
            warn!(field = e.field, error = %e, "Invalid user registration input");
        })?;

        self.save(&mut account).await?;

        Ok(account)
    }

    async fn save(&self, account: &mut UserAccount) -> Result<(), SaveAccountError> {
        let prepared = self
            .credentials
            .prepare_save(account.credential(), account.timestamps())
            .await
            .inspect_err(|e| {
                error!(user_id = %account.id(), error = %e, "Password hashing failed, user not saved");
            })?;

        let rehashed = account.credential().is_pending();
        let record = account.to_record(&prepared);

        let result = if account.is_new() {
            self.repository.insert_user(record).await
        } else {
            self.repository.update_user(record).await
        };

        let saved = result.map_err(|e| {
            if let AccountRepositoryError::ConstraintViolation(_) = &e {
                warn!(user_id = %account.id(), email = %account.email(), error = %e, "User rejected by unique constraint");
            } else {
                error!(user_id = %account.id(), error = %e, "Failed to persist user");
            }
            SaveAccountError::from(e)
        })?;

        account.apply_saved(saved);
        info!(
            user_id = %account.id(),
            email = %account.email(),
            is_active = account.is_active(),
            rehashed,
            "User saved"
        );

        Ok(())
    }

    async fn verify_password(
        &self,
        account: &UserAccount,
        candidate: &str,
    ) -> Result<bool, HashError> {
        self.credentials.verify(account.credential(), candidate).await
    }

    async fn set_profile_picture(
        &self,
        account: &mut UserAccount,
        url: &str,
    ) -> Result<(), SaveAccountError> {
        let url = url.to_string();
        self.modify_and_save(account, move |draft| draft.set_profile_picture(url))
            .await
    }

    async fn deactivate(&self, account: &mut UserAccount) -> Result<(), SaveAccountError> {
        self.modify_and_save(account, UserAccount::deactivate).await
    }

    async fn activate(&self, account: &mut UserAccount) -> Result<(), SaveAccountError> {
        self.modify_and_save(account, UserAccount::activate).await
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserAccount>, AccountRepositoryError> {
        Ok(self
            .query
            .find_by_id(user_id)
            .await?
            .map(UserAccount::restore))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, AccountRepositoryError> {
        let email = EmailAddress::normalize(email);
        Ok(self
            .query
            .find_by_email(&email)
            .await?
            .map(UserAccount::restore))
    }

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserAccount>, AccountRepositoryError> {
        Ok(self
            .query
            .find_by_mobile_number(mobile_number)
            .await?
            .map(UserAccount::restore))
    }
}
