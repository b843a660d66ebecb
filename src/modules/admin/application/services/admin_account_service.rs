use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::admin::application::{
    domain::{AdminAccount, NewAdmin},
    ports::outgoing::{AdminQuery, AdminRepository},
    use_cases::AdminAccountsUseCase,
};
use crate::credentials::application::{ports::outgoing::HashError, services::CredentialLifecycle};
use crate::shared::domain::EmailAddress;
use crate::shared::{AccountRepositoryError, SaveAccountError};

pub struct AdminAccountService<R, Q>
where
    R: AdminRepository,
    Q: AdminQuery,
{
    repository: R,
    query: Q,
    credentials: CredentialLifecycle,
}

impl<R, Q> AdminAccountService<R, Q>
where
    R: AdminRepository,
    Q: AdminQuery,
{
    pub fn new(repository: R, query: Q, credentials: CredentialLifecycle) -> Self {
        Self {
            repository,
            query,
            credentials,
        }
    }
}

#[async_trait]
impl<R, Q> AdminAccountsUseCase for AdminAccountService<R, Q>
where
    R: AdminRepository,
    Q: AdminQuery,
{
    async fn register(&self, input: NewAdmin) -> Result<AdminAccount, SaveAccountError> {
        let mut account = AdminAccount::register(input, self.credentials.now()).inspect_err(|e| {
            warn!(field = e.field, error = %e, "Invalid admin registration input");
        })?;

        self.save(&mut account).await?;

        Ok(account)
    }

    async fn save(&self, account: &mut AdminAccount) -> Result<(), SaveAccountError> {
        let prepared = self
            .credentials
            .prepare_save(account.credential(), account.timestamps())
            .await
            .inspect_err(|e| {
                error!(admin_id = %account.id(), error = %e, "Password hashing failed, admin not saved");
            })?;

        let rehashed = account.credential().is_pending();
        let record = account.to_record(&prepared);

        let result = if account.is_new() {
            self.repository.insert_admin(record).await
        } else {
            self.repository.update_admin(record).await
        };

        let saved = result.map_err(|e| {
            match &e {
                AccountRepositoryError::ConstraintViolation(_) => {
                    warn!(admin_id = %account.id(), error = %e, "Admin rejected by unique constraint");
                }
                _ => {
                    error!(admin_id = %account.id(), error = %e, "Failed to persist admin");
                }
            }
            SaveAccountError::from(e)
        })?;

        account.apply_saved(saved);
        info!(
            admin_id = %account.id(),
            username = %account.username(),
            role = %account.role(),
            rehashed,
            "Admin saved"
        );

        Ok(())
    }

    async fn verify_password(
        &self,
        account: &AdminAccount,
        candidate: &str,
    ) -> Result<bool, HashError> {
        self.credentials.verify(account.credential(), candidate).await
    }

    async fn find_by_id(
        &self,
        admin_id: Uuid,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError> {
        Ok(self
            .query
            .find_by_id(admin_id)
            .await?
            .map(AdminAccount::restore))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError> {
        let email = EmailAddress::normalize(email);
        Ok(self
            .query
            .find_by_email(&email)
            .await?
            .map(AdminAccount::restore))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError> {
        Ok(self
            .query
            .find_by_username(username.trim())
            .await?
            .map(AdminAccount::restore))
    }
}
