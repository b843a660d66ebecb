use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::credentials::application::domain::{Credential, PasswordHash};
use crate::credentials::application::ports::outgoing::{Clock, HashError, PasswordHasher};
use crate::shared::domain::Timestamps;

/// What a record looks like once it is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSave {
    pub password_hash: PasswordHash,
    pub timestamps: Timestamps,
}

/// Turns pending secrets into hashes before a save and checks candidate
/// passwords against stored hashes.
#[derive(Clone)]
pub struct CredentialLifecycle {
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl CredentialLifecycle {
    pub fn new(hasher: Arc<dyn PasswordHasher>, clock: Arc<dyn Clock>) -> Self {
        Self { hasher, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Hashes a pending secret. A sealed hash is returned unchanged.
    pub async fn seal(&self, credential: &Credential) -> Result<PasswordHash, HashError> {
        match credential {
            Credential::Sealed(hash) => Ok(hash.clone()),
            Credential::Pending(plain) => {
                let digest = self.hasher.hash_password(plain.expose()).await?;
                Ok(PasswordHash::from_stored(digest))
            }
        }
    }

    /// Seals the credential and stamps `updated_at` for a save happening now.
    pub async fn prepare_save(
        &self,
        credential: &Credential,
        timestamps: &Timestamps,
    ) -> Result<PreparedSave, HashError> {
        let password_hash = self.seal(credential).await?;

        Ok(PreparedSave {
            password_hash,
            timestamps: timestamps.touched(self.clock.now()),
        })
    }

    pub async fn verify(&self, credential: &Credential, candidate: &str) -> Result<bool, HashError> {
        match credential {
            Credential::Sealed(hash) => self.hasher.verify_password(candidate, hash.as_str()).await,
            Credential::Pending(_) => Err(HashError::NotHashed),
        }
    }
}
