use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::credentials::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
    pub const DEFAULT_ITERATIONS: u32 = 3;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let params = Params::new(
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_PARALLELISM,
            None,
        )
        .unwrap_or_default();

        Self { params }
    }

    /// Fails when argon2 rejects the combination, e.g. memory below
    /// `8 * parallelism` KiB.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    fn argon2id(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let argon2 = self.argon2id();
        let secret = password.as_bytes().to_vec();

        let digest = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(&secret, &salt)
                .map(|phc| phc.to_string())
        })
        .await
        .map_err(|_| HashError::TaskFailed)?;

        digest.map_err(|_| HashError::HashFailed)
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let argon2 = self.argon2id();
        let secret = password.as_bytes().to_vec();
        let stored = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            // cost params are read back from the PHC string, not from `self`
            let phc = PasswordHash::new(&stored).map_err(|_| HashError::VerifyFailed)?;
            match argon2.verify_password(&secret, &phc) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
