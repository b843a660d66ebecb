use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use crate::credentials::application::ports::outgoing::{HashError, PasswordHasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashingAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

impl FromStr for HashingAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(format!("unknown password hash algorithm: {other}")),
        }
    }
}

/// Hashes with the configured algorithm and verifies with whichever
/// algorithm produced the stored hash, so switching algorithms does not lock
/// out existing accounts.
#[derive(Clone)]
pub struct PasswordHashingService {
    algorithm: HashingAlgorithm,
    bcrypt: Arc<dyn PasswordHasher>,
    argon2: Arc<dyn PasswordHasher>,
}

impl PasswordHashingService {
    pub fn new(
        algorithm: HashingAlgorithm,
        bcrypt: Arc<dyn PasswordHasher>,
        argon2: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            algorithm,
            bcrypt,
            argon2,
        }
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    fn hasher_for(&self, algorithm: HashingAlgorithm) -> &Arc<dyn PasswordHasher> {
        match algorithm {
            HashingAlgorithm::Bcrypt => &self.bcrypt,
            HashingAlgorithm::Argon2 => &self.argon2,
        }
    }

    fn detect(hash: &str) -> Option<HashingAlgorithm> {
        if hash.starts_with("$argon2") {
            Some(HashingAlgorithm::Argon2)
        } else if hash.starts_with("$2") {
            Some(HashingAlgorithm::Bcrypt)
        } else {
            None
        }
    }
}

#[async_trait]
impl PasswordHasher for PasswordHashingService {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.hasher_for(self.algorithm).hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let algorithm = Self::detect(hash).ok_or(HashError::VerifyFailed)?;
        self.hasher_for(algorithm).verify_password(password, hash).await
    }
}
