use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::credentials::application::ports::outgoing::{Clock, HashError, PasswordHasher};

/// A clock that only moves when told to. Starts at 2025-01-01T00:00:00Z.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Deterministic, instant "hash": `hashed::` + the plaintext.
pub struct PrefixHasher;

impl PrefixHasher {
    const PREFIX: &'static str = "hashed::";
}

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("{}{password}", Self::PREFIX))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        hash.strip_prefix(Self::PREFIX)
            .map(|stored| stored == password)
            .ok_or(HashError::VerifyFailed)
    }
}

pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}
