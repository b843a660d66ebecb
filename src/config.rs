use std::env;
use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use crate::credentials::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::credentials::adapter::outgoing::SystemClock;
use crate::credentials::application::ports::outgoing::PasswordHasher;
use crate::credentials::application::services::{
    CredentialLifecycle, HashingAlgorithm, PasswordHashingService,
};

/// Password hashing settings.
///
/// Every field has a default, so an empty environment yields bcrypt at
/// cost 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsConfig {
    pub algorithm: HashingAlgorithm,
    pub bcrypt_cost: u32,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            algorithm: HashingAlgorithm::default(),
            bcrypt_cost: BcryptHasher::DEFAULT_COST,
            argon2_memory_kib: Argon2Hasher::DEFAULT_MEMORY_KIB,
            argon2_iterations: Argon2Hasher::DEFAULT_ITERATIONS,
            argon2_parallelism: Argon2Hasher::DEFAULT_PARALLELISM,
        }
    }
}

impl AccountsConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Self {
        let profile = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{profile}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost);
        let clamped_cost = bcrypt_cost.clamp(BcryptHasher::MIN_COST, BcryptHasher::MAX_COST);
        if clamped_cost != bcrypt_cost {
            warn!(
                requested = bcrypt_cost,
                applied = clamped_cost,
                "BCRYPT_COST out of range, clamped"
            );
        }

        Self {
            algorithm: parse_or(&lookup, "PASSWORD_HASH_ALGORITHM", defaults.algorithm),
            bcrypt_cost: clamped_cost,
            argon2_memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.argon2_memory_kib),
            argon2_iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.argon2_iterations),
            argon2_parallelism: parse_or(
                &lookup,
                "ARGON2_PARALLELISM",
                defaults.argon2_parallelism,
            ),
        }
    }

    /// The hasher every account service should share.
    pub fn build_hasher(&self) -> Arc<dyn PasswordHasher> {
        let argon2 = Argon2Hasher::with_params(
            self.argon2_memory_kib,
            self.argon2_iterations,
            self.argon2_parallelism,
        )
        .unwrap_or_else(|e| {
            warn!(error = %e, "Invalid Argon2 parameters, using defaults");
            Argon2Hasher::default()
        });

        Arc::new(PasswordHashingService::new(
            self.algorithm,
            Arc::new(BcryptHasher::with_cost(self.bcrypt_cost)),
            Arc::new(argon2),
        ))
    }

    /// Configured hasher on the wall clock, ready to hand to the account
    /// services.
    pub fn credential_lifecycle(&self) -> CredentialLifecycle {
        CredentialLifecycle::new(self.build_hasher(), Arc::new(SystemClock))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) if raw.trim().is_empty() => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Invalid configuration value, using default");
            default
        }),
    }
}
