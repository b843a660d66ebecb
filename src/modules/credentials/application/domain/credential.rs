use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::shared::domain::ValidationError;

/// A plaintext password that passed the length policy and is waiting to be
/// hashed. Never printed, never persisted.
pub struct PlainPassword(SecretString);

impl PlainPassword {
    pub const FIELD: &'static str = "password";
    pub const MIN_LENGTH: usize = 8;

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::new(Self::FIELD, "Password is required"));
        }

        if raw.chars().count() < Self::MIN_LENGTH {
            return Err(ValidationError::new(
                Self::FIELD,
                format!(
                    "Password must be at least {} characters long",
                    Self::MIN_LENGTH
                ),
            ));
        }

        Ok(Self(SecretString::from(raw.to_owned())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for PlainPassword {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_owned()))
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword([REDACTED])")
    }
}

/// Output of the one-way hasher, as stored in the `password_hash` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The secret of an account record.
///
/// `Pending` means the secret was set since the record was last loaded or
/// saved and must be hashed on the next save. `Sealed` is the stored hash,
/// which a save passes through untouched.
#[derive(Debug, Clone)]
pub enum Credential {
    Pending(PlainPassword),
    Sealed(PasswordHash),
}

impl Credential {
    pub fn is_pending(&self) -> bool {
        matches!(self, Credential::Pending(_))
    }

    pub fn password_hash(&self) -> Option<&PasswordHash> {
        match self {
            Credential::Sealed(hash) => Some(hash),
            Credential::Pending(_) => None,
        }
    }
}
