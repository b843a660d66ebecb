use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use super::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// A trimmed, lowercased email address matching `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const FIELD: &'static str = "email";
    /// Width of the `email` column.
    pub const MAX_LENGTH: usize = 255;

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(raw);

        if normalized.is_empty() {
            return Err(ValidationError::new(Self::FIELD, "Email is required"));
        }

        if normalized.chars().count() > Self::MAX_LENGTH {
            return Err(ValidationError::new(
                Self::FIELD,
                format!("Email must not exceed {} characters", Self::MAX_LENGTH),
            ));
        }

        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(ValidationError::new(
                Self::FIELD,
                "Please enter a valid email address",
            ));
        }

        Ok(Self(normalized))
    }

    /// Same normalization as [`EmailAddress::parse`] without the pattern
    /// check. Used to build lookup keys.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Wraps a value read back from storage.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
