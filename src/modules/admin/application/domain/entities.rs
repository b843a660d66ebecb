use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::AdminRecord;
use crate::credentials::application::domain::{Credential, PasswordHash, PlainPassword};
use crate::credentials::application::services::PreparedSave;
use crate::shared::domain::validation::trimmed_within;
use crate::shared::domain::{EmailAddress, Timestamps, ValidationError};

/// Back-office permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    SuperAdmin,
    #[default]
    Admin,
    Moderator,
}

impl AdminRole {
    pub const FIELD: &'static str = "role";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "superadmin",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "moderator" => Ok(Self::Moderator),
            other => Err(ValidationError::new(
                Self::FIELD,
                format!("`{other}` is not a valid admin role"),
            )),
        }
    }
}

/// 4–20 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 20;

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        trimmed_within(
            Self::FIELD,
            "Username",
            raw,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
            "must not exceed",
        )
        .map(Self)
    }

    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw registration input, validated by [`AdminAccount::register`].
#[derive(Clone)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `None` means the default role.
    pub role: Option<String>,
}

/// An administrator record.
///
/// Fields change only through the setters, which validate their input. The
/// secret set by [`AdminAccount::set_password`] stays pending until the next
/// save hashes it.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    id: Uuid,
    username: Username,
    email: EmailAddress,
    credential: Credential,
    role: AdminRole,
    timestamps: Timestamps,
    persisted: bool,
}

impl AdminAccount {
    pub fn register(input: NewAdmin, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let username = Username::parse(&input.username)?;
        let email = EmailAddress::parse(&input.email)?;
        let password = PlainPassword::parse(&input.password)?;
        let role = match input.role.as_deref() {
            Some(raw) => raw.parse()?,
            None => AdminRole::default(),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            email,
            credential: Credential::Pending(password),
            role,
            timestamps: Timestamps::starting_at(now),
            persisted: false,
        })
    }

    pub(crate) fn restore(record: AdminRecord) -> Self {
        Self {
            id: record.id,
            username: Username::from_stored(record.username),
            email: EmailAddress::from_stored(record.email),
            credential: Credential::Sealed(PasswordHash::from_stored(record.password_hash)),
            role: record.role,
            timestamps: Timestamps::restore(record.created_at, record.updated_at),
            persisted: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn role(&self) -> AdminRole {
        self.role
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }

    /// True until the first successful save.
    pub fn is_new(&self) -> bool {
        !self.persisted
    }

    pub fn set_username(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.username = Username::parse(raw)?;
        Ok(())
    }

    pub fn set_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::parse(raw)?;
        Ok(())
    }

    pub fn set_password(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.credential = Credential::Pending(PlainPassword::parse(raw)?);
        Ok(())
    }

    pub fn set_role(&mut self, role: AdminRole) {
        self.role = role;
    }

    pub(crate) fn to_record(&self, prepared: &PreparedSave) -> AdminRecord {
        AdminRecord {
            id: self.id,
            username: self.username.as_str().to_string(),
            email: self.email.as_str().to_string(),
            password_hash: prepared.password_hash.as_str().to_string(),
            role: self.role,
            created_at: prepared.timestamps.created_at(),
            updated_at: prepared.timestamps.updated_at(),
        }
    }

    /// Adopts what storage returned for the last save.
    pub(crate) fn apply_saved(&mut self, record: AdminRecord) {
        *self = Self::restore(record);
    }
}
