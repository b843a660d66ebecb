use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::credentials::application::domain::{Credential, PasswordHash, PlainPassword};
use crate::credentials::application::services::PreparedSave;
use crate::shared::domain::validation::trimmed_within;
use crate::shared::domain::{EmailAddress, Timestamps, ValidationError};
use crate::user::application::ports::outgoing::UserRecord;

static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is a valid regex"));

/// Front-office accounts only ever hold this one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
}

impl UserRole {
    pub const FIELD: &'static str = "role";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            other => Err(ValidationError::new(
                Self::FIELD,
                format!("`{other}` is not a valid user role"),
            )),
        }
    }
}

/// Display name, 2–30 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub const FIELD: &'static str = "name";
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 30;

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        trimmed_within(
            Self::FIELD,
            "Name",
            raw,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
            "cannot exceed",
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

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly ten ASCII digits. Surrounding whitespace is an error, not trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub const FIELD: &'static str = "mobile_number";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::new(Self::FIELD, "Mobile number is required"));
        }

        if !MOBILE_PATTERN.is_match(raw) {
            return Err(ValidationError::new(
                Self::FIELD,
                format!("{raw} is not a valid mobile number! Mobile number should be 10 digits."),
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw sign-up input, validated by [`UserAccount::register`].
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    /// Only `"user"` is accepted; `None` means the same.
    pub role: Option<String>,
}

/// An end-user record.
///
/// New accounts start active, unverified and without a profile picture.
#[derive(Debug, Clone)]
pub struct UserAccount {
    id: Uuid,
    name: PersonName,
    email: EmailAddress,
    credential: Credential,
    mobile_number: MobileNumber,
    role: UserRole,
    is_verified: bool,
    is_active: bool,
    profile_picture: String,
    timestamps: Timestamps,
    persisted: bool,
}

impl UserAccount {
    pub fn register(input: NewUser, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let name = PersonName::parse(&input.name)?;
        let email = EmailAddress::parse(&input.email)?;
        let password = PlainPassword::parse(&input.password)?;
        let mobile_number = MobileNumber::parse(&input.mobile_number)?;
        let role = match input.role.as_deref() {
            Some(raw) => raw.parse()?,
            None => UserRole::default(),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            credential: Credential::Pending(password),
            mobile_number,
            role,
            is_verified: false,
            is_active: true,
            profile_picture: String::new(),
            timestamps: Timestamps::starting_at(now),
            persisted: false,
        })
    }

    pub(crate) fn restore(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: PersonName::from_stored(record.name),
            email: EmailAddress::from_stored(record.email),
            credential: Credential::Sealed(PasswordHash::from_stored(record.password_hash)),
            mobile_number: MobileNumber::from_stored(record.mobile_number),
            role: record.role,
            is_verified: record.is_verified,
            is_active: record.is_active,
            profile_picture: record.profile_picture,
            timestamps: Timestamps::restore(record.created_at, record.updated_at),
            persisted: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn mobile_number(&self) -> &MobileNumber {
        &self.mobile_number
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn profile_picture(&self) -> &str {
        &self.profile_picture
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

    pub fn is_new(&self) -> bool {
        !self.persisted
    }

    pub fn set_name(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.name = PersonName::parse(raw)?;
        Ok(())
    }

    pub fn set_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::parse(raw)?;
        Ok(())
    }

    pub fn set_mobile_number(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.mobile_number = MobileNumber::parse(raw)?;
        Ok(())
    }

    pub fn set_password(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.credential = Credential::Pending(PlainPassword::parse(raw)?);
        Ok(())
    }

    // In-memory only. The persisting variants live on the user service.
    pub fn set_profile_picture(&mut self, url: impl Into<String>) {
        self.profile_picture = url.into();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn mark_verified(&mut self) {
        self.is_verified = true;
    }

    pub(crate) fn to_record(&self, prepared: &PreparedSave) -> UserRecord {
        UserRecord {
            id: self.id,
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            password_hash: prepared.password_hash.as_str().to_string(),
            mobile_number: self.mobile_number.as_str().to_string(),
            role: self.role,
            is_verified: self.is_verified,
            is_active: self.is_active,
            profile_picture: self.profile_picture.clone(),
            created_at: prepared.timestamps.created_at(),
            updated_at: prepared.timestamps.updated_at(),
        }
    }

    pub(crate) fn apply_saved(&mut self, record: UserRecord) {
        *self = Self::restore(record);
    }
}
