/// A field that failed its declared constraint.
///
/// Carries the offending field name and a human readable message. Raised by
/// the value object constructors before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Trims `raw` and checks its character count against `min..=max`.
///
/// `label` is the capitalized field name used in messages, e.g. "Username".
pub(crate) fn trimmed_within(
    field: &'static str,
    label: &str,
    raw: &str,
    min: usize,
    max: usize,
    max_verb: &str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }

    let length = trimmed.chars().count();
    if length < min {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at least {min} characters long"),
        ));
    }

    if length > max {
        return Err(ValidationError::new(
            field,
            format!("{label} {max_verb} {max} characters"),
        ));
    }

    Ok(trimmed.to_string())
}
