use chrono::{DateTime, Utc};

/// Creation and last-save instants of a record.
///
/// `updated_at` never moves backwards and never precedes `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Timestamps for a save happening at `now`.
    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
        }
    }
}
