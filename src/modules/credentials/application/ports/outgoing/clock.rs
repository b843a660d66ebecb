use chrono::{DateTime, Utc};

/// Wall-clock source for `created_at` / `updated_at`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
