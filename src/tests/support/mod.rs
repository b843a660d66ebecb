pub mod in_memory;
pub mod stubs;

pub use in_memory::{InMemoryAdminStore, InMemoryUserStore};
pub use stubs::{FailingHasher, ManualClock, PrefixHasher};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Routes `tracing` output through the test harness. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .ok();
}
