//! Process-wide diagnostics setup for stockroom binaries and tests.

/// Tracing subscriber configuration.
pub mod tracing;

pub use self::tracing::{Format, init, init_with};
