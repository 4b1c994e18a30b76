//! Tracing/logging initialization.
//!
//! Store operations report skipped input, missing files and malformed data
//! through `tracing`; nothing is printed unless a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Output format of the installed subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Format {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable single lines.
    Pretty,
}

/// Install a JSON subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(Format::Json);
}

/// Like [`init`], choosing the output format.
pub fn init_with(format: Format) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        Format::Json => builder.json().try_init(),
        Format::Pretty => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_a_no_op() {
        init();
        init_with(Format::Pretty);
        ::tracing::info!("observability initialised");
    }
}
