//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with `RUST_LOG` or the `info` default.
///
/// Returns `false` if a logger was already installed.
pub fn init() -> bool {
    init_with_level("info")
}

/// Initialize the logging system with a default filter (for example the
/// configured `log_level`). `RUST_LOG` still takes precedence when set.
///
/// Returns `false` if a logger was already installed.
pub fn init_with_level(level: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
