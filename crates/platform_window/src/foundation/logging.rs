//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter string
///
/// `RUST_LOG` still wins when it is set, so a configured level can be
/// overridden from the shell. Returns false when a logger was already
/// installed.
pub fn init_with_level(level: &str) -> bool {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init().is_ok()
}
