//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system.
///
/// Honours `RUST_LOG`; defaults to `warn` when it is unset.
pub fn init() {
    init_with_default(LevelFilter::Warn);
}

/// Initialize the logging system with `default` used when `RUST_LOG` is unset.
///
/// Calling it more than once is harmless; only the first call takes effect.
pub fn init_with_default(default: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default.as_str());
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}
