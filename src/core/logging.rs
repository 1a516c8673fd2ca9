//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info` and millisecond
/// timestamps. Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// heightpatch::core::logging::init();
/// log::info!("Terrain build started");
/// ```
pub fn init() {
    // try_init: tests and doc-tests may initialize more than once
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .format_timestamp_millis()
    .try_init();
}
