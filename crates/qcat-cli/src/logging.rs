//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Log filter for a `-v` count; with no flags, `QCAT_LOG_LEVEL` or `warn`.
pub fn filter_for(verbose: u8, env_level: Option<&str>) -> String {
    match verbose {
        0 => env_level.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbose: u8) {
    let env_level = std::env::var("QCAT_LOG_LEVEL").ok();
    let filter = filter_for(verbose, env_level.as_deref());

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
