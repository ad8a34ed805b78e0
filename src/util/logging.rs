// debugpaste - util/logging.rs
//
// Diagnostics for a bundle upload go to stderr through `tracing`.
//
// The verbosity comes from the first of these that is set:
//   1. RUST_LOG in the environment
//   2. the --debug flag
//   3. `[logging] level` in config.toml
//   4. DEFAULT_LOG_LEVEL
//
// stdout is reserved for the paste URL (or the payload in dry-run mode). Log
// contents and payload bytes are never written to the log.

use super::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber for this process.
///
/// `debug_flag` mirrors --debug and `config_level` is the configured
/// `[logging] level`, if any. Must be called once, before the first upload.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(fallback_directive(debug_flag, config_level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(app = APP_NAME, version = APP_VERSION, "Logging initialised");
}

/// Filter directive used when RUST_LOG is absent.
fn fallback_directive<'a>(debug_flag: bool, config_level: Option<&'a str>) -> &'a str {
    if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_beats_config_level() {
        assert_eq!(fallback_directive(true, Some("warn")), "debug");
    }

    #[test]
    fn test_config_level_beats_default() {
        assert_eq!(fallback_directive(false, Some("trace")), "trace");
        assert_eq!(fallback_directive(false, None), DEFAULT_LOG_LEVEL);
    }
}
