// debugpaste - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "debugpaste";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "debugpaste";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Paste service
// =============================================================================

/// Upload endpoint of the paste service.
pub const UPLOAD_URL: &str = "https://athion.net/ISPaster/paste/upload";

/// Prefix of the public view URL; the paste id is appended verbatim.
pub const VIEW_URL_PREFIX: &str = "https://athion.net/ISPaster/paste/view/";

// =============================================================================
// Network deadlines
// =============================================================================

/// Default total request deadline (connect + write + read), in seconds.
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Default connect deadline, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Minimum user-configurable deadline (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable deadline (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

// =============================================================================
// Bundle limits
// =============================================================================

/// Number of trailing lines kept from every ingested text file.
pub const DEFAULT_TAIL_LINES: usize = 1_000;

/// Hard upper bound on the configurable tail length.
pub const ABSOLUTE_MAX_TAIL_LINES: usize = 100_000;

/// Primary log files larger than this many bytes are replaced by a placeholder.
pub const MAX_PRIMARY_LOG_BYTES: u64 = 14_000_000;

/// Hard upper bound on the configurable primary log cap.
pub const ABSOLUTE_MAX_PRIMARY_LOG_BYTES: u64 = 100_000_000;

/// Name under which the primary log is added to the paste.
pub const PRIMARY_LOG_NAME: &str = "latest.log";

/// Content substituted for a primary log that exceeds the size cap.
pub const PRIMARY_LOG_TOO_LARGE: &str = "latest.log is larger than 14 MB. Not uploading.";

/// Name of the summary file that always leads the paste.
pub const INFORMATION_FILE_NAME: &str = "information";

/// Fixed opening of the information file.
pub const INFORMATION_HEADER: &str = "# Welcome to this paste\n\
# It is meant to provide us at IntellectualSites with better information about your problem\n";

/// Heading written between the header and the caller-supplied summary.
pub const INFORMATION_SUMMARY_HEADING: &str = "\n# Server Information\n";

/// Fixed closing line of the information file.
pub const INFORMATION_FOOTER: &str = "# Okay :D Great. The paste has been created successfully.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
