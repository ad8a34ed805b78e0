// debugpaste - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for debugpaste configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/debugpaste/ or %APPDATA%\debugpaste\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[upload]` section.
    pub upload: UploadSection,
    /// `[bundle]` section.
    pub bundle: BundleSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[upload]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UploadSection {
    /// Upload endpoint URL.
    pub endpoint: Option<String>,
    /// Prefix for returned view URLs.
    pub view_url: Option<String>,
    /// Total request deadline in seconds.
    pub timeout_secs: Option<u64>,
    /// Connect deadline in seconds.
    pub connect_timeout_secs: Option<u64>,
}

/// `[bundle]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BundleSection {
    /// Trailing lines kept per file.
    pub tail_lines: Option<usize>,
    /// Primary log size cap in bytes.
    pub max_log_bytes: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Upload --
    /// Upload endpoint URL.
    pub endpoint: String,
    /// Prefix for returned view URLs.
    pub view_url_prefix: String,
    /// Total request deadline.
    pub timeout: Duration,
    /// Connect deadline.
    pub connect_timeout: Duration,

    // -- Bundle --
    /// Trailing lines kept per file.
    pub tail_lines: usize,
    /// Primary log size cap in bytes.
    pub max_log_bytes: u64,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::UPLOAD_URL.to_string(),
            view_url_prefix: constants::VIEW_URL_PREFIX.to_string(),
            timeout: Duration::from_secs(constants::DEFAULT_UPLOAD_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(constants::DEFAULT_CONNECT_TIMEOUT_SECS),
            tail_lines: constants::DEFAULT_TAIL_LINES,
            max_log_bytes: constants::MAX_PRIMARY_LOG_BYTES,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults plus a warning describing the problem.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_raw(path) {
        Ok(raw) => {
            tracing::info!(path = %path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Upload: endpoint / view_url --
    if let Some(endpoint) = raw.upload.endpoint {
        if is_http_url(&endpoint) {
            config.endpoint = endpoint;
        } else {
            warnings.push(out_of_range("upload.endpoint", &endpoint, "an http(s) URL"));
        }
    }
    if let Some(view_url) = raw.upload.view_url {
        if is_http_url(&view_url) {
            config.view_url_prefix = view_url;
        } else {
            warnings.push(out_of_range("upload.view_url", &view_url, "an http(s) URL"));
        }
    }

    // -- Upload: deadlines --
    let timeout_range = constants::MIN_TIMEOUT_SECS..=constants::MAX_TIMEOUT_SECS;
    let expected = format!(
        "{}-{} seconds",
        constants::MIN_TIMEOUT_SECS,
        constants::MAX_TIMEOUT_SECS
    );
    if let Some(secs) = raw.upload.timeout_secs {
        if timeout_range.contains(&secs) {
            config.timeout = Duration::from_secs(secs);
        } else {
            warnings.push(out_of_range("upload.timeout_secs", &secs.to_string(), &expected));
        }
    }
    if let Some(secs) = raw.upload.connect_timeout_secs {
        if timeout_range.contains(&secs) {
            config.connect_timeout = Duration::from_secs(secs);
        } else {
            warnings.push(out_of_range(
                "upload.connect_timeout_secs",
                &secs.to_string(),
                &expected,
            ));
        }
    }

    // -- Bundle: tail_lines --
    if let Some(lines) = raw.bundle.tail_lines {
        if (1..=constants::ABSOLUTE_MAX_TAIL_LINES).contains(&lines) {
            config.tail_lines = lines;
        } else {
            warnings.push(out_of_range(
                "bundle.tail_lines",
                &lines.to_string(),
                &format!("1-{}", constants::ABSOLUTE_MAX_TAIL_LINES),
            ));
        }
    }

    // -- Bundle: max_log_bytes --
    if let Some(bytes) = raw.bundle.max_log_bytes {
        if (1..=constants::ABSOLUTE_MAX_PRIMARY_LOG_BYTES).contains(&bytes) {
            config.max_log_bytes = bytes;
        } else {
            warnings.push(out_of_range(
                "bundle.max_log_bytes",
                &bytes.to_string(),
                &format!("1-{}", constants::ABSOLUTE_MAX_PRIMARY_LOG_BYTES),
            ));
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(out_of_range(
                "logging.level",
                &level,
                "one of error, warn, info, debug, trace",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

fn out_of_range(field: &str, value: &str, expected: &str) -> String {
    format!(
        "{}. Using default.",
        ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (AppConfig, Vec<String>) {
        validate(toml::from_str(text).unwrap())
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert!(warnings.is_empty());
        assert_eq!(config.tail_lines, constants::DEFAULT_TAIL_LINES);
        assert_eq!(config.endpoint, constants::UPLOAD_URL);
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse(
            r#"
            [upload]
            endpoint = "http://127.0.0.1:8080/upload"
            timeout_secs = 5
            connect_timeout_secs = 2

            [bundle]
            tail_lines = 200
            max_log_bytes = 1000

            [logging]
            level = "debug"
            "#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/upload");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.tail_lines, 200);
        assert_eq!(config.max_log_bytes, 1000);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [upload]
            endpoint = "ftp://example.org"
            timeout_secs = 0

            [bundle]
            tail_lines = 0

            [logging]
            level = "loud"
            "#,
        );
        assert_eq!(warnings.len(), 4);
        assert_eq!(config.endpoint, constants::UPLOAD_URL);
        assert_eq!(config.tail_lines, constants::DEFAULT_TAIL_LINES);
        assert!(config.log_level.is_none());
        assert!(warnings[0].contains("upload.endpoint"));
    }

    #[test]
    fn test_unparseable_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[upload\nendpoint =").unwrap();
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
        assert_eq!(config.max_log_bytes, constants::MAX_PRIMARY_LOG_BYTES);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future]\nfeature = true\n");
        assert!(warnings.is_empty());
    }
}
