// debugpaste - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all debugpaste operations.
/// Errors are categorised by the stage that produced them.
#[derive(Debug)]
pub enum PasteError {
    /// Bad constructor or add-file input.
    InvalidArgument(ArgumentError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Encoding, transport or server-side failure during the upload.
    Upload(UploadError),
}

impl fmt::Display for PasteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "Invalid argument: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Upload(e) => write!(f, "Failed to upload files: {e}"),
        }
    }
}

impl std::error::Error for PasteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Upload(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Argument errors
// ---------------------------------------------------------------------------

/// Rejected input to a paste session or paste file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The application tag was empty.
    EmptyApplication,

    /// The application tag is not one the paste service accepts.
    UnknownApplication { name: String },

    /// A paste file was given an empty name.
    EmptyFileName,

    /// A paste file was given empty content.
    EmptyContent { name: String },

    /// A file with the same name (ignoring case) is already in the paste.
    DuplicateFile { name: String },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyApplication => write!(f, "paste application cannot be empty"),
            Self::UnknownApplication { name } => write!(f, "Unknown application name: {name}"),
            Self::EmptyFileName => write!(f, "file name cannot be empty"),
            Self::EmptyContent { name } => write!(f, "content of '{name}' cannot be empty"),
            Self::DuplicateFile { name } => write!(f, "Found duplicate file with name {name}"),
        }
    }
}

impl std::error::Error for ArgumentError {}

impl From<ArgumentError> for PasteError {
    fn from(e: ArgumentError) -> Self {
        Self::InvalidArgument(e)
    }
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Errors raised while sending a paste or interpreting the service's reply.
#[derive(Debug)]
pub enum UploadError {
    /// The HTTP client could not be constructed.
    Client { source: reqwest::Error },

    /// Network-level failure (connect, TLS, write, read or deadline).
    Transport { url: String, source: reqwest::Error },

    /// The status line's reason phrase did not signal success.
    Server { code: u16, reason: String },

    /// The service answered but refused the paste.
    Rejected { reason: String },

    /// The response body was not the JSON object the service documents.
    MalformedResponse { detail: String },
}

impl UploadError {
    /// Returns `true` when the transport gave up because a deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { source } => write!(f, "could not build HTTP client: {source}"),
            Self::Transport { url, source } => {
                if source.is_timeout() {
                    write!(f, "request to '{url}' timed out: {source}")
                } else {
                    write!(f, "request to '{url}' failed: {source}")
                }
            }
            Self::Server { code, reason } => write!(f, "Server returned status: {code} {reason}"),
            Self::Rejected { reason } => write!(f, "{reason}"),
            Self::MalformedResponse { detail } => {
                write!(f, "unexpected response from paste service: {detail}")
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<UploadError> for PasteError {
    fn from(e: UploadError) -> Self {
        Self::Upload(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Never fatal: `load_config` turns these into warnings and falls back to
/// defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for debugpaste results.
pub type Result<T> = std::result::Result<T, PasteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_upload_message_carries_reason() {
        let err = PasteError::from(UploadError::Rejected {
            reason: "bad request".to_string(),
        });
        assert_eq!(err.to_string(), "Failed to upload files: bad request");
    }

    #[test]
    fn test_server_error_message() {
        let err = UploadError::Server {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server returned status: 500 Internal Server Error"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;
        let err = PasteError::Io {
            path: PathBuf::from("extra.yml"),
            operation: "read",
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("extra.yml"));
        assert!(err.source().is_some());
    }
}
