// debugpaste - app/bundle.rs
//
// Debug bundle assembly and submission.
//
// A bundle is a paste for the `fastasyncworldedit` application holding, in
// order:
//   1. `information` - fixed header, caller-supplied summary, fixed footer.
//   2. `latest.log`  - tail of the primary log, addresses redacted. Skipped
//                      when the log cannot be read; replaced by a placeholder
//                      when it exceeds the size cap.
//   3. extra files   - tail of each, redacted per file name.
//
// Only the primary log tolerates read failures. Everything else (unreadable
// extra files, duplicate names, empty content, upload errors) aborts the
// build.

use crate::app::upload::{UploadClient, UploadConfig};
use crate::core::model::{Application, PasteFile};
use crate::core::paster::Paster;
use crate::core::sanitize;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants::{
    DEFAULT_TAIL_LINES, INFORMATION_FILE_NAME, INFORMATION_FOOTER, INFORMATION_HEADER,
    INFORMATION_SUMMARY_HEADING, MAX_PRIMARY_LOG_BYTES, PRIMARY_LOG_NAME, PRIMARY_LOG_TOO_LARGE,
};
use crate::util::error::{PasteError, Result, UploadError};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Limits and upload target for a bundle.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub upload: UploadConfig,
    /// Trailing lines kept from each ingested file.
    pub tail_lines: usize,
    /// Primary logs above this size are replaced by a placeholder.
    pub max_log_bytes: u64,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            upload: UploadConfig::default(),
            tail_lines: DEFAULT_TAIL_LINES,
            max_log_bytes: MAX_PRIMARY_LOG_BYTES,
        }
    }
}

impl From<&AppConfig> for BundleConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            upload: UploadConfig {
                endpoint: config.endpoint.clone(),
                view_url_prefix: config.view_url_prefix.clone(),
                timeout: config.timeout,
                connect_timeout: config.connect_timeout,
            },
            tail_lines: config.tail_lines,
            max_log_bytes: config.max_log_bytes,
        }
    }
}

/// A file from disk to include alongside the primary log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraFile {
    pub path: PathBuf,
    /// Paste name; the file's base name when `None`.
    pub name: Option<String>,
}

impl ExtraFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }

    pub fn named(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
        }
    }
}

/// Outcome of reading the primary log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryLog {
    /// Redacted tail of the log.
    Tail(String),
    /// The log exceeded the size cap and was not read.
    TooLarge { size: u64 },
    /// The log could not be read; the bundle goes ahead without it.
    Unavailable,
}

impl PrimaryLog {
    /// Content to add under `latest.log`, if any.
    pub fn into_content(self) -> Option<String> {
        match self {
            PrimaryLog::Tail(content) => Some(content),
            PrimaryLog::TooLarge { .. } => Some(PRIMARY_LOG_TOO_LARGE.to_string()),
            PrimaryLog::Unavailable => None,
        }
    }
}

/// Builds debug bundles and uploads them.
pub struct DebugBundleBuilder {
    config: BundleConfig,
}

impl DebugBundleBuilder {
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Assemble the bundle without uploading it.
    pub fn assemble(
        &self,
        primary_log: &Path,
        summary: Option<&str>,
        extra_files: &[ExtraFile],
    ) -> Result<Paster> {
        let mut paster = Paster::for_application(Application::FastAsyncWorldEdit);
        paster.add_file(information_file(summary)?)?;

        let log = read_primary_log(primary_log, self.config.tail_lines, self.config.max_log_bytes);
        if let Some(content) = log.into_content() {
            paster.add_file(PasteFile::new(PRIMARY_LOG_NAME, content)?)?;
        }

        for extra in extra_files {
            let file = read_paste_file(&extra.path, extra.name.as_deref(), self.config.tail_lines)?;
            paster.add_file(file)?;
        }

        tracing::info!(
            files = paster.files().len(),
            application = paster.tag(),
            "Debug bundle assembled"
        );
        Ok(paster)
    }

    /// Assemble the bundle, upload it, and return the paste's view URL.
    pub fn build_and_upload(
        &self,
        primary_log: &Path,
        summary: Option<&str>,
        extra_files: &[ExtraFile],
    ) -> Result<String> {
        let paster = self.assemble(primary_log, summary, extra_files)?;
        let client = UploadClient::new(&self.config.upload)?;
        submit(&paster, &client, &self.config.upload.view_url_prefix)
    }
}

/// The `information` file leading every bundle.
pub fn information_file(summary: Option<&str>) -> Result<PasteFile> {
    let summary = summary.unwrap_or_default();
    let mut content = String::with_capacity(
        INFORMATION_HEADER.len()
            + INFORMATION_SUMMARY_HEADING.len()
            + summary.len()
            + INFORMATION_FOOTER.len()
            + 1,
    );
    content.push_str(INFORMATION_HEADER);
    content.push_str(INFORMATION_SUMMARY_HEADING);
    content.push_str(summary);
    content.push('\n');
    content.push_str(INFORMATION_FOOTER);
    Ok(PasteFile::new(INFORMATION_FILE_NAME, content)?)
}

/// Read the primary log, capping its size and swallowing I/O failures.
pub fn read_primary_log(path: &Path, tail_lines: usize, max_bytes: u64) -> PrimaryLog {
    let size = match fs::file_size(path) {
        Ok(size) => size,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Primary log unavailable; skipping");
            return PrimaryLog::Unavailable;
        }
    };

    if size > max_bytes {
        tracing::warn!(
            path = %path.display(),
            size,
            max = max_bytes,
            "Primary log too large; uploading placeholder"
        );
        return PrimaryLog::TooLarge { size };
    }

    match fs::read_lines_lossy(path) {
        Ok(lines) => PrimaryLog::Tail(sanitize::extract_tail(lines, tail_lines, true)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Primary log unreadable; skipping");
            PrimaryLog::Unavailable
        }
    }
}

/// Read `path` into a paste file named `name` (or the file's base name).
///
/// The tail is redacted when the name looks like a log or plain text file.
pub fn read_paste_file(path: &Path, name: Option<&str>, tail_lines: usize) -> Result<PasteFile> {
    let name = match name {
        Some(name) => name.to_string(),
        None => sanitize::default_name(path),
    };
    let redact = sanitize::should_redact(&name);

    let lines = fs::read_lines_lossy(path).map_err(|source| PasteError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        name = %name,
        lines = lines.len(),
        redact,
        "Read extra file"
    );

    let content = sanitize::extract_tail(lines, tail_lines, redact);
    Ok(PasteFile::new(name, content)?)
}

/// Encode and upload `paster`, returning the paste's view URL.
pub fn submit(paster: &Paster, client: &UploadClient, view_url_prefix: &str) -> Result<String> {
    let payload = paster.to_payload();
    let raw = client.upload(&payload)?;
    let url = interpret_response(&raw, view_url_prefix)?;
    tracing::info!(url = %url, "Paste created");
    Ok(url)
}

/// Turn the service's response body into a view URL.
///
/// A body with a `created` field carries the new `paste_id`; any other body
/// is a refusal whose `response` field explains why.
pub fn interpret_response(raw: &str, view_url_prefix: &str) -> std::result::Result<String, UploadError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| UploadError::MalformedResponse {
        detail: e.to_string(),
    })?;
    let object = value.as_object().ok_or_else(|| UploadError::MalformedResponse {
        detail: "response is not a JSON object".to_string(),
    })?;

    if object.contains_key("created") {
        let paste_id = match object.get("paste_id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(UploadError::MalformedResponse {
                    detail: "created paste has no 'paste_id'".to_string(),
                })
            }
        };
        return Ok(format!("{view_url_prefix}{paste_id}"));
    }

    let reason = match object.get("response") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "no reason given".to_string(),
    };
    tracing::warn!(reason = %reason, "Paste service refused upload");
    Err(UploadError::Rejected { reason })
}
