// debugpaste - app/upload.rs
//
// HTTP upload of an encoded paste.
//
// One POST per call, no retry. The client carries an explicit total deadline
// and connect deadline so a stalled service can never block the caller
// indefinitely. The body is sent from an owned buffer, so reqwest announces
// its exact byte length with Content-Length (never chunked).
//
// Success is judged by the reason phrase the server put on the status line
// containing "OK", not by the numeric status. That check is isolated in
// `reason_phrase_signals_success` so it can be replaced by a status-class
// check without touching the transport code.

use crate::util::constants::{
    APP_NAME, APP_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_UPLOAD_TIMEOUT_SECS, UPLOAD_URL,
    VIEW_URL_PREFIX,
};
use crate::util::error::UploadError;
use hyper::ext::ReasonPhrase;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Where and how pastes are uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Upload endpoint receiving the POST.
    pub endpoint: String,
    /// Prefix the returned paste id is appended to.
    pub view_url_prefix: String,
    /// Deadline for the whole exchange (connect, write, read).
    pub timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: UPLOAD_URL.to_string(),
            view_url_prefix: VIEW_URL_PREFIX.to_string(),
            timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Blocking client for the paste service's upload endpoint.
pub struct UploadClient {
    http: Client,
    endpoint: String,
}

impl UploadClient {
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("{APP_NAME}/{APP_VERSION}"))
            .build()
            .map_err(|source| UploadError::Client { source })?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// POST `payload` and return the raw response body, one `\n` after each
    /// line.
    pub fn upload(&self, payload: &str) -> Result<String, UploadError> {
        let body = payload.as_bytes().to_vec();
        tracing::info!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            "Uploading paste"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "*/*")
            .body(body)
            .send()
            .map_err(|source| self.transport(source))?;

        let code = response.status().as_u16();
        let reason = reason_phrase(&response);
        tracing::debug!(code, reason = %reason, "Paste service responded");

        if !reason_phrase_signals_success(&reason) {
            return Err(UploadError::Server { code, reason });
        }

        let text = response.text().map_err(|source| self.transport(source))?;
        Ok(terminate_lines(&text))
    }

    fn transport(&self, source: reqwest::Error) -> UploadError {
        tracing::warn!(endpoint = %self.endpoint, error = %source, "Upload transport failure");
        UploadError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }
}

/// Reason phrase from the response's status line.
///
/// hyper keeps a phrase only when it differs from the registered text for the
/// code; otherwise the registered text is what the server sent (empty for
/// unregistered codes).
fn reason_phrase(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Whether a status line's reason phrase counts as success.
///
/// Matches any phrase containing "OK", which is how the service has always
/// been checked. A 201 "Created" therefore counts as a failure.
pub fn reason_phrase_signals_success(reason: &str) -> bool {
    reason.contains("OK")
}

fn terminate_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_phrase_predicate() {
        assert!(reason_phrase_signals_success("OK"));
        assert!(reason_phrase_signals_success("Upload OK"));
        assert!(!reason_phrase_signals_success("Created"));
        assert!(!reason_phrase_signals_success("ok"));
        assert!(!reason_phrase_signals_success(""));
    }

    #[test]
    fn test_terminate_lines() {
        assert_eq!(terminate_lines("{\"a\":1}"), "{\"a\":1}\n");
        assert_eq!(terminate_lines("a\r\nb\n"), "a\nb\n");
        assert_eq!(terminate_lines(""), "");
    }

    #[test]
    fn test_default_config_targets_service() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, UPLOAD_URL);
        assert_eq!(config.view_url_prefix, VIEW_URL_PREFIX);
        assert!(config.timeout >= config.connect_timeout);
    }
}
