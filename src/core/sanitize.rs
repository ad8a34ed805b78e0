// debugpaste - core/sanitize.rs
//
// Log tail extraction and IPv4 redaction.
//
// Every ingested text file is cut down to its last N lines before upload and,
// for log-like files, dotted-quad addresses are replaced by `*` so shared
// pastes do not leak network topology.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Replacement written in place of each redacted address.
const REDACTION: &str = "*";

/// Dotted-quad IPv4 pattern. Each octet is matched by shape only
/// (0-199 via `1?[0-9]{1,2}`, 200-249, 250-255); no numeric parsing.
const IPV4_PATTERN: &str = r"\b(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])\b";

fn ipv4_regex() -> &'static Regex {
    static IPV4: OnceLock<Regex> = OnceLock::new();
    IPV4.get_or_init(|| Regex::new(IPV4_PATTERN).expect("ipv4_regex: invalid regex"))
}

/// Keep the last `max_lines` of `lines`, each followed by `\n`, and
/// optionally redact IPv4 addresses.
pub fn extract_tail<I, S>(lines: I, max_lines: usize, redact_ips: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let start = lines.len().saturating_sub(max_lines);

    let mut tail = String::new();
    for line in &lines[start..] {
        tail.push_str(line.as_ref());
        tail.push('\n');
    }

    tracing::trace!(
        total = lines.len(),
        kept = lines.len() - start,
        redact_ips,
        "Extracted tail"
    );

    if redact_ips {
        redact_ipv4(&tail)
    } else {
        tail
    }
}

/// Replace every dotted-quad IPv4 address in `text` with `*`.
pub fn redact_ipv4(text: &str) -> String {
    ipv4_regex().replace_all(text, REDACTION).into_owned()
}

/// Whether a file called `name` should have addresses redacted.
///
/// Applies to `.log` and `.txt` files and to names without any dot; other
/// extensions are assumed to be structured data.
pub fn should_redact(name: &str) -> bool {
    name.ends_with(".log") || name.ends_with(".txt") || !name.contains('.')
}

/// Paste name for `path`: its final component, lossily decoded.
pub fn default_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
