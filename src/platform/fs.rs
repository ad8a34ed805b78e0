// debugpaste - platform/fs.rs
//
// Filesystem helpers used when ingesting files into a paste.
// File handles are scoped to each call and closed on every exit path.

use std::io::{self, BufRead};
use std::path::Path;

/// Read every line of a file.
///
/// Invalid UTF-8 is replaced rather than rejected; line terminators
/// (`\n` or `\r\n`) are stripped.
pub fn read_lines_lossy(path: &Path) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

/// Size of a file in bytes, without reading it.
pub fn file_size(path: &Path) -> io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"first\r\nsecond\nthird").unwrap();
        let lines = read_lines_lossy(tmp.path()).unwrap();
        assert_eq!(lines, ["first", "second", "third"]);
    }

    #[test]
    fn test_read_lines_replaces_invalid_utf8() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"ok\n\xff\xfebad\n").unwrap();
        let lines = read_lines_lossy(tmp.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("bad"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines_lossy(&dir.path().join("absent.log")).is_err());
        assert!(file_size(&dir.path().join("absent.log")).is_err());
    }

    #[test]
    fn test_file_size() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"12345").unwrap();
        assert_eq!(file_size(tmp.path()).unwrap(), 5);
    }
}
