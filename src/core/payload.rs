// debugpaste - core/payload.rs
//
// Wire encoding of a paste. The service parses a fixed JSON-like shape and
// is not a general JSON consumer, so the text is built by hand:
//
//   {
//   "paste_application": "<tag>",
//   "files": "<name1>,<name2>",
//   "file-<name1>": "<content1>",
//   "file-<name2>": "<content2>"
//   }
//
// Only `"` inside file content is escaped. Newlines and backslashes pass
// through untouched; the service tolerates this and relies on it.

use crate::core::model::PasteFile;
use std::fmt::Write;

/// Encode `tag` and `files` into the upload body.
pub fn encode(tag: &str, files: &[PasteFile]) -> String {
    let capacity = files
        .iter()
        .map(|f| f.name().len() * 2 + f.content().len() + 16)
        .sum::<usize>()
        + tag.len()
        + 48;
    let mut out = String::with_capacity(capacity);

    out.push_str("{\n");
    let _ = write!(out, "\"paste_application\": \"{tag}\",\n\"files\": \"");
    let names: Vec<&str> = files.iter().map(PasteFile::name).collect();
    out.push_str(&names.join(","));
    out.push_str("\",\n");

    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        let _ = write!(out, "\"file-{}\": \"", file.name());
        push_escaped(&mut out, file.content());
        out.push('"');
    }

    out.push_str("\n}");
    out
}

/// Append `content` with every `"` turned into `\"`.
fn push_escaped(out: &mut String, content: &str) {
    for ch in content.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content: &str) -> PasteFile {
        PasteFile::new(name, content).unwrap()
    }

    #[test]
    fn test_two_file_payload_is_byte_exact() {
        let files = vec![file("a", "hi"), file("b", "a\"b")];
        let expected = "{\n\
\"paste_application\": \"kvantum\",\n\
\"files\": \"a,b\",\n\
\"file-a\": \"hi\",\n\
\"file-b\": \"a\\\"b\"\n\
}";
        assert_eq!(encode("kvantum", &files), expected);
    }

    #[test]
    fn test_only_quotes_are_escaped() {
        let files = vec![file("x.log", "line \"1\"\nback\\slash\ttab\n")];
        let out = encode("plotsquared", &files);
        assert!(out.contains("\"file-x.log\": \"line \\\"1\\\"\nback\\slash\ttab\n\""));
    }

    #[test]
    fn test_empty_file_set() {
        assert_eq!(
            encode("kvantum", &[]),
            "{\n\"paste_application\": \"kvantum\",\n\"files\": \"\",\n\n}"
        );
    }

    #[test]
    fn test_tag_is_written_as_given() {
        let out = encode("KVANTUM", &[file("a", "b")]);
        assert!(out.starts_with("{\n\"paste_application\": \"KVANTUM\",\n"));
    }
}
