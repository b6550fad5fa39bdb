use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{HookError, LogWriteError};

pub const ENTRY_SEPARATOR: &str = "\n---\n";

/// Pretty-printed JSON followed by the separator line.
pub fn render_entry<T: Serialize>(entry: &T) -> Result<String, serde_json::Error> {
    let mut block = serde_json::to_string_pretty(entry)?;
    block.push_str(ENTRY_SEPARATOR);
    Ok(block)
}

/// Appends one entry as a single write. The parent directory must exist.
pub fn append_entry<T: Serialize>(path: &Path, entry: &T) -> Result<usize, HookError> {
    let wrap = |source: LogWriteError| HookError::LogWrite {
        path: path.to_path_buf(),
        source,
    };

    let block = render_entry(entry).map_err(|e| wrap(e.into()))?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| wrap(e.into()))?;
    file.write_all(block.as_bytes()).map_err(|e| wrap(e.into()))?;

    tracing::info!(
        target: "bash_hooks.log_writer",
        path = %path.display(),
        bytes = block.len(),
        "log entry appended"
    );
    Ok(block.len())
}

/// Splits log text back into its JSON segments.
pub fn split_log(text: &str) -> impl Iterator<Item = &str> {
    text.split(ENTRY_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn render_uses_two_space_indent_and_separator() {
        let block = render_entry(&json!({"a": 1})).unwrap();
        assert_eq!(block, "{\n  \"a\": 1\n}\n---\n");
    }

    #[test]
    fn append_creates_file_and_accumulates_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bash-all.log");

        append_entry(&path, &json!({"n": 1})).unwrap();
        append_entry(&path, &json!({"n": 2, "s": "a\n---\nb"})).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<Value> = split_log(&text)
            .map(|seg| serde_json::from_str(seg).unwrap())
            .collect();
        assert_eq!(entries, vec![json!({"n": 1}), json!({"n": 2, "s": "a\n---\nb"})]);
    }

    #[test]
    fn missing_parent_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("bash-all.log");

        let err = append_entry(&path, &json!({})).unwrap_err();
        assert!(matches!(err, HookError::LogWrite { .. }));
        assert!(err.to_string().starts_with("Error writing to log: "));
        assert!(!path.exists());
    }
}
