//! Reads the trailing window of the content log.

use std::path::Path;

use crate::error::ContentLogError;

/// Number of trailing lines examined per poll.
pub const DEFAULT_WINDOW: usize = 100;

/// Returns the last `window` lines of the log at `path`, oldest first.
///
/// Invalid UTF-8 is replaced rather than rejected; the client occasionally
/// writes non-UTF-8 bytes (localized paths) into this file.
pub fn read_log_tail(path: &Path, window: usize) -> Result<Vec<String>, ContentLogError> {
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ContentLogError::NotFound(path.to_path_buf())
        } else {
            ContentLogError::Io(e)
        }
    })?;

    let text = String::from_utf8_lossy(&data);
    Ok(last_lines(&text, window))
}

fn last_lines(text: &str, window: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(window);
    lines[start..].iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_lines_keeps_order() {
        let text = "a\nb\nc\nd\n";
        assert_eq!(last_lines(text, 2), vec!["c", "d"]);
    }

    #[test]
    fn last_lines_window_larger_than_file() {
        assert_eq!(last_lines("a\r\nb", 100), vec!["a", "b"]);
    }

    #[test]
    fn last_lines_zero_window() {
        assert!(last_lines("a\nb\n", 0).is_empty());
    }

    #[test]
    fn read_tail_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content_log.txt");
        let content: String = (1..=150).map(|i| format!("line {i}\n")).collect();
        std::fs::write(&path, content).unwrap();

        let lines = read_log_tail(&path, DEFAULT_WINDOW).unwrap();
        assert_eq!(lines.len(), 100);
        assert_eq!(lines[0], "line 51");
        assert_eq!(lines[99], "line 150");
    }

    #[test]
    fn read_tail_tolerates_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content_log.txt");
        std::fs::write(&path, b"ok\nbad \xff\xfe bytes\nlast\n").unwrap();

        let lines = read_log_tail(&path, 10).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("bad "));
        assert_eq!(lines[2], "last");
    }

    #[test]
    fn read_tail_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_log_tail(&tmp.path().join("missing.txt"), 10).unwrap_err();
        assert!(matches!(err, ContentLogError::NotFound(_)));
    }
}
