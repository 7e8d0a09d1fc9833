//! The append-only `KEY=value` file GitHub Actions uses to pass variables
//! from one step to the next.
//!
//! Every line appended here becomes an environment variable in the steps
//! that follow. Nothing is ever rewritten; when a key appears more than once
//! the last line wins.

mod error;

pub use error::GithubEnvError;

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to a CI environment file.
#[derive(Debug, Clone)]
pub struct GithubEnv {
    path: PathBuf,
}

impl GithubEnv {
    /// Creates a handle for the file at `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one `KEY=value` line per entry.
    ///
    /// All entries are validated before anything is written, so a rejected
    /// entry leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GithubEnvError`] if an entry is malformed or the file cannot be written.
    pub fn append(&self, entries: &[(&str, &str)]) -> Result<(), GithubEnvError> {
        for (key, value) in entries {
            if key.is_empty()
                || key.contains(['=', '\n', '\r'])
                || value.contains(['\n', '\r'])
            {
                return Err(GithubEnvError::InvalidEntry {
                    key: (*key).to_string(),
                });
            }
        }

        let mut buffer = String::new();
        for (key, value) in entries {
            buffer.push_str(key);
            buffer.push('=');
            buffer.push_str(value);
            buffer.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(buffer.as_bytes())
            .map_err(|e| self.io_error(e))?;

        for (key, value) in entries {
            debug!(path = %self.path.display(), key, value, "Exported variable");
        }
        Ok(())
    }

    /// Reads the file back, resolving duplicates so the last line wins.
    ///
    /// Multi-line `KEY<<DELIMITER` blocks written by other steps are
    /// understood. Lines that are neither form are skipped. A file that does
    /// not exist yet reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`GithubEnvError::IoError`] if the file exists but cannot be read.
    pub fn load(&self) -> Result<BTreeMap<String, String>, GithubEnvError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(parse_entries(&content))
    }

    fn io_error(&self, source: std::io::Error) -> GithubEnvError {
        GithubEnvError::IoError {
            path: self.path.display().to_string(),
            source,
        }
    }
}

fn parse_entries(content: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let heredoc = line
            .split_once("<<")
            .filter(|(key, delimiter)| !key.contains('=') && !delimiter.is_empty());
        if let Some((key, delimiter)) = heredoc {
            let mut value = Vec::new();
            for body_line in lines.by_ref() {
                if body_line == delimiter {
                    break;
                }
                value.push(body_line);
            }
            entries.insert(key.to_string(), value.join("\n"));
        } else if let Some((key, value)) = line.split_once('=') {
            if !key.is_empty() {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_writes_key_value_lines() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("env.txt"));

        env.append(&[("PROJECT_KEY", "PROJ"), ("ISSUE_KEY", "PROJ-42")])
            .unwrap();
        env.append(&[("BUG_KEY", "PROJ-77")]).unwrap();

        let content = std::fs::read_to_string(env.path()).unwrap();
        assert_eq!(
            content,
            "PROJECT_KEY=PROJ\nISSUE_KEY=PROJ-42\nBUG_KEY=PROJ-77\n"
        );
    }

    #[test]
    fn append_preserves_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.txt");
        std::fs::write(&path, "EXISTING=1\n").unwrap();

        GithubEnv::new(&path).append(&[("NEW", "2")]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "EXISTING=1\nNEW=2\n");
    }

    #[test]
    fn append_rejects_multiline_values_without_writing() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("env.txt"));

        let result = env.append(&[("GOOD", "1"), ("BAD", "a\nb")]);

        assert!(matches!(result, Err(GithubEnvError::InvalidEntry { ref key }) if key == "BAD"));
        assert!(!env.path().exists());
    }

    #[test]
    fn load_lets_later_lines_shadow_earlier_ones() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("env.txt"));
        env.append(&[("BUG_KEY", "PROJ-1")]).unwrap();
        env.append(&[("BUG_KEY", "PROJ-2")]).unwrap();

        let entries = env.load().unwrap();
        assert_eq!(entries.get("BUG_KEY").map(String::as_str), Some("PROJ-2"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("missing.txt"));
        assert!(env.load().unwrap().is_empty());
    }

    #[test]
    fn parses_heredoc_blocks() {
        let entries = parse_entries("NOTES<<EOF\nline one\nline two\nEOF\nKEY=a=b\n");

        assert_eq!(entries["NOTES"], "line one\nline two");
        assert_eq!(entries["KEY"], "a=b");
    }

    #[test]
    fn skips_heredoc_without_delimiter() {
        let entries = parse_entries("NOTES<<
FIRST=1

SECOND=2
");

        assert!(!entries.contains_key("NOTES"));
        assert_eq!(entries["FIRST"], "1");
        assert_eq!(entries["SECOND"], "2");
    }

    #[test]
    fn append_rejects_carriage_return_in_key() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("env.txt"));

        let result = env.append(&[("BUG\rKEY", "PROJ-1")]);

        assert!(matches!(result, Err(GithubEnvError::InvalidEntry { .. })));
        assert!(!env.path().exists());
    }
}
