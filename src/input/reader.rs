use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::workspace::Workspace;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Loads a workspace from a file or stdin.
pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when `None`.
    ///
    /// Stdin input has no file name; the endpoint sees the default one.
    pub fn read(file_path: Option<&str>) -> Result<Workspace> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<Workspace> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Workspace::load(file_name, metadata.len(), content))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<Workspace> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        let content = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        Ok(Workspace::from_text("", content))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file_builds_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");
        fs::write(&file_path, "Hello\r\nWorld").unwrap();

        let ws = InputReader::read(Some(file_path.to_str().unwrap())).unwrap();

        assert_eq!(ws.file_name(), "notes.txt");
        assert_eq!(ws.file_size_bytes(), 12);
        assert_eq!(ws.raw_content(), "Hello\r\nWorld");
        assert_eq!(ws.lines(), ["Hello", "World"]);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Some("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "Merhaba dünya\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let ws = InputReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(ws.lines(), ["Merhaba dünya", "日本語テスト"]);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let ws = InputReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert!(ws.is_blank());
        assert_eq!(ws.lines(), [""]);
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");

        let large_content = "x".repeat(MAX_INPUT_SIZE + 1);
        fs::write(&file_path, &large_content).unwrap();

        let result = InputReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");

        let content = "x".repeat(MAX_INPUT_SIZE);
        fs::write(&file_path, &content).unwrap();

        let ws = InputReader::read(Some(file_path.to_str().unwrap())).unwrap();
        assert_eq!(ws.raw_content().len(), MAX_INPUT_SIZE);
    }
}
