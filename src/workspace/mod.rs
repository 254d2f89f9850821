//! The loaded file and its lines.

mod split;

pub use split::{is_blank, split_lines};

/// File name sent to the endpoint when the workspace has none.
pub const DEFAULT_FILE_NAME: &str = "untitled.txt";

/// A loaded text file split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    file_name: String,
    file_size_bytes: u64,
    raw_content: String,
    lines: Vec<String>,
}

impl Workspace {
    /// Creates a workspace from file contents, deriving the lines.
    pub fn load(
        file_name: impl Into<String>,
        file_size_bytes: u64,
        raw_content: impl Into<String>,
    ) -> Self {
        let raw_content = raw_content.into();
        let lines = split_lines(&raw_content);
        Self {
            file_name: file_name.into(),
            file_size_bytes,
            raw_content,
            lines,
        }
    }

    /// Creates a workspace from in-memory text, using its byte length as the size.
    pub fn from_text(file_name: impl Into<String>, raw_content: impl Into<String>) -> Self {
        let raw_content = raw_content.into();
        let size = raw_content.len() as u64;
        Self::load(file_name, size, raw_content)
    }

    /// Resets to the empty workspace. Unlike loading `""`, this leaves no lines at all.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file name to report to the endpoint.
    pub fn display_name(&self) -> &str {
        if self.file_name.is_empty() {
            DEFAULT_FILE_NAME
        } else {
            &self.file_name
        }
    }

    pub const fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if there is nothing worth translating.
    pub fn is_blank(&self) -> bool {
        self.raw_content.trim().is_empty()
    }
}

/// Formats a byte count as `B`, `KB` or `MB` with one decimal.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_derives_lines() {
        let ws = Workspace::load("notes.txt", 11, "Hello\nWorld");
        assert_eq!(ws.file_name(), "notes.txt");
        assert_eq!(ws.file_size_bytes(), 11);
        assert_eq!(ws.lines(), ["Hello", "World"]);
    }

    #[test]
    fn test_load_empty_content_has_single_empty_line() {
        let ws = Workspace::from_text("empty.txt", "");
        assert_eq!(ws.lines(), [""]);
        assert!(ws.is_blank());
    }

    #[test]
    fn test_clear_leaves_no_lines() {
        let mut ws = Workspace::from_text("a.txt", "one\ntwo");
        ws.clear();
        assert!(ws.lines().is_empty());
        assert!(ws.file_name().is_empty());
        assert_eq!(ws.file_size_bytes(), 0);
    }

    #[test]
    fn test_display_name_defaults() {
        let ws = Workspace::from_text("", "x");
        assert_eq!(ws.display_name(), DEFAULT_FILE_NAME);

        let ws = Workspace::from_text("readme.md", "x");
        assert_eq!(ws.display_name(), "readme.md");
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(Workspace::from_text("a", " \n\t\n").is_blank());
        assert!(!Workspace::from_text("a", "\n x \n").is_blank());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}
