//! Row-level view model over a workspace and its translation job.
//!
//! Alignment between original and translated lines is purely positional:
//! row `i` pairs original line `i` with translated line `i`.

mod render;

pub use render::{RenderOptions, render, translated_text};

use std::fmt;
use std::str::FromStr;

use crate::job::TranslationJob;

/// Which side of the translation to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    Original,
    Translated,
    Diff,
}

impl Projection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Translated => "translated",
            Self::Diff => "diff",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "translated" => Ok(Self::Translated),
            "diff" => Ok(Self::Diff),
            other => Err(format!(
                "Invalid view: '{other}' (expected 'original', 'translated' or 'diff')"
            )),
        }
    }
}

/// One renderable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub index: usize,
    /// `None` for rows past the end of the original, when a whole-file
    /// translation came back longer.
    pub original_text: Option<&'a str>,
    /// `None` until line `index` has been translated.
    pub translated_text: Option<&'a str>,
    pub is_active: bool,
    pub is_changed: bool,
}

impl<'a> Row<'a> {
    /// The text this row shows under `projection`.
    ///
    /// In the diff projection this is the new side; the old side is
    /// `original_text`.
    pub fn display_text(&self, projection: Projection) -> &'a str {
        match projection {
            Projection::Original => self.original_text.unwrap_or_default(),
            Projection::Translated | Projection::Diff => self
                .translated_text
                .or(self.original_text)
                .unwrap_or_default(),
        }
    }
}

/// Builds the rows for `projection`.
///
/// The original projection has exactly one row per original line. The
/// translated and diff projections extend to the longer of the two line
/// lists so nothing translated is hidden.
pub fn project<'a>(
    lines: &'a [String],
    job: &'a TranslationJob,
    projection: Projection,
) -> Vec<Row<'a>> {
    let translated = &job.translated_lines;
    let row_count = match projection {
        Projection::Original => lines.len(),
        Projection::Translated | Projection::Diff => lines.len().max(translated.len()),
    };
    let active = job
        .current_index
        .filter(|_| job.is_running());

    (0..row_count)
        .map(|index| {
            let original_text = lines.get(index).map(String::as_str);
            let translated_text = translated.get(index).map(String::as_str);
            Row {
                index,
                original_text,
                translated_text,
                is_active: active == Some(index),
                is_changed: original_text != translated_text.or(original_text),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobStatus;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn job(status: JobStatus, translated: &[&str], current: Option<usize>) -> TranslationJob {
        TranslationJob {
            status,
            translated_lines: lines(translated),
            current_index: current,
            ..TranslationJob::default()
        }
    }

    #[test]
    fn test_original_projection_ignores_translation() {
        let original = lines(&["Hello", "World"]);
        let job = job(JobStatus::Complete, &["Merhaba", "Dünya", "extra"], None);

        let rows = project(&original, &job, Projection::Original);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_text(Projection::Original), "Hello");
        assert_eq!(rows[1].display_text(Projection::Original), "World");
    }

    #[test]
    fn test_translated_projection_falls_back_for_pending_lines() {
        let original = lines(&["Hello", "World", "Again"]);
        let job = job(JobStatus::Running, &["Merhaba"], Some(1));

        let rows = project(&original, &job, Projection::Translated);
        let shown: Vec<_> = rows
            .iter()
            .map(|r| r.display_text(Projection::Translated))
            .collect();

        assert_eq!(shown, ["Merhaba", "World", "Again"]);
        assert!(rows[0].is_changed);
        assert!(!rows[1].is_changed);
        assert!(!rows[2].is_changed);
    }

    #[test]
    fn test_diff_identical_content_has_no_changes() {
        let original = lines(&["a", "", "c"]);
        let job = job(JobStatus::Complete, &["a", "", "c"], None);

        let rows = project(&original, &job, Projection::Diff);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| !r.is_changed));
    }

    #[test]
    fn test_diff_is_positional() {
        // A shifted line is reported as changed rows, not as an insertion.
        let original = lines(&["a", "b"]);
        let job = job(JobStatus::Complete, &["x", "a"], None);

        let rows = project(&original, &job, Projection::Diff);

        assert!(rows[0].is_changed);
        assert!(rows[1].is_changed);
    }

    #[test]
    fn test_longer_translation_adds_rows() {
        let original = lines(&["one", "two"]);
        let job = job(JobStatus::Complete, &["A", "B", "C"], None);

        let rows = project(&original, &job, Projection::Diff);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].original_text, None);
        assert_eq!(rows[2].translated_text, Some("C"));
        assert!(rows[2].is_changed);
    }

    #[test]
    fn test_shorter_translation_keeps_original_rows() {
        let original = lines(&["one", "two", "three"]);
        let job = job(JobStatus::Complete, &["uno"], None);

        let rows = project(&original, &job, Projection::Translated);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].display_text(Projection::Translated), "three");
        assert!(!rows[2].is_changed);
    }

    #[test]
    fn test_active_only_while_running() {
        let original = lines(&["a", "b"]);

        let running = job(JobStatus::Running, &["x"], Some(1));
        let rows = project(&original, &running, Projection::Original);
        assert!(!rows[0].is_active);
        assert!(rows[1].is_active);

        let cancelled = job(JobStatus::Cancelled, &["x"], Some(1));
        let rows = project(&original, &cancelled, Projection::Original);
        assert!(rows.iter().all(|r| !r.is_active));
    }

    #[test]
    fn test_projection_parse() {
        assert_eq!("diff".parse::<Projection>(), Ok(Projection::Diff));
        assert_eq!("translated".parse::<Projection>(), Ok(Projection::Translated));
        assert!("Diff".parse::<Projection>().is_err());
    }
}
