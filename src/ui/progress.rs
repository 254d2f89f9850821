use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::job::TranslationJob;

/// Terminal progress for a running job.
///
/// Per-line jobs get a bar counting resolved lines; whole-file jobs get a
/// spinner. Clears itself when dropped.
pub struct JobProgress {
    progress_bar: ProgressBar,
}

impl JobProgress {
    /// A bar for `total_lines` per-line requests.
    #[allow(clippy::unwrap_used)]
    pub fn lines(total_lines: usize) -> Self {
        let progress_bar = ProgressBar::new(total_lines as u64);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} Translating… ({pos}/{len}) [{bar:30}] {msg}")
                .unwrap()
                .progress_chars("=> "),
        );
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// A spinner for a single whole-file request.
    #[allow(clippy::unwrap_used)]
    pub fn spinner(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// A progress display that draws nothing.
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    /// Moves the display to match a published snapshot.
    pub fn update(&self, job: &TranslationJob, lines: &[String]) {
        self.progress_bar
            .set_position(job.translated_lines.len() as u64);

        if let Some(line) = job.current_index.and_then(|i| lines.get(i)) {
            self.progress_bar.set_message(preview(line));
        }
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for JobProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

const PREVIEW_CHARS: usize = 40;

/// Shortens a line for the progress message.
fn preview(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(PREVIEW_CHARS - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_line_is_trimmed() {
        assert_eq!(preview("  hello  "), "hello");
    }

    #[test]
    fn test_preview_long_line_is_cut_on_char_boundary() {
        let line = "ü".repeat(100);
        let shown = preview(&line);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_hidden_progress_accepts_updates() {
        let progress = JobProgress::hidden();
        let job = TranslationJob {
            translated_lines: vec!["a".to_string()],
            current_index: Some(1),
            ..TranslationJob::default()
        };
        progress.update(&job, &["a".to_string(), "b".to_string()]);
        progress.finish();
    }
}
