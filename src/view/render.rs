//! Plain-text rendering of projected rows.

use std::fmt::Write;

use super::{Projection, Row};
use crate::job::TranslationJob;
use crate::ui::Style;

/// Rendering switches chosen by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub color: bool,
}

/// Renders rows as lines of text, one per row (two per changed diff row).
pub fn render(rows: &[Row<'_>], projection: Projection, options: RenderOptions) -> String {
    let width = rows.len().to_string().len();
    let mut out = String::new();

    for row in rows {
        let number = options
            .line_numbers
            .then(|| format!("{:>width$} ", row.index + 1));
        let gutter = number.as_deref().unwrap_or("");

        if projection == Projection::Diff {
            render_diff_row(&mut out, row, gutter, options.color);
            continue;
        }

        let text = row.display_text(projection);
        let text = if options.color && row.is_active {
            Style::value(text)
        } else if options.color && projection == Projection::Translated && row.is_changed {
            Style::success(text)
        } else {
            text.to_string()
        };
        let _ = writeln!(out, "{}{text}", paint(gutter, options.color));
    }

    out
}

fn render_diff_row(out: &mut String, row: &Row<'_>, gutter: &str, color: bool) {
    let gutter = paint(gutter, color);

    if !row.is_changed {
        let _ = writeln!(out, "{gutter}  {}", row.display_text(Projection::Diff));
        return;
    }

    if let Some(old) = row.original_text {
        let line = format!("- {old}");
        let _ = writeln!(out, "{gutter}{}", if color { Style::error(line) } else { line });
    }
    let line = format!("+ {}", row.display_text(Projection::Diff));
    let _ = writeln!(out, "{gutter}{}", if color { Style::success(line) } else { line });
}

fn paint(gutter: &str, color: bool) -> String {
    if color && !gutter.is_empty() {
        Style::secondary(gutter)
    } else {
        gutter.to_string()
    }
}

/// The translated lines joined with `\n`, as written to an output file.
pub fn translated_text(job: &TranslationJob) -> String {
    job.translated_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobStatus;
    use crate::view::project;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn complete(translated: &[&str]) -> TranslationJob {
        TranslationJob {
            status: JobStatus::Complete,
            translated_lines: strings(translated),
            ..TranslationJob::default()
        }
    }

    #[test]
    fn test_render_translated_plain() {
        let original = strings(&["Hello", "", "World"]);
        let job = complete(&["Merhaba", "", "Dünya"]);
        let rows = project(&original, &job, Projection::Translated);

        let out = render(&rows, Projection::Translated, RenderOptions::default());

        assert_eq!(out, "Merhaba\n\nDünya\n");
    }

    #[test]
    fn test_render_line_numbers_are_aligned() {
        let original: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let job = TranslationJob::default();
        let rows = project(&original, &job, Projection::Original);

        let out = render(
            &rows,
            Projection::Original,
            RenderOptions {
                line_numbers: true,
                color: false,
            },
        );

        assert!(out.starts_with(" 1 1\n"));
        assert!(out.ends_with("10 10\n"));
    }

    #[test]
    fn test_render_diff_pairs() {
        let original = strings(&["same", "Hello"]);
        let job = complete(&["same", "Merhaba", "extra"]);
        let rows = project(&original, &job, Projection::Diff);

        let out = render(&rows, Projection::Diff, RenderOptions::default());

        assert_eq!(out, "  same\n- Hello\n+ Merhaba\n+ extra\n");
    }

    #[test]
    fn test_translated_text_joins_lines() {
        let job = complete(&["A", "", "C"]);
        assert_eq!(translated_text(&job), "A\n\nC");
    }
}
