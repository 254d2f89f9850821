use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::config::{ConfigManager, ResolveOptions, resolve_settings};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::job::{JobControl, JobStatus, TranslationJob};
use crate::translation::{Mode, TranslationSettings};
use crate::ui::{JobProgress, Style};
use crate::view::{Projection, RenderOptions, project, render, translated_text};
use crate::workspace::{Workspace, format_file_size};
use crate::{output, status, warning};

/// Exit code for a run stopped with Ctrl+C (128 + SIGINT).
pub const EXIT_CANCELLED: exitcode::ExitCode = 130;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub mode: Option<Mode>,
    pub endpoint: Option<String>,
    pub view: Option<Projection>,
    pub line_numbers: bool,
    pub output: Option<String>,
}

/// Loads the file, runs one job and prints the result.
///
/// Returns the process exit code: success, [`EXIT_CANCELLED`], or
/// `UNAVAILABLE` when the job failed.
pub async fn run_translate(options: TranslateOptions) -> Result<exitcode::ExitCode> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let settings = resolve_settings(
        &ResolveOptions {
            from: options.from.clone(),
            to: options.to.clone(),
            mode: options.mode,
            endpoint: options.endpoint.clone(),
        },
        &config_file,
    )?;

    let workspace = Arc::new(InputReader::read(options.file.as_deref())?);
    print_summary(&workspace, &settings);

    let mut control = JobControl::default();
    let handle = control.start(settings.clone(), Arc::clone(&workspace))?;

    let progress = if output::show_progress() {
        match settings.mode {
            Mode::PerLine => JobProgress::lines(workspace.lines().len()),
            Mode::WholeFile => JobProgress::spinner("Translating whole file…"),
        }
    } else {
        JobProgress::hidden()
    };

    let token = handle.cancellation_token();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let mut updates = handle.subscribe();
    while updates.changed().await.is_ok() {
        progress.update(&updates.borrow_and_update(), workspace.lines());
    }
    ctrl_c.abort();
    progress.finish();

    let job = handle.wait().await?;

    print_result(&workspace, &job, &options)?;

    let code = match job.status {
        JobStatus::Complete => {
            if let Some(path) = &options.output {
                atomic_write(Path::new(path), &translated_text(&job))?;
                status!(
                    "{} Translation written to {}",
                    Style::success("✓"),
                    Style::secondary(path)
                );
            }
            exitcode::OK
        }
        JobStatus::Cancelled => {
            warning!(
                "{} ({}/{} lines translated)",
                Style::warning("Translation stopped"),
                job.translated_lines.len(),
                workspace.lines().len()
            );
            EXIT_CANCELLED
        }
        JobStatus::Failed | JobStatus::Idle | JobStatus::Running => {
            warning!(
                "{} {}",
                Style::error("Translation failed:"),
                job.error.as_deref().unwrap_or("unknown error")
            );
            exitcode::UNAVAILABLE
        }
    };

    if options.output.is_some() && job.status != JobStatus::Complete {
        status!(
            "{}",
            Style::hint("Output file not written: the translation did not complete.")
        );
    }

    Ok(code)
}

fn print_summary(workspace: &Workspace, settings: &TranslationSettings) {
    status!(
        "{} {} {}",
        Style::label("file"),
        Style::value(workspace.display_name()),
        Style::secondary(format!(
            "({}, {} lines)",
            format_file_size(workspace.file_size_bytes()),
            workspace.lines().len()
        ))
    );
    status!(
        "{} {} → {} {}",
        Style::label("lang"),
        Style::code(&settings.base_language),
        Style::code(&settings.target_language),
        Style::secondary(format!("({})", settings.mode))
    );
    output::flush_stderr();
}

/// Picks what to print: an explicit `--view` always wins; otherwise a
/// complete job uses its own projection and an unfinished one shows its
/// partial translation, if any.
fn chosen_projection(job: &TranslationJob, requested: Option<Projection>) -> Option<Projection> {
    if requested.is_some() {
        return requested;
    }
    match job.status {
        JobStatus::Complete => Some(job.projection),
        _ if job.translated_lines.is_empty() => None,
        _ => Some(Projection::Translated),
    }
}

fn print_result(
    workspace: &Workspace,
    job: &TranslationJob,
    options: &TranslateOptions,
) -> Result<()> {
    let Some(projection) = chosen_projection(job, options.view) else {
        return Ok(());
    };

    let rows = project(workspace.lines(), job, projection);
    let rendered = render(
        &rows,
        projection,
        RenderOptions {
            line_numbers: options.line_numbers,
            color: output::stdout_color(),
        },
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(status: JobStatus, translated: &[&str]) -> TranslationJob {
        TranslationJob {
            status,
            translated_lines: translated.iter().map(ToString::to_string).collect(),
            projection: if status == JobStatus::Complete {
                Projection::Translated
            } else {
                Projection::Original
            },
            ..TranslationJob::default()
        }
    }

    #[test]
    fn test_explicit_view_wins() {
        let job = make_job(JobStatus::Failed, &[]);
        assert_eq!(
            chosen_projection(&job, Some(Projection::Original)),
            Some(Projection::Original)
        );
    }

    #[test]
    fn test_complete_job_uses_its_projection() {
        let job = make_job(JobStatus::Complete, &["a"]);
        assert_eq!(chosen_projection(&job, None), Some(Projection::Translated));
    }

    #[test]
    fn test_unfinished_job_shows_partial_translation() {
        let job = make_job(JobStatus::Cancelled, &["a"]);
        assert_eq!(chosen_projection(&job, None), Some(Projection::Translated));

        let empty = make_job(JobStatus::Failed, &[]);
        assert_eq!(chosen_projection(&empty, None), None);
    }
}
