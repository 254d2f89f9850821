//! Drives a single translation job from `Running` to a terminal state.
//!
//! Per-line mode sends one request per non-blank line, strictly in order,
//! awaiting each response before the next request goes out. Whole-file mode
//! sends one request and replaces the translated lines in a single step.
//! Every awaited request is raced against the job's cancellation token, so
//! a cancel drops the in-flight request instead of waiting for it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::JobError;
use super::state::TranslationJob;
use crate::translation::request::{self, PerLineResponse, WholeFileResponse};
use crate::translation::{Mode, TranslationClient, TranslationSettings};
use crate::workspace::{Workspace, is_blank, split_lines};

/// Owns one [`TranslationJob`] and is the only thing that mutates it.
pub struct Orchestrator {
    client: TranslationClient,
    job: TranslationJob,
}

impl Orchestrator {
    pub fn new(client: TranslationClient) -> Self {
        Self {
            client,
            job: TranslationJob::default(),
        }
    }

    pub const fn job(&self) -> &TranslationJob {
        &self.job
    }

    pub fn into_job(self) -> TranslationJob {
        self.job
    }

    /// Returns the job to `Idle`.
    ///
    /// Needed only when a previous `run` future was dropped mid-flight and
    /// left the job `Running`.
    pub fn reset(&mut self) {
        self.job.reset();
    }

    /// Runs a job to completion, cancellation or failure.
    ///
    /// `publish` is called with the current snapshot after every observable
    /// change: when the job starts, when a line becomes active, after each
    /// line resolves and on the terminal transition.
    ///
    /// Returns `Ok(())` when the job completed. Every other outcome is also
    /// recorded in [`Orchestrator::job`]; `Err(JobError::Cancelled)` leaves
    /// the job `Cancelled` without an error message.
    pub async fn run<F>(
        &mut self,
        settings: &TranslationSettings,
        workspace: &Workspace,
        cancel: &CancellationToken,
        mut publish: F,
    ) -> Result<(), JobError>
    where
        F: FnMut(&TranslationJob),
    {
        self.job.begin()?;
        publish(&self.job);

        info!(
            mode = %settings.mode,
            file = workspace.display_name(),
            lines = workspace.lines().len(),
            "translation started"
        );

        let outcome = match check_preconditions(settings, workspace) {
            Ok(()) => match settings.mode {
                Mode::PerLine => {
                    self.run_per_line(settings, workspace, cancel, &mut publish)
                        .await
                }
                Mode::WholeFile => {
                    self.run_whole_file(settings, workspace, cancel, &mut publish)
                        .await
                }
            },
            Err(err) => Err(err),
        };

        match &outcome {
            Ok(()) => info!(
                lines = self.job.translated_lines.len(),
                "translation complete"
            ),
            Err(JobError::Cancelled) => info!(
                lines = self.job.translated_lines.len(),
                "translation cancelled"
            ),
            Err(err) => warn!(error = %err, "translation failed"),
        }

        self.job.settle(&outcome);
        publish(&self.job);

        outcome
    }

    async fn run_per_line<F>(
        &mut self,
        settings: &TranslationSettings,
        workspace: &Workspace,
        cancel: &CancellationToken,
        publish: &mut F,
    ) -> Result<(), JobError>
    where
        F: FnMut(&TranslationJob),
    {
        for (index, line) in workspace.lines().iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(JobError::Cancelled);
            }

            self.job.current_index = Some(index);
            publish(&self.job);

            let translated = if is_blank(line) {
                debug!(index, "skipping blank line");
                String::new()
            } else {
                let body = request::per_line(settings, workspace, index);
                let response: PerLineResponse = self
                    .send(&settings.endpoint_url, &body, cancel, Some(index))
                    .await?;
                response.into_text_or(line)
            };

            self.job.translated_lines.push(translated);
            publish(&self.job);
        }

        // A cancel issued while the last line was published still counts.
        if cancel.is_cancelled() {
            return Err(JobError::Cancelled);
        }

        Ok(())
    }

    async fn run_whole_file<F>(
        &mut self,
        settings: &TranslationSettings,
        workspace: &Workspace,
        cancel: &CancellationToken,
        publish: &mut F,
    ) -> Result<(), JobError>
    where
        F: FnMut(&TranslationJob),
    {
        if cancel.is_cancelled() {
            return Err(JobError::Cancelled);
        }

        // Whole-file mode has no per-line progress; mark the first line active.
        self.job.current_index = Some(0);
        publish(&self.job);

        let body = request::whole_file(settings, workspace);
        let response: WholeFileResponse = self
            .send(&settings.endpoint_url, &body, cancel, None)
            .await?;
        if cancel.is_cancelled() {
            return Err(JobError::Cancelled);
        }

        if response.translated_content.is_none() {
            warn!("response has no translatedContent, using an empty result");
        }
        self.job.translated_lines = split_lines(&response.into_content());

        Ok(())
    }

    async fn send<B, R>(
        &self,
        url: &str,
        body: &B,
        cancel: &CancellationToken,
        line: Option<usize>,
    ) -> Result<R, JobError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(?line, url, "sending request");

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(?line, "request aborted by cancellation");
                Err(JobError::Cancelled)
            }
            result = self.client.post_json(url, body) => {
                result.map_err(|source| JobError::Request { line, source })
            }
        }
    }
}

fn check_preconditions(
    settings: &TranslationSettings,
    workspace: &Workspace,
) -> Result<(), JobError> {
    if workspace.is_blank() {
        return Err(JobError::Precondition(
            "No content to translate: load a file with non-blank content first".to_string(),
        ));
    }
    if settings.endpoint_url.trim().is_empty() {
        return Err(JobError::Precondition(
            "No endpoint URL configured: pass --endpoint or run 'ft configure'".to_string(),
        ));
    }
    Ok(())
}
