use std::fmt;

use super::error::JobError;
use crate::view::Projection;

/// Lifecycle of a translation job.
///
/// `Idle -> Running -> {Complete, Cancelled, Failed}`. A new run resets a
/// terminal job to `Idle` before entering `Running` again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobStatus {
    #[default]
    Idle,
    Running,
    Cancelled,
    Complete,
    Failed,
}

impl JobStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Complete | Self::Failed)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Cancelled => "cancelled",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a job's progress.
///
/// Only the orchestrator mutates it; everyone else gets clones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationJob {
    pub status: JobStatus,
    /// Translated lines in index order. Entry `i` exists once line `i` resolved.
    pub translated_lines: Vec<String>,
    /// Line currently being translated.
    pub current_index: Option<usize>,
    /// Failure message; only set when `status` is `Failed`.
    pub error: Option<String>,
    /// Projection the view should show for this job.
    pub projection: Projection,
}

impl TranslationJob {
    /// A freshly started job.
    pub(crate) fn running() -> Self {
        Self {
            status: JobStatus::Running,
            ..Self::default()
        }
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.status, JobStatus::Running)
    }

    /// Resets to `Idle`, dropping any previous results.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Enters `Running` from any state except `Running`.
    pub(crate) fn begin(&mut self) -> Result<(), JobError> {
        if self.is_running() {
            return Err(JobError::AlreadyRunning);
        }
        *self = Self::running();
        Ok(())
    }

    /// Applies the single terminal transition for a finished run.
    pub(crate) fn settle(&mut self, outcome: &Result<(), JobError>) {
        debug_assert!(self.is_running());

        self.current_index = None;
        match outcome {
            Ok(()) => {
                self.status = JobStatus::Complete;
                self.projection = Projection::Translated;
            }
            Err(JobError::Cancelled) => {
                self.status = JobStatus::Cancelled;
            }
            Err(err) => {
                self.status = JobStatus::Failed;
                self.error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_from_idle() {
        let mut job = TranslationJob::default();
        assert!(job.begin().is_ok());
        assert_eq!(job.status, JobStatus::Running);
        assert!(job.translated_lines.is_empty());
        assert_eq!(job.current_index, None);
    }

    #[test]
    fn test_begin_rejected_while_running() {
        let mut job = TranslationJob::running();
        job.translated_lines.push("kept".to_string());

        assert!(matches!(job.begin(), Err(JobError::AlreadyRunning)));
        assert_eq!(job.translated_lines, ["kept"]);
    }

    #[test]
    fn test_begin_from_terminal_clears_previous_results() {
        let mut job = TranslationJob::running();
        job.translated_lines.push("old".to_string());
        job.settle(&Err(JobError::Precondition("boom".to_string())));

        assert!(job.begin().is_ok());
        assert!(job.translated_lines.is_empty());
        assert!(job.error.is_none());
        assert_eq!(job.projection, Projection::Original);
    }

    #[test]
    fn test_settle_complete_switches_projection() {
        let mut job = TranslationJob::running();
        job.current_index = Some(3);
        job.settle(&Ok(()));

        assert_eq!(job.status, JobStatus::Complete);
        assert_eq!(job.projection, Projection::Translated);
        assert_eq!(job.current_index, None);
    }

    #[test]
    fn test_settle_cancelled_has_no_error() {
        let mut job = TranslationJob::running();
        job.settle(&Err(JobError::Cancelled));

        assert_eq!(job.status, JobStatus::Cancelled);
        assert!(job.error.is_none());
        assert_eq!(job.projection, Projection::Original);
    }

    #[test]
    fn test_settle_failed_records_message() {
        let mut job = TranslationJob::running();
        job.settle(&Err(JobError::Precondition("No endpoint".to_string())));

        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.error.as_deref().is_some_and(|e| e.contains("No endpoint")));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!JobStatus::Idle.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(JobStatus::Complete.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }
}
