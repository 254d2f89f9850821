use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info_span};

use super::error::JobError;
use super::orchestrator::Orchestrator;
use super::state::TranslationJob;
use crate::translation::{TranslationClient, TranslationSettings};
use crate::workspace::Workspace;

/// Starts jobs and hands out their handles. At most one job runs at a time.
#[derive(Debug)]
pub struct JobControl {
    client: TranslationClient,
    active: Option<watch::Receiver<TranslationJob>>,
    next_id: u64,
}

/// A started job: its progress, its cancellation and its final result.
#[derive(Debug)]
pub struct JobHandle {
    id: u64,
    cancel: CancellationToken,
    updates: watch::Receiver<TranslationJob>,
    task: JoinHandle<TranslationJob>,
}

impl Default for JobControl {
    fn default() -> Self {
        Self::new(TranslationClient::new())
    }
}

impl JobControl {
    pub fn new(client: TranslationClient) -> Self {
        Self {
            client,
            active: None,
            next_id: 1,
        }
    }

    /// Returns `true` while the most recently started job is running.
    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|updates| {
            // A closed channel means the task is gone even if its last
            // snapshot still says Running.
            updates.has_changed().is_ok() && updates.borrow().is_running()
        })
    }

    /// Spawns a job on the current tokio runtime.
    ///
    /// The returned handle already reports `Running`, so a second `start`
    /// issued right away is rejected.
    pub fn start(
        &mut self,
        settings: TranslationSettings,
        workspace: Arc<Workspace>,
    ) -> Result<JobHandle, JobError> {
        if self.is_running() {
            return Err(JobError::AlreadyRunning);
        }

        let id = self.next_id;
        self.next_id += 1;

        let (tx, updates) = watch::channel(TranslationJob::running());
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let mut orchestrator = Orchestrator::new(self.client.clone());

        let task = tokio::spawn(
            async move {
                let outcome = orchestrator
                    .run(&settings, &workspace, &token, |job| {
                        tx.send_replace(job.clone());
                    })
                    .await;
                if let Err(err) = outcome {
                    debug!(error = %err, "job ended without completing");
                }
                orchestrator.into_job()
            }
            .instrument(info_span!("job", id)),
        );

        self.active = Some(updates.clone());

        Ok(JobHandle {
            id,
            cancel,
            updates,
            task,
        })
    }

    /// Cancels the job. A no-op once the job has left `Running`.
    pub fn cancel(&self, handle: &JobHandle) {
        handle.cancel();
    }

    /// Latest snapshot of the job.
    pub fn status(&self, handle: &JobHandle) -> TranslationJob {
        handle.status()
    }
}

impl JobHandle {
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that cancels this job, for use from another task.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn status(&self) -> TranslationJob {
        self.updates.borrow().clone()
    }

    /// A receiver that is notified after every published change.
    ///
    /// `changed()` returns an error once the job task has finished.
    pub fn subscribe(&self) -> watch::Receiver<TranslationJob> {
        self.updates.clone()
    }

    /// Waits for the job task and returns its final snapshot.
    ///
    /// Failed and cancelled jobs are `Ok`; their status says what happened.
    pub async fn wait(self) -> Result<TranslationJob, JobError> {
        Ok(self.task.await?)
    }
}
