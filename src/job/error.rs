use thiserror::Error;

use crate::translation::ClientError;

/// Why a job did not complete.
#[derive(Debug, Error)]
pub enum JobError {
    /// Raised before any request is made.
    #[error("{0}")]
    Precondition(String),

    #[error("A translation job is already running")]
    AlreadyRunning,

    /// A request failed; `line` is the per-line index, `None` in whole-file mode.
    #[error("{}", request_message(*line, source))]
    Request {
        line: Option<usize>,
        #[source]
        source: ClientError,
    },

    /// The job's own cancellation token fired. Not a failure.
    #[error("Translation stopped by user")]
    Cancelled,

    #[error("Translation task ended unexpectedly: {0}")]
    Join(#[from] tokio::task::JoinError),
}

fn request_message(line: Option<usize>, source: &ClientError) -> String {
    match line {
        Some(index) => format!("Request failed for line index {index}: {source}"),
        None => format!("Request failed: {source}"),
    }
}

impl JobError {
    /// Returns `true` for errors raised before any network call.
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_) | Self::AlreadyRunning)
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_request_message_names_line_and_status() {
        let err = JobError::Request {
            line: Some(4),
            source: ClientError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("line index 4"));
        assert!(message.contains("500"));
    }

    #[test]
    fn test_whole_file_request_message() {
        let err = JobError::Request {
            line: None,
            source: ClientError::Status {
                status: StatusCode::NOT_FOUND,
                body: String::new(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Request failed: endpoint responded with status 404 Not Found"
        );
    }

    #[test]
    fn test_classification() {
        assert!(JobError::AlreadyRunning.is_precondition());
        assert!(JobError::Precondition(String::new()).is_precondition());
        assert!(!JobError::Cancelled.is_precondition());
        assert!(JobError::Cancelled.is_cancelled());
    }
}
