//! Translation jobs: state, orchestration and start/cancel control.

mod control;
mod error;
mod orchestrator;
mod state;

pub use control::{JobControl, JobHandle};
pub use error::JobError;
pub use orchestrator::Orchestrator;
pub use state::{JobStatus, TranslationJob};
