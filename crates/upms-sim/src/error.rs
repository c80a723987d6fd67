use thiserror::Error;
use upms_core::{CoreError, JobId, SimTime};
use upms_dispatch::DispatchError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Instance(#[from] CoreError),

    #[error("job {0} selected by a rule is not in the queue")]
    JobNotQueued(JobId),

    #[error("event queue drained at t={now} before every job completed")]
    Stalled { now: SimTime },

    #[error("step called before reset")]
    NotReset,

    #[error("episode already finished; call reset")]
    EpisodeFinished,
}

pub type SimResult<T> = Result<T, SimError>;
