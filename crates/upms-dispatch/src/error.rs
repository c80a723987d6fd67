use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown action code {0}: expected 0..=6")]
    UnknownAction(i64),

    #[error("unknown rule name {0:?}")]
    UnknownRule(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
