use thiserror::Error;

/// Errors produced when resolving a character counter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("unknown character counter kind: {0:?}")]
    UnknownKind(String),
}
