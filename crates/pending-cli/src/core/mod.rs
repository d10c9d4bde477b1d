use thiserror::Error;

mod tracing;

pub use tracing::{Fmt, Verbosity};

#[derive(Error, Debug)]
pub enum Error {
    #[error("CLI execution error: {0}")]
    Execution(String),
    #[error("CLI validation error: {0}")]
    Validation(String),
}

impl From<pending_diagnosis::Error> for Error {
    fn from(value: pending_diagnosis::Error) -> Self {
        match value {
            pending_diagnosis::Error::InvalidAddressFormat(e) => Self::Validation(e),
            e => Self::Execution(e.to_string()),
        }
    }
}

impl From<pending_conflux::Error> for Error {
    fn from(value: pending_conflux::Error) -> Self {
        Self::Execution(value.to_string())
    }
}

impl From<pending_common::concurrency::Error> for Error {
    fn from(value: pending_common::concurrency::Error) -> Self {
        Self::Execution(value.to_string())
    }
}
