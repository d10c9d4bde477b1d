use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid address format {0}")]
    InvalidAddressFormat(String),

    #[error("network or node failure {0}")]
    NetworkOrNodeFailure(String),

    #[error("unclassified pending status {0}")]
    UnclassifiedStatus(String),

    #[error("configuration error {0}")]
    Configuration(String),
}

impl From<pending_conflux::Error> for Error {
    fn from(value: pending_conflux::Error) -> Self {
        match value {
            pending_conflux::Error::InvalidAddress(e) => Self::InvalidAddressFormat(e),
            pending_conflux::Error::UnclassifiedStatus(e) => Self::UnclassifiedStatus(e),
            pending_conflux::Error::Internal(e) => Self::Configuration(e),
            e => Self::NetworkOrNodeFailure(e.to_string()),
        }
    }
}
