use thiserror::Error;

use crate::constellation::MalformedResponse;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("a submission is already in flight")]
    Busy,
}
