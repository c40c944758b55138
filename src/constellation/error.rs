use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed constellation response: {0}")]
pub struct MalformedResponse(#[from] serde_json::Error);
