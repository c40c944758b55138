mod error;
mod parsing;
mod types;

pub use error::MalformedResponse;
pub use parsing::parse_response;
pub use types::{limits, Constellation, ConstellationRequest, Satellite};
