use super::error::MalformedResponse;
use super::types::Constellation;

/// Interpret a generation service response body.
///
/// The payload must be an object with a `satellites` array whose elements
/// carry at least `name`, `x` and `y`. Numeric values are accepted without
/// range checks and unknown keys are ignored.
pub fn parse_response(body: &str) -> Result<Constellation, MalformedResponse> {
    let constellation: Constellation = serde_json::from_str(body)?;
    Ok(constellation)
}
