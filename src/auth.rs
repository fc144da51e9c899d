use http::{header, HeaderMap};
use thiserror::Error;

/// The only scheme accepted, matched case-sensitively.
const SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The `Authorization` header is missing, or present with an empty value.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The header is present but does not match the two-field
    /// `ApiKey <token>` shape.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from the `Authorization` header.
///
/// The value must be exactly `ApiKey <token>`: the literal scheme, one space,
/// and the token. The token is returned unmodified, with no trimming or
/// decoding. A missing or empty header is [`AuthError::NoAuthHeader`]; any
/// other deviation is [`AuthError::MalformedHeader`], so callers can answer
/// the two cases with different status codes.
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::NoAuthHeader)?;
    // Values outside visible ASCII can't be read as a string; the header is
    // present but not in the required shape.
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    // Exactly two space-separated fields. A doubled space yields an empty
    // third field and is rejected, not collapsed.
    let mut fields = value.split(' ');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(SCHEME), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
