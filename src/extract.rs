use crate::auth::{extract_api_key, AuthError};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

/// API key credential pulled from the `Authorization` header.
///
/// Handlers that take this extractor only run when the header parses; the
/// token itself is still unverified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(token) => Ok(ApiKey(token.to_owned())),
            Err(err) => {
                debug!(error = %err, "Rejecting request");
                Err(err)
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            // Missing credential: the client should authenticate.
            AuthError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            // Bad credential shape: re-sending it unchanged won't help.
            AuthError::MalformedHeader => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
