//! Apikey Auth
//!
//! Strict `ApiKey <token>` parsing for HTTP `Authorization` headers.
//!
//! ## Direct
//!
//! Call the parser against any `http::HeaderMap`:
//! ```rust,ignore
//! use apikey_auth::extract_api_key;
//!
//! let token = extract_api_key(request.headers())?;
//! ```
//!
//! ## Embedded (Axum)
//!
//! When the `axum` feature is enabled, handlers can take the credential as an
//! extractor argument; rejections become 401/400 JSON responses:
//! ```rust,ignore
//! use apikey_auth::ApiKey;
//!
//! async fn handler(ApiKey(token): ApiKey) { /* ... */ }
//! ```
//!
//! The crate only parses the header. Verifying the token against a credential
//! store is the caller's job.

pub mod auth;

// Axum extractor support. Enabled behind the `axum` feature so the parser can
// be used without pulling in a web framework.
#[cfg(feature = "axum")]
pub mod extract;

pub use auth::{extract_api_key, AuthError};

#[cfg(feature = "axum")]
pub use extract::ApiKey;
