use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::routes::RouteError;
pub use crate::session::SessionError;

/// TransportError
///
/// The request never produced an HTTP response (connection refused, DNS,
/// unreadable body).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// ApiError
///
/// Failure of a helper call. A non-2xx response maps to `RequestFailed`,
/// which carries only the helper's fixed message: no status code, no body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(&'static str),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
