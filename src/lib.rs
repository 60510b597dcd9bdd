use std::sync::Arc;

// --- Module Structure ---

// Core client components.
pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod images;
pub mod session;
pub mod transport;

// Client-side route table (Public, Admin).
pub mod routes;

// --- Public Re-exports ---

pub use auth::{GuardDecision, NavigationGuard, SessionState};
pub use config::{AppConfig, Env};
pub use endpoints::{Endpoint, Endpoints};
pub use error::{ApiError, TransportError};
pub use routes::{Navigation, RouteTable, Router};
pub use session::{FileSessionStore, MemorySessionStore, SessionMarker, SessionStore};
pub use transport::{FilePart, HttpClient, HttpState, MockHttpClient, ReqwestHttpClient};

/// ApiClient
///
/// Everything the request helpers need: the endpoint registry built from the
/// configured base URL, and the transport requests are sent through. Cheap to
/// clone and shareable across tasks.
#[derive(Clone)]
pub struct ApiClient {
    /// Endpoint Registry: pure URL builders over `AppConfig::base_url`.
    pub endpoints: Endpoints,
    /// Transport: real network or a fake in tests.
    pub http: HttpState,
}

impl ApiClient {
    pub fn new(config: &AppConfig, http: HttpState) -> Self {
        Self {
            endpoints: Endpoints::new(config),
            http,
        }
    }

    /// Client talking to the network through `reqwest`.
    pub fn with_reqwest(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::new()))
    }
}

/// create_router
///
/// Assembles the route table and attaches the navigation guard backed by the
/// given session provider.
pub fn create_router(session: SessionState) -> Result<Router, routes::RouteError> {
    let table = RouteTable::standard()?;
    Ok(Router::new(table, NavigationGuard::new(session)))
}
