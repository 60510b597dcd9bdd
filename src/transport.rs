use async_trait::async_trait;
use reqwest::{Method, multipart};
use std::sync::{Arc, Mutex};

use crate::error::TransportError;

/// Form field name the backend reads uploaded images from.
pub const FILE_FIELD: &str = "file";

/// FilePart
///
/// An in-memory file ready to be sent as one multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`. Left to the transport's default when `None`.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// A multipart form with a single file part under `field`.
    Multipart { field: &'static str, file: FilePart },
}

/// HttpRequest
///
/// Everything a helper decides about a request. The transport adds nothing
/// except the `Authorization` header derived from `bearer_token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer_token: None,
            body: RequestBody::Empty,
        }
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn file(mut self, file: FilePart) -> Self {
        self.body = RequestBody::Multipart {
            field: FILE_FIELD,
            file,
        };
        self
    }

    /// Value of the `Authorization` header, if the request carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// 1. HttpClient Contract
/// HttpClient
///
/// The single capability the helpers need: send one request, get one response.
/// Lets the helpers run against the real network (`ReqwestHttpClient`) or the
/// in-memory fake (`MockHttpClient`) without change.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// 2. The Real Implementation
/// ReqwestHttpClient
///
/// Sends requests with `reqwest`. No timeout is configured beyond the
/// library's defaults.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);

        if let Some(authorization) = request.authorization() {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }

        if let RequestBody::Multipart { field, file } = request.body {
            let mut part = multipart::Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(content_type) = file.content_type {
                part = part
                    .mime_str(&content_type)
                    .map_err(|e| TransportError(e.to_string()))?;
            }
            builder = builder.multipart(multipart::Form::new().part(field, part));
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();

        // Error bodies are never surfaced to callers, so only successful bodies are read.
        let body = if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockHttpClient
///
/// Answers every request with the same canned response and records what was
/// sent, so tests can assert on method, URL, headers and body.
pub struct MockHttpClient {
    response: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    /// Responds `200` with `body`.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Ok(HttpResponse {
                status,
                body: body.into(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request before a response exists.
    pub fn new_unreachable() -> Self {
        Self {
            response: Err(TransportError("connection refused".to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.response.clone()
    }
}

/// HttpState
///
/// The shared handle to whichever transport the client was built with.
pub type HttpState = Arc<dyn HttpClient>;
