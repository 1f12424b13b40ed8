pub mod error;
pub mod http;
pub mod traits;

use serde::de::DeserializeOwned;

pub use error::TransportError;
pub use http::HttpTransport;
pub use traits::Transport;

/// Result type for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Method of an outbound request. Kept crate-local so transports can be
/// mocked without pulling in an HTTP crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single outbound request: method, cluster-relative path, optional
/// pre-serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl TransportRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body.into()),
        }
    }
}

/// A successful response as seen by callers: the status line plus the raw
/// body text. Decoding into a typed payload happens here so that a body
/// that does not parse is a transport failure, not a caller concern.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> TransportResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
