use futures::{FutureExt, future::BoxFuture};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::error::TransportError;
use super::traits::Transport;
use super::{Method, TransportRequest, TransportResponse, TransportResult};

/// reqwest-backed [`Transport`] addressing a single cluster by base URL.
///
/// Bodies are sent as `application/json`; a non-success status becomes
/// [`TransportError::Status`] carrying the response text. The underlying
/// client is cheap to clone and safe to share between concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given base URL, e.g. `http://localhost:9200`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Replace the underlying reqwest client, e.g. to set timeouts or TLS
    /// options.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    fn request<'a>(
        &'a self,
        request: &'a TransportRequest,
    ) -> BoxFuture<'a, TransportResult<TransportResponse>> {
        async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, self.url_for(&request.path));
            if let Some(body) = request.body.as_ref() {
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(TransportResponse {
                status: status.as_u16(),
                body,
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized_without_a_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:9200/");
        assert_eq!(
            transport.url_for("/_plugins/_ml/agents/abc/_execute"),
            "http://localhost:9200/_plugins/_ml/agents/abc/_execute"
        );
    }
}
