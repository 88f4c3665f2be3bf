use async_trait::async_trait;
use derive_new::new;

use crate::error::{Error, Result};

use super::client::InferenceRequest;

/// A raw HTTP response, before any status or body validation
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: u16,

    /// The canonical reason phrase for the status (e.g. "Too Many Requests")
    pub status_text: String,

    /// The response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network layer used to fetch corpora and call inference endpoints
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a corpus with a GET request
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Send an inference request as a JSON POST
    async fn post(&self, request: &InferenceRequest) -> Result<HttpResponse>;
}

/// A [`Transport`] backed by `reqwest`
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Error::corpus_fetch)?;

        read_response(response, Error::corpus_fetch).await
    }

    async fn post(&self, request: &InferenceRequest) -> Result<HttpResponse> {
        let mut builder = self.client.post(&request.url);

        // Headers go first so `json` doesn't add a second content type
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder
            .json(&request.body())
            .send()
            .await
            .map_err(Error::endpoint_fetch)?;

        read_response(response, Error::endpoint_fetch).await
    }
}

async fn read_response(
    response: reqwest::Response,
    fail: fn(reqwest::Error) -> Error,
) -> Result<HttpResponse> {
    let status = response.status();
    let body = response.text().await.map_err(fail)?;

    Ok(HttpResponse::new(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default().to_string(),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "OK".into(), String::new()).is_success());
        assert!(HttpResponse::new(204, "No Content".into(), String::new()).is_success());
        assert!(!HttpResponse::new(301, "Moved Permanently".into(), String::new()).is_success());
        assert!(!HttpResponse::new(503, "Service Unavailable".into(), String::new()).is_success());
    }
}
