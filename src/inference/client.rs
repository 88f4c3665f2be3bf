use std::fmt;

use log::debug;
use serde_json::{json, Value};

use crate::error::{Error, Result};

use super::transport::{HttpResponse, HttpTransport, Transport};

/// The content type sent with every inference request
pub static CONTENT_TYPE_JSON: &str = "application/json";

/// A single POST to a hosted model endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct InferenceRequest {
    /// The model endpoint URL
    pub url: String,

    /// The text sent as `inputs`, either the raw review or a prompt wrapping it
    pub inputs: String,

    token: Option<String>,
}

impl InferenceRequest {
    /// Create a request. Blank tokens are treated as absent.
    pub fn new(url: impl Into<String>, inputs: impl Into<String>, token: Option<&str>) -> Self {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Self {
            url: url.into(),
            inputs: inputs.into(),
            token,
        }
    }

    /// Whether a bearer token will be attached
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The JSON body: `{"inputs": ...}`
    pub fn body(&self) -> Value {
        json!({ "inputs": self.inputs })
    }

    /// The request headers, with `Authorization` only when a token is present
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", CONTENT_TYPE_JSON.to_string())];

        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        headers
    }
}

// The token stays out of logs
impl fmt::Debug for InferenceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceRequest")
            .field("url", &self.url)
            .field("inputs", &self.inputs)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Client for hosted inference endpoints
#[derive(Clone, Debug, Default)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Create a client over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `inputs` to the endpoint and return the decoded JSON body
    pub async fn infer(&self, url: &str, inputs: &str, token: Option<&str>) -> Result<Value> {
        let request = InferenceRequest::new(url, inputs, token);

        debug!(
            "POST {} (authenticated: {})",
            request.url,
            request.is_authenticated()
        );

        let response = self.transport.post(&request).await?;

        debug!("{} responded with {}", request.url, response.status);

        check_status(&response)?;

        let data: Value = serde_json::from_str(&response.body)?;

        if let Some(error) = data.get("error").filter(|error| !error.is_null()) {
            let message = match error.as_str() {
                Some(message) => message.to_string(),
                None => error.to_string(),
            };

            return Err(Error::Api {
                status: response.status,
                message,
            });
        }

        Ok(data)
    }
}

/// Map a non-success status onto the error taxonomy
pub fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    Err(match response.status {
        401 => Error::InvalidToken,
        402 => Error::PaymentRequired,
        429 => Error::RateLimit,
        503 => Error::ModelLoading,
        status => Error::Api {
            status,
            message: response.status_text.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Canned {
        response: HttpResponse,
        requests: Mutex<Vec<InferenceRequest>>,
    }

    impl Canned {
        fn new(status: u16, status_text: &str, body: &str) -> Self {
            Self {
                response: HttpResponse::new(status, status_text.to_string(), body.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn get(&self, _url: &str) -> Result<HttpResponse> {
            Ok(self.response.clone())
        }

        async fn post(&self, request: &InferenceRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_headers_without_token() {
        let request = InferenceRequest::new("http://model", "great film", None);

        assert_eq!(
            request.headers(),
            vec![("Content-Type", "application/json".to_string())]
        );
        assert!(!request.is_authenticated());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let request = InferenceRequest::new("http://model", "great film", Some("   "));

        assert!(!request.is_authenticated());
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_headers_with_token() {
        let request = InferenceRequest::new("http://model", "great film", Some(" hf_abc "));

        assert_eq!(
            request.headers(),
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer hf_abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let request = InferenceRequest::new("http://model", "great film", Some("hf_secret"));

        let debug = format!("{:?}", request);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("authenticated: true"));
    }

    #[test]
    fn test_body_wraps_inputs() {
        let request = InferenceRequest::new("http://model", "great film", None);

        assert_eq!(request.body(), json!({ "inputs": "great film" }));
    }

    #[test]
    fn test_status_mapping() {
        let status = |code, text: &str| check_status(&HttpResponse::new(code, text.into(), String::new()));

        assert!(status(200, "OK").is_ok());
        assert!(matches!(status(401, "Unauthorized"), Err(Error::InvalidToken)));
        assert!(matches!(status(402, "Payment Required"), Err(Error::PaymentRequired)));
        assert!(matches!(status(429, "Too Many Requests"), Err(Error::RateLimit)));
        assert!(matches!(status(503, "Service Unavailable"), Err(Error::ModelLoading)));

        match status(500, "Internal Server Error") {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_infer_sends_inputs_and_decodes_body() {
        let client = Client::new(Canned::new(200, "OK", r#"[[{"label":"POSITIVE","score":0.9}]]"#));

        let data = client
            .infer("http://model", "great film", Some("hf_abc"))
            .await
            .unwrap();

        assert_eq!(data, json!([[{ "label": "POSITIVE", "score": 0.9 }]]));

        let requests = client.transport().requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://model");
        assert_eq!(requests[0].inputs, "great film");
        assert!(requests[0].is_authenticated());
    }

    #[tokio::test]
    async fn test_infer_rate_limited() {
        let client = Client::new(Canned::new(429, "Too Many Requests", ""));

        let result = client.infer("http://model", "great film", None).await;

        assert!(matches!(result, Err(Error::RateLimit)));
    }

    #[tokio::test]
    async fn test_infer_invalid_token() {
        let client = Client::new(Canned::new(401, "Unauthorized", ""));

        let result = client.infer("http://model", "great film", Some("bad")).await;

        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[tokio::test]
    async fn test_infer_promotes_error_field() {
        let client = Client::new(Canned::new(
            200,
            "OK",
            r#"{"error":"Model tiiuae/falcon-7b-instruct is currently loading"}"#,
        ));

        match client.infer("http://model", "great film", None).await {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 200);
                assert_eq!(message, "Model tiiuae/falcon-7b-instruct is currently loading");
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_infer_malformed_json() {
        let client = Client::new(Canned::new(200, "OK", "<html>oops</html>"));

        let result = client.infer("http://model", "great film", None).await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
