//! Mock HTTP client for testing.
//!
//! Responses are configured per URL (exact match first, then prefix) and
//! every request is recorded so tests can assert on what the loader sent.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait, then resolve to the inner response. Used to observe the
    /// loading state while a request is in flight.
    Delayed(Duration, Box<MockResponse>),
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://test/api/v1/regions/metadata",
///     MockResponse::Success(Response::new(200, "{\"regions\":[]}")),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    async fn resolve(response: MockResponse) -> Result<Response, HttpError> {
        let mut current = response;
        loop {
            match current {
                MockResponse::Success(response) => return Ok(response),
                MockResponse::Error(err) => return Err(err),
                MockResponse::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    current = *inner;
                }
            }
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers);

        match self.get_response(url) {
            Some(response) => Self::resolve(response).await,
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_exact_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/api/v1/regions/metadata",
            MockResponse::Success(Response::new(200, "ok")),
        );

        let response = client
            .get("http://test/api/v1/regions/metadata", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.text().unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/api",
            MockResponse::Success(Response::new(204, "")),
        );

        let response = client
            .get("http://test/api/v1/regions/metadata", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let result = client.get("http://anything", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("http://unknown", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(msg)) if msg.contains("http://unknown")));
    }

    #[tokio::test]
    async fn test_delayed_response_resolves() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Delayed(
            Duration::from_millis(10),
            Box::new(MockResponse::Success(Response::new(200, "late"))),
        ));

        let response = client.get("http://slow", &Headers::new()).await.unwrap();
        assert_eq!(response.text().unwrap(), "late");
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, "")));

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        client.get("http://test/a", &headers).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://test/a");
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(client.request_count(), 1);
    }
}
