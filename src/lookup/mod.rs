// Lookup client - the single HTTP round trip to the dictionary API
//
// One submission maps to exactly one GET request with the word
// percent-encoded into the path. The response is classified into the
// outcome taxonomy (success / not-found / service error / network error)
// and no retry is ever attempted - a failed lookup is terminal for its
// submission and the user simply searches again.

pub mod models;

use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub use models::Entry;

/// A lookup that did not produce an entry.
///
/// The `Display` text of each variant is the exact message shown to the
/// user in the error region, so callers render errors with `to_string()`
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The dictionary has no record for this word (HTTP 404).
    #[error("Word \"{word}\" not found. Please check your spelling and try again.")]
    NotFound { word: String },

    /// The service answered, but not usefully (non-404, non-2xx).
    #[error("Failed to fetch word data. Please try again later.")]
    Service { status: u16 },

    /// Transport failure, timeout, or a body that doesn't match the
    /// entry shape.
    #[error("Network error. Please check your internet connection and try again.")]
    Network,
}

/// Outcome of one lookup attempt.
pub type LookupOutcome = std::result::Result<Entry, LookupError>;

/// HTTP client for the dictionary API.
///
/// Cheap to clone (reqwest clients share their connection pool), so the
/// TUI clones one per spawned lookup task.
#[derive(Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl LookupClient {
    /// Build a client against an endpoint base URL.
    ///
    /// The timeout bounds the whole round trip; without it a dead
    /// network would leave the search bar busy indefinitely.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid dictionary endpoint: {endpoint}"))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, endpoint })
    }

    /// Look up a single normalized word.
    ///
    /// Exactly one request is issued per call. Classification:
    /// - 2xx with a conforming body -> the first entry variant
    /// - 404 -> `NotFound`
    /// - other non-2xx -> `Service`
    /// - transport failure or non-conforming body -> `Network`
    pub async fn lookup(&self, word: &str) -> LookupOutcome {
        let url = self.entry_url(word)?;

        tracing::debug!(word, url = %url, "Dictionary lookup");

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(word, error = %e, "Lookup transport failure");
            LookupError::Network
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(word, "Word not found");
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(word, status = status.as_u16(), "Dictionary service error");
            return Err(LookupError::Service {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::warn!(word, error = %e, "Unparseable response body");
            LookupError::Network
        })?;

        models::first_entry(body).ok_or_else(|| {
            tracing::warn!(word, "Response body does not match the entry shape");
            LookupError::Network
        })
    }

    /// Build `{endpoint}/{word}` with the word percent-encoded as one
    /// path segment.
    fn entry_url(&self, word: &str) -> std::result::Result<Url, LookupError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Network)?
            .push(word);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn client(server: &MockServer) -> LookupClient {
        LookupClient::new(&server.uri(), TIMEOUT).expect("client should build")
    }

    #[tokio::test]
    async fn test_successful_lookup_returns_first_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "word": "cat",
                "phonetic": "/kæt/",
                "meanings": [{
                    "partOfSpeech": "noun",
                    "definitions": [{
                        "definition": "A small domesticated carnivore.",
                        "example": "The cat slept."
                    }]
                }]
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let entry = client(&server).lookup("cat").await.expect("lookup failed");
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.display_phonetic(), Some("/kæt/"));
    }

    #[tokio::test]
    async fn test_404_is_not_found_with_exact_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).lookup("xyzzy").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Word \"xyzzy\" not found. Please check your spelling and try again."
        );
    }

    #[tokio::test]
    async fn test_500_is_service_error_with_exact_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).lookup("cat").await.unwrap_err();
        assert_eq!(err, LookupError::Service { status: 500 });
        assert_eq!(
            err.to_string(),
            "Failed to fetch word data. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Bind then drop the server so the port refuses connections.
        // The builder gives an exclusive server whose listener closes on
        // drop; the pooled `MockServer::start()` keeps the port alive.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let client = LookupClient::new(&uri, TIMEOUT).expect("client should build");
        let err = client.lookup("cat").await.unwrap_err();
        assert_eq!(err, LookupError::Network);
        assert_eq!(
            err.to_string(),
            "Network error. Please check your internet connection and try again."
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server).lookup("cat").await.unwrap_err();
        assert_eq!(err, LookupError::Network);
    }

    #[tokio::test]
    async fn test_empty_array_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = client(&server).lookup("cat").await.unwrap_err();
        assert_eq!(err, LookupError::Network);
    }

    #[tokio::test]
    async fn test_word_is_percent_encoded_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let _ = client(&server).lookup("ice cream").await;

        let requests = server
            .received_requests()
            .await
            .expect("request recording enabled");
        assert_eq!(requests.len(), 1, "exactly one request per lookup");
        assert_eq!(requests[0].url.path(), "/ice%20cream");
    }

    #[tokio::test]
    async fn test_endpoint_path_prefix_is_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/tea"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"word": "tea"}])))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v2/entries/en", server.uri());
        let client = LookupClient::new(&endpoint, TIMEOUT).expect("client should build");
        let entry = client.lookup("tea").await.expect("lookup failed");
        assert_eq!(entry.word, "tea");
    }
}
