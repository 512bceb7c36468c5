//! Homework status endpoint

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::PracticumClient;
use crate::error::{ClientError, Result};

/// Body fields the status API uses to report failures on a 200 response
const SOFT_ERROR_KEYS: [&str; 2] = ["error", "code"];

impl PracticumClient {
    /// Fetch homework statuses updated since `from_date`
    ///
    /// Returns the decoded body untouched; checking its shape is left to
    /// the caller.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp to request updates from
    ///
    /// # Errors
    /// * [`ClientError::Connectivity`] if the request never got a response
    /// * [`ClientError::Upstream`] if the status is not 200
    /// * [`ClientError::ParseError`] if the body is not JSON
    /// * [`ClientError::Response`] if the body carries an `error` or `code` field
    pub async fn fetch_status(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| ClientError::Connectivity {
                source: source.without_url(),
                from_date,
                endpoint: self.endpoint.clone(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                from_date,
                endpoint: self.endpoint.clone(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        if let Some((key, value)) = soft_error(&body) {
            return Err(ClientError::Response {
                key,
                value,
                from_date,
                endpoint: self.endpoint.clone(),
            });
        }

        Ok(body)
    }
}

/// Finds the first soft-error field in a response body
fn soft_error(body: &Value) -> Option<(&'static str, String)> {
    SOFT_ERROR_KEYS.into_iter().find_map(|key| {
        body.get(key).map(|value| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key, text)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use reqwest::Client;
    use serde_json::json;

    #[test]
    fn test_soft_error_prefers_error_field() {
        let body = json!({
            "error": {"error": "Wrong from_date format"},
            "code": "UnknownError"
        });

        let (key, value) = soft_error(&body).unwrap();
        assert_eq!(key, "error");
        assert_eq!(value, r#"{"error":"Wrong from_date format"}"#);
    }

    #[test]
    fn test_soft_error_code_field() {
        let body = json!({"code": "not_authenticated", "message": "Учетные данные не были предоставлены."});
        assert_eq!(soft_error(&body), Some(("code", "not_authenticated".to_string())));
    }

    #[test]
    fn test_soft_error_absent() {
        assert_eq!(soft_error(&json!({"homeworks": [], "current_date": 1})), None);
        assert_eq!(soft_error(&json!([])), None);
    }

    #[tokio::test]
    async fn test_fetch_status_success() {
        let body = r#"{"homeworks":[{"status":"approved","homework_name":"proj1"}],"current_date":1581604970}"#;
        let (base, server) = serve_once("200 OK", body).await;
        let endpoint = format!("{}/api/user_api/homework_statuses/", base);
        let client = PracticumClient::with_client(endpoint, "secret-token", Client::new());

        let response = client.fetch_status(1581600000).await.unwrap();
        assert_eq!(response["current_date"], 1581604970);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/user_api/homework_statuses/?from_date=1581600000 "));
        assert!(request.to_lowercase().contains("authorization: oauth secret-token"));
    }

    #[tokio::test]
    async fn test_fetch_status_non_200() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;
        let client = PracticumClient::with_client(format!("{}/", base), "secret-token", Client::new());

        let err = client.fetch_status(42).await.unwrap_err();
        assert!(matches!(err, ClientError::Upstream { status: 500, from_date: 42, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_status_non_200_skips_parsing() {
        let (base, server) = serve_once("404 Not Found", "not json at all").await;
        let client = PracticumClient::with_client(format!("{}/", base), "secret-token", Client::new());

        let err = client.fetch_status(42).await.unwrap_err();
        assert!(matches!(err, ClientError::Upstream { status: 404, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_status_soft_error() {
        let (base, server) = serve_once("200 OK", r#"{"code":"not_authenticated"}"#).await;
        let client = PracticumClient::with_client(format!("{}/", base), "secret-token", Client::new());

        let err = client.fetch_status(7).await.unwrap_err();
        match err {
            ClientError::Response { key, value, from_date, .. } => {
                assert_eq!(key, "code");
                assert_eq!(value, "not_authenticated");
                assert_eq!(from_date, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_status_invalid_json() {
        let (base, server) = serve_once("200 OK", "<html>").await;
        let client = PracticumClient::with_client(format!("{}/", base), "secret-token", Client::new());

        let err = client.fetch_status(7).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_status_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = format!("http://{}/", addr);
        let client = PracticumClient::with_client(endpoint.clone(), "secret-token", Client::new());

        let err = client.fetch_status(99).await.unwrap_err();
        assert!(matches!(err, ClientError::Connectivity { from_date: 99, .. }));
        assert!(err.is_transient());

        let text = err.to_string();
        assert!(text.contains(&endpoint));
        assert!(!text.contains("secret-token"));
    }
}
