// HTTP client for the activities API
//
// One GET per page mount. The request carries a client-side timeout; there
// is no retry. Callers on the page path use `load_schedule`, which turns any
// failure into a logged error and an empty schedule.

use super::decode_schedule;
use crate::model::ScheduleEntry;
use std::fmt;
use std::time::Duration;

/// Errors that can occur while fetching activities
#[derive(Debug)]
pub enum FetchError {
    /// No base URL configured for the activities API
    MissingBaseUrl,
    /// Request did not complete within the configured timeout
    Timeout,
    /// Connection or transport error
    Network(String),
    /// Backend answered with a non-success status
    Status { status: u16, message: String },
    /// Body could not be decoded as an activities payload
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseUrl => write!(f, "Activities API base URL is not configured"),
            Self::Timeout => write!(f, "Activities request timed out"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "Activities API returned status {}", status)
                } else {
                    write!(f, "Activities API returned status {}: {}", status, message)
                }
            }
            Self::Decode(msg) => write!(f, "Invalid activities payload: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Maximum number of bytes of an error body kept in `FetchError::Status`
const MAX_ERROR_BODY: usize = 200;

/// Client for `GET {base}/activities`
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ActivitiesClient {
    /// Create a client for the given base URL
    ///
    /// A missing (or blank) base URL is accepted here; the fetch itself
    /// reports it as [`FetchError::MissingBaseUrl`].
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self { client, base_url })
    }

    /// Full URL of the activities endpoint
    pub fn endpoint(&self) -> Result<String, FetchError> {
        let base = self.base_url.as_ref().ok_or(FetchError::MissingBaseUrl)?;
        Ok(format!("{}/activities", base))
    }

    /// Fetch and decode the schedule
    pub async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>, FetchError> {
        let url = self.endpoint()?;
        tracing::debug!("Fetching activities from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = truncate_chars(body.trim(), MAX_ERROR_BODY);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let decoded = decode_schedule(payload)?;
        if decoded.skipped > 0 {
            tracing::warn!(
                "Loaded {} activities ({} skipped)",
                decoded.entries.len(),
                decoded.skipped
            );
        } else {
            tracing::info!("Loaded {} activities", decoded.entries.len());
        }

        Ok(decoded.entries)
    }
}

/// Fetch the schedule, logging any failure and falling back to an empty list
pub async fn load_schedule(client: &ActivitiesClient) -> Vec<ScheduleEntry> {
    match client.fetch_schedule().await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to fetch activities: {}", e);
            Vec::new()
        }
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_api;
    use axum::{http::StatusCode, routing::get, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Serve a router on an ephemeral local port, returning its base URL
    async fn spawn_router(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base: &str) -> ActivitiesClient {
        ActivitiesClient::new(Some(base.to_string()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = client_for("http://localhost:3000/");
        assert_eq!(
            client.endpoint().unwrap(),
            "http://localhost:3000/activities"
        );
    }

    #[test]
    fn test_blank_base_url_is_missing() {
        let client =
            ActivitiesClient::new(Some("   ".to_string()), Duration::from_secs(1)).unwrap();
        assert!(matches!(client.endpoint(), Err(FetchError::MissingBaseUrl)));
    }

    #[tokio::test]
    async fn test_fetch_from_demo_backend() {
        let base = spawn_router(demo_api::router(demo_api::fixture_activities())).await;
        let entries = client_for(&base).fetch_schedule().await.unwrap();

        let expected = demo_api::fixture_activities().as_array().unwrap().len();
        assert_eq!(entries.len(), expected);
        assert!(entries.iter().all(|e| e.name.contains(" - ")));
    }

    #[tokio::test]
    async fn test_fetch_maps_single_activity() {
        let payload = json!([{
            "activity_id": 5,
            "artist": "A",
            "activity_name": "Show",
            "activity_date": "2025-01-01",
            "place": "Hall"
        }]);
        let base = spawn_router(demo_api::router(payload)).await;

        let entries = client_for(&base).fetch_schedule().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 5);
        assert_eq!(entries[0].name, "A - Show");
        assert_eq!(entries[0].time, "2025-01-01");
        assert_eq!(entries[0].location, "Hall");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/activities",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        );
        let base = spawn_router(router).await;

        let result = client_for(&base).fetch_schedule().await;
        match result {
            Err(FetchError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let router = Router::new().route("/activities", get(|| async { "<html>oops</html>" }));
        let base = spawn_router(router).await;

        let result = client_for(&base).fetch_schedule().await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Reserve a port, then release it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(&format!("http://{}", addr))
            .fetch_schedule()
            .await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_load_schedule_swallows_errors() {
        let client = ActivitiesClient::new(None, Duration::from_secs(1)).unwrap();
        let entries = load_schedule(&client).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let router = Router::new().route(
            "/activities",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "[]"
            }),
        );
        let base = spawn_router(router).await;
        let client = ActivitiesClient::new(Some(base), Duration::from_millis(100)).unwrap();

        let result = client.fetch_schedule().await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            status: 404,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Activities API returned status 404");
    }
}
