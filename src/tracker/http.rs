//! tracker::http
//!
//! REST implementation of [`WorkItemTracker`].
//!
//! Requests go to `{service_url}[/{project}]/_apis/wit/workitems/{id}` with
//! basic auth (empty user, token as password).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::traits::{TrackerError, WorkItem, WorkItemTracker};

/// REST API version sent with every request.
pub const API_VERSION: &str = "1.0";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "witx-cli";

/// HTTP work tracking client.
pub struct HttpTracker {
    client: Client,
    service_url: String,
    project: Option<String>,
    token: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for HttpTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTracker")
            .field("service_url", &self.service_url)
            .field("project", &self.project)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

impl HttpTracker {
    pub fn new(service_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            service_url: service_url.into().trim_end_matches('/').to_string(),
            project: None,
            token: token.into(),
        }
    }

    /// Scope requests to a project.
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project.filter(|p| !p.is_empty());
        self
    }

    fn work_item_url(&self, id: i64) -> String {
        match &self.project {
            Some(project) => format!(
                "{}/{}/_apis/wit/workitems/{}",
                self.service_url, project, id
            ),
            None => format!("{}/_apis/wit/workitems/{}", self.service_url, id),
        }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, TrackerError> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| TrackerError::Api {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            });
        }

        let message = match response.json::<ApiErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => TrackerError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN => TrackerError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => TrackerError::NotFound(message),
            _ => TrackerError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl WorkItemTracker for HttpTracker {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_work_item(&self, id: i64) -> Result<WorkItem, TrackerError> {
        let response = self
            .client
            .get(self.work_item_url(id))
            .query(&[("api-version", API_VERSION)])
            .headers(Self::headers())
            .basic_auth("", Some(&self.token))
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_project() {
        let t = HttpTracker::new("https://dev.example.test/org/", "tok");
        assert_eq!(
            t.work_item_url(5),
            "https://dev.example.test/org/_apis/wit/workitems/5"
        );
    }

    #[test]
    fn url_with_project() {
        let t = HttpTracker::new("https://dev.example.test/org", "tok")
            .with_project(Some("Fabrikam".into()));
        assert_eq!(
            t.work_item_url(5),
            "https://dev.example.test/org/Fabrikam/_apis/wit/workitems/5"
        );
    }

    #[test]
    fn empty_project_is_ignored() {
        let t = HttpTracker::new("https://x.test", "tok").with_project(Some(String::new()));
        assert_eq!(t.work_item_url(1), "https://x.test/_apis/wit/workitems/1");
    }

    #[test]
    fn debug_redacts_token() {
        let t = HttpTracker::new("https://x.test", "super-secret");
        let debug = format!("{:?}", t);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_token: true"));
    }
}
