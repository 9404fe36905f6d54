//! HTTP client for the activities backend, using the browser's fetch API
//! via gloo_net.

use gloo_net::http::Request;
use signup_board_core::{catalog_reply, mutation_reply, ActivityCatalog, ApiError};

/// Client for the activities backend
#[derive(Debug, Clone)]
pub struct ActivitiesApi {
    base: String,
}

impl ActivitiesApi {
    /// `base` is prepended to every path; empty means same-origin relative
    /// requests, like the page itself.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn activity_url(&self, name: &str, op: &str) -> String {
        // Activity names may contain spaces and punctuation
        let encoded: String = js_sys::encode_uri_component(name).into();
        format!("{}/activities/{}/{}", self.base, encoded, op)
    }

    /// Read the full activity snapshot
    pub async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = format!("{}/activities", self.base);
        tracing::debug!("GET {url}");

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        catalog_reply(&body)
    }

    /// Sign an email up for an activity
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.activity_url(activity, "signup");
        tracing::debug!("POST {url}");

        let resp = Request::post(&url)
            .query([("email", email)])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        mutation_reply(ok, &body)
    }

    /// Remove an email from an activity's roster
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.activity_url(activity, "unregister");
        tracing::debug!("DELETE {url}");

        let resp = Request::delete(&url)
            .query([("email", email)])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        mutation_reply(ok, &body)
    }
}
