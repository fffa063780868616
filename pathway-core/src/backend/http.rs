//! HTTP backend for the hosted recommendation service.
//!
//! All endpoints speak JSON. Failures are classified in a fixed priority
//! order by [`decode_response`]: transport errors outrank status-code
//! errors, which outrank body-parse errors.

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use pathway_models::{RecommendationResponse, UserAssessment};

use super::traits::RecommendBackend;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Structured error body the service sends for business failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the recommendation service's HTTP API.
///
/// One instance per configured base URL. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend from configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full career catalog.
    ///
    /// Opaque pass-through: callers get the service's JSON as-is, with no
    /// shape validation beyond "parses as JSON".
    pub async fn list_careers(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/careers").await
    }

    /// Fetch the career category catalog. Opaque pass-through.
    pub async fn list_categories(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/categories").await
    }

    /// Fetch the known-skills catalog. Opaque pass-through.
    pub async fn list_skills(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/skills").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(response).await
    }
}

#[async_trait]
impl RecommendBackend for HttpBackend {
    async fn submit_assessment(
        &self,
        assessment: &UserAssessment,
    ) -> Result<RecommendationResponse, ApiError> {
        let url = format!("{}/recommend", self.base_url);
        debug!(%url, skills = assessment.skills.len(), interests = assessment.interests.len(), "submitting assessment");
        let response = self
            .client
            .post(&url)
            .json(assessment)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(response).await
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "health probe failed");
                false
            }
        }
    }
}

/// Classify a service response.
///
/// Non-success statuses are inspected in order: a markup content type means
/// the service is up but fronted by an error page (no JSON parse is
/// attempted); a structured body with a `detail` field is a business error;
/// anything else is a bare server error. A success status whose body fails
/// to parse is a contract violation.
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let is_markup = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("text/html"));
        if is_markup {
            return Err(ApiError::ServiceUnavailable);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if let Ok(error) = serde_json::from_str::<ErrorBody>(&body) {
            return Err(ApiError::Application(error.detail));
        }
        return Err(ApiError::Server {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Protocol(e.to_string()))
}
