//! RecommendBackend trait

use async_trait::async_trait;
use pathway_models::{RecommendationResponse, UserAssessment};

use crate::error::ApiError;

/// Trait for recommendation service backends.
///
/// The assessment controller and the availability monitor only see this
/// surface; implementations handle the actual communication with the
/// scoring service.
#[async_trait]
pub trait RecommendBackend: Send + Sync {
    /// Submit an assessment and return the ranked recommendations.
    ///
    /// Callers validate the assessment first. An invalid profile is still
    /// forwarded as-is - the backend never rejects input itself, it only
    /// classifies whatever the service answers.
    async fn submit_assessment(
        &self,
        assessment: &UserAssessment,
    ) -> Result<RecommendationResponse, ApiError>;

    /// Probe service health.
    ///
    /// Never fails: an unreachable or erroring service reads as `false`.
    async fn check_health(&self) -> bool;
}
