//! Data shapes for the Pathway career-recommendation service.
//!
//! These types mirror the service's wire contract exactly: an assessment
//! profile goes out as JSON, a ranked list of recommendations comes back.
//! Behavior lives elsewhere (pathway-core); this crate only provides
//! construction and inspection helpers plus serde.

mod types;

pub use types::{CareerRecommendation, MatchBand, RecommendationResponse, UserAssessment};
