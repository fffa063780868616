//! Core types for the recommendation contract.

use serde::{Deserialize, Serialize};

/// A user's self-reported profile, built up by the assessment flow and
/// submitted to the recommendation service.
///
/// Selection order is preserved for display; membership is what matters
/// for scoring.
///
/// # Examples
///
/// ```
/// use pathway_models::UserAssessment;
///
/// let mut assessment = UserAssessment::new();
/// assert!(!assessment.is_submittable());
///
/// assessment.skills.push("Python".to_string());
/// assessment.experience_level = "Entry Level (0-2 years)".to_string();
/// assert!(assessment.is_submittable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAssessment {
    /// Skills the user already has.
    pub skills: Vec<String>,
    /// Areas the user is interested in.
    pub interests: Vec<String>,
    /// One of a fixed set of experience levels, or empty while drafting.
    pub experience_level: String,
    /// Career categories the user prefers (optional).
    pub preferred_categories: Vec<String>,
}

impl UserAssessment {
    /// Create an empty assessment draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the profile satisfies the submission invariant: at least
    /// one skill or interest, and a non-empty experience level.
    pub fn is_submittable(&self) -> bool {
        (!self.skills.is_empty() || !self.interests.is_empty())
            && !self.experience_level.is_empty()
    }
}

/// How strongly a career matched, banded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    /// Score of 0.8 or higher.
    Excellent,
    /// Score of 0.6 or higher.
    Good,
    /// Score of 0.4 or higher.
    Fair,
    /// Anything below 0.4.
    Low,
}

impl MatchBand {
    /// Human-readable label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent Match",
            MatchBand::Good => "Good Match",
            MatchBand::Fair => "Fair Match",
            MatchBand::Low => "Low Match",
        }
    }
}

/// A single scored career returned by the service.
///
/// The salary, education, and experience fields are free-form strings the
/// service controls; clients display them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    /// Service-assigned career identifier.
    pub id: i64,
    /// Career title.
    pub title: String,
    /// Career category.
    pub category: String,
    /// Short description of the career.
    pub description: String,
    /// Match score in `[0, 1]`, higher is better.
    pub match_score: f64,
    /// Skills from the profile that the career requires.
    pub matched_skills: Vec<String>,
    /// Required skills missing from the profile.
    pub missing_skills: Vec<String>,
    /// Experience level the career expects.
    pub experience_level: String,
    /// Typical salary range.
    pub salary_range: String,
    /// Typical education requirement.
    pub education: String,
}

impl CareerRecommendation {
    /// Band the match score for display.
    pub fn match_band(&self) -> MatchBand {
        if self.match_score >= 0.8 {
            MatchBand::Excellent
        } else if self.match_score >= 0.6 {
            MatchBand::Good
        } else if self.match_score >= 0.4 {
            MatchBand::Fair
        } else {
            MatchBand::Low
        }
    }

    /// Match score as a whole percentage.
    pub fn match_percent(&self) -> u32 {
        (self.match_score * 100.0).round() as u32
    }
}

/// The service's answer to a submitted assessment.
///
/// `recommendations` is ranked highest-match first; the order is
/// significant and must survive storage and display unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Ranked career matches.
    pub recommendations: Vec<CareerRecommendation>,
    /// How many careers the service scored to produce the ranking.
    pub total_careers_analyzed: i64,
    /// Echo of the submitted profile.
    pub user_profile: UserAssessment,
}
