//! Assessment draft state machine
//!
//! The controller owns the in-progress [`UserAssessment`], validates it
//! before submission, and hands successful responses to the result store.
//! Overlapping submits are prevented by a pending flag checked
//! synchronously before any network call; no lock is held across an await.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use pathway_models::UserAssessment;

use crate::backend::RecommendBackend;
use crate::error::ApiError;
use crate::store::ResultStore;

/// Submission state, driven by [`AssessmentController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    /// Draft is editable, nothing in flight.
    Idle,
    /// A submit is in flight; further submits are no-ops.
    Pending,
    /// The last submit failed; the draft is intact.
    Failed { message: String },
    /// The last submit succeeded and the response is in the store.
    Submitted,
}

/// Outcome of a single [`AssessmentController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Response stored; the caller should navigate to results.
    Submitted,
    /// Local validation rejected the draft; nothing was sent.
    Invalid { message: String },
    /// The service call failed; `message` is the user-facing template.
    Failed { message: String },
    /// Another submit was already in flight; nothing was sent.
    AlreadyPending,
}

/// Owns the draft profile and drives the submit flow.
pub struct AssessmentController {
    backend: Arc<dyn RecommendBackend>,
    store: Arc<dyn ResultStore>,
    draft: RwLock<UserAssessment>,
    state: RwLock<SubmitState>,
}

impl AssessmentController {
    /// Controller with an empty draft.
    pub fn new(backend: Arc<dyn RecommendBackend>, store: Arc<dyn ResultStore>) -> Self {
        Self {
            backend,
            store,
            draft: RwLock::new(UserAssessment::new()),
            state: RwLock::new(SubmitState::Idle),
        }
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> UserAssessment {
        self.draft.read().unwrap().clone()
    }

    /// Current submission state.
    pub fn state(&self) -> SubmitState {
        self.state.read().unwrap().clone()
    }

    /// Add the skill if absent, remove it if present.
    pub fn toggle_skill(&self, skill: &str) {
        toggle(&mut self.draft.write().unwrap().skills, skill);
    }

    /// Add the interest if absent, remove it if present.
    pub fn toggle_interest(&self, interest: &str) {
        toggle(&mut self.draft.write().unwrap().interests, interest);
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&self, category: &str) {
        toggle(&mut self.draft.write().unwrap().preferred_categories, category);
    }

    /// Overwrite the experience level; selecting a second level replaces
    /// the first.
    pub fn set_experience_level(&self, level: &str) {
        self.draft.write().unwrap().experience_level = level.to_string();
    }

    /// Validate and submit the draft.
    ///
    /// The pending check and validation run synchronously before anything
    /// touches the network: an in-flight submit makes this call a no-op,
    /// and an invalid draft is rejected locally. On success the response is
    /// written to the result store; on failure the draft is left intact so
    /// the user keeps their selections.
    pub async fn submit(&self) -> SubmitOutcome {
        let assessment = {
            let mut state = self.state.write().unwrap();
            if *state == SubmitState::Pending {
                debug!("submit ignored: another submit is pending");
                return SubmitOutcome::AlreadyPending;
            }
            let draft = self.draft.read().unwrap();
            if let Err(error) = validate(&draft) {
                let message = error.user_message();
                *state = SubmitState::Failed {
                    message: message.clone(),
                };
                return SubmitOutcome::Invalid { message };
            }
            *state = SubmitState::Pending;
            draft.clone()
        };

        match self.backend.submit_assessment(&assessment).await {
            Ok(response) => {
                debug!(
                    recommendations = response.recommendations.len(),
                    "assessment submitted"
                );
                self.store.put(response);
                *self.state.write().unwrap() = SubmitState::Submitted;
                SubmitOutcome::Submitted
            }
            Err(error) => {
                let message = error.user_message();
                warn!(error = %error, "assessment submit failed");
                *self.state.write().unwrap() = SubmitState::Failed {
                    message: message.clone(),
                };
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Discard the stored response and reset the draft for a fresh run.
    pub fn retake(&self) {
        self.store.clear();
        *self.draft.write().unwrap() = UserAssessment::new();
        *self.state.write().unwrap() = SubmitState::Idle;
    }
}

/// Symmetric-difference toggle on a selection list, preserving the
/// insertion order of what remains.
fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(idx) = selection.iter().position(|v| v == value) {
        selection.remove(idx);
    } else {
        selection.push(value.to_string());
    }
}

/// The submission invariant: at least one skill or interest, and an
/// experience level.
fn validate(assessment: &UserAssessment) -> Result<(), ApiError> {
    if assessment.skills.is_empty() && assessment.interests.is_empty() {
        return Err(ApiError::Validation(
            "Please select at least one skill or interest.".to_string(),
        ));
    }
    if assessment.experience_level.is_empty() {
        return Err(ApiError::Validation(
            "Please select your experience level.".to_string(),
        ));
    }
    Ok(())
}
