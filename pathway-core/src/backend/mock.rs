//! Mock backend for testing
//!
//! MockBackend scripts submit results and health probes so controller and
//! monitor logic can be tested deterministically, and counts calls so tests
//! can assert that no network request was issued.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use pathway_models::{RecommendationResponse, UserAssessment};

use super::traits::RecommendBackend;
use crate::error::ApiError;

/// Mock implementation of [`RecommendBackend`] for testing.
///
/// Queue results with [`queue_submit`](Self::queue_submit) and
/// [`queue_health`](Self::queue_health) before driving the component under
/// test; each call consumes one queued entry.
#[derive(Default)]
pub struct MockBackend {
    submit_results: Mutex<VecDeque<Result<RecommendationResponse, ApiError>>>,
    health_results: Mutex<VecDeque<bool>>,
    submit_delay: Mutex<Option<Duration>>,
    submit_calls: AtomicUsize,
    health_calls: AtomicUsize,
}

impl MockBackend {
    /// Create a mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `submit_assessment` call.
    pub fn queue_submit(&self, result: Result<RecommendationResponse, ApiError>) {
        self.submit_results.lock().unwrap().push_back(result);
    }

    /// Queue the result of the next `check_health` probe.
    pub fn queue_health(&self, healthy: bool) {
        self.health_results.lock().unwrap().push_back(healthy);
    }

    /// Delay every submit by `delay`, for exercising the pending state.
    pub fn set_submit_delay(&self, delay: Duration) {
        *self.submit_delay.lock().unwrap() = Some(delay);
    }

    /// How many times `submit_assessment` was called.
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    /// How many times `check_health` was called.
    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendBackend for MockBackend {
    async fn submit_assessment(
        &self,
        _assessment: &UserAssessment,
    ) -> Result<RecommendationResponse, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.submit_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.submit_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Network(
                    "no queued response in MockBackend".to_string(),
                ))
            })
    }

    async fn check_health(&self) -> bool {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health_results.lock().unwrap().pop_front().unwrap_or(false)
    }
}
