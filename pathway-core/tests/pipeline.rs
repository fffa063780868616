//! End-to-end tests for the assessment pipeline
//!
//! These tests wire the controller, store, and monitor together the way the
//! CLI does, validating:
//! - A submitted response crosses the navigation boundary via the file store
//! - The monitor's probe task and an in-flight submit do not affect each other

use std::sync::Arc;
use std::time::Duration;

use pathway_core::{
    ApiError, AssessmentController, AvailabilityMonitor, AvailabilityStatus, MemoryResultStore,
    MockBackend, ResultStore, SessionFileStore, SubmitOutcome,
};
use pathway_models::{CareerRecommendation, RecommendationResponse, UserAssessment};

fn sample_response() -> RecommendationResponse {
    RecommendationResponse {
        recommendations: vec![
            CareerRecommendation {
                id: 1,
                title: "Data Analyst".to_string(),
                category: "Technology".to_string(),
                description: "Analyze data to help businesses make decisions".to_string(),
                match_score: 0.92,
                matched_skills: vec!["Python".to_string(), "SQL".to_string()],
                missing_skills: vec!["Statistics".to_string()],
                experience_level: "Entry Level (0-2 years)".to_string(),
                salary_range: "$60,000 - $85,000".to_string(),
                education: "Bachelor's degree".to_string(),
            },
            CareerRecommendation {
                id: 7,
                title: "Software Engineer".to_string(),
                category: "Technology".to_string(),
                description: "Build software systems".to_string(),
                match_score: 0.78,
                matched_skills: vec!["Python".to_string()],
                missing_skills: vec!["C++".to_string()],
                experience_level: "Entry Level (0-2 years)".to_string(),
                salary_range: "$70,000 - $95,000".to_string(),
                education: "Bachelor's degree".to_string(),
            },
        ],
        total_careers_analyzed: 27,
        user_profile: UserAssessment {
            skills: vec!["Python".to_string(), "SQL".to_string()],
            interests: vec![],
            experience_level: "Entry Level (0-2 years)".to_string(),
            preferred_categories: vec![],
        },
    }
}

#[tokio::test]
async fn submitted_response_crosses_the_navigation_boundary() {
    let dir = tempfile::tempdir().unwrap();

    // "Assessment page": build a profile and submit it.
    {
        let backend = Arc::new(MockBackend::new());
        backend.queue_submit(Ok(sample_response()));
        let store = Arc::new(SessionFileStore::at(dir.path()));
        let controller = AssessmentController::new(backend, store);

        controller.toggle_skill("Python");
        controller.toggle_skill("SQL");
        controller.set_experience_level("Entry Level (0-2 years)");

        assert_eq!(controller.submit().await, SubmitOutcome::Submitted);
    }

    // "Results page": a fresh store instance sees the same response, in
    // the same ranked order, and a read does not consume it.
    let store = SessionFileStore::at(dir.path());
    let first_read = store.latest().expect("response should survive navigation");
    let titles: Vec<_> = first_read
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Data Analyst", "Software Engineer"]);
    assert_eq!(store.latest(), Some(sample_response()));

    // "Retake": clearing removes it for every later reader.
    store.clear();
    assert!(SessionFileStore::at(dir.path()).latest().is_none());
}

#[tokio::test]
async fn health_probes_do_not_disturb_an_inflight_submit() {
    let submit_backend = Arc::new(MockBackend::new());
    submit_backend.set_submit_delay(Duration::from_millis(60));
    submit_backend.queue_submit(Ok(sample_response()));

    let probe_backend = Arc::new(MockBackend::new());
    for healthy in [true, false, true, false, true] {
        probe_backend.queue_health(healthy);
    }

    let store = Arc::new(MemoryResultStore::new());
    let controller = Arc::new(AssessmentController::new(submit_backend, store.clone()));
    controller.toggle_interest("Data Science");
    controller.set_experience_level("Mid Level (3-5 years)");

    // Probe aggressively while the submit is in flight.
    let mut monitor = AvailabilityMonitor::with_interval(probe_backend, Duration::from_millis(5));
    monitor.start();

    let outcome = controller.submit().await;
    monitor.stop();

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert!(store.latest().is_some());
}

#[tokio::test]
async fn failed_submit_leaves_prior_results_untouched() {
    let backend = Arc::new(MockBackend::new());
    backend.queue_submit(Ok(sample_response()));
    backend.queue_submit(Err(ApiError::ServiceUnavailable));

    let store = Arc::new(MemoryResultStore::new());
    let controller = AssessmentController::new(backend, store.clone());
    controller.toggle_skill("Python");
    controller.set_experience_level("Entry Level (0-2 years)");

    assert_eq!(controller.submit().await, SubmitOutcome::Submitted);
    assert!(matches!(
        controller.submit().await,
        SubmitOutcome::Failed { .. }
    ));

    // The stored response from the successful submit is still readable.
    assert_eq!(store.latest(), Some(sample_response()));
}

#[tokio::test]
async fn monitor_reports_offline_service_while_submits_still_classify() {
    let backend = Arc::new(MockBackend::new());
    backend.queue_health(false);
    backend.queue_submit(Err(ApiError::Network("connection refused".to_string())));

    let mut monitor =
        AvailabilityMonitor::with_interval(backend.clone(), Duration::from_secs(600));
    let mut events = monitor.subscribe();
    monitor.start();

    let probe = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("probe should complete")
        .unwrap();
    assert_eq!(probe.status, AvailabilityStatus::Offline);

    let store = Arc::new(MemoryResultStore::new());
    let controller = AssessmentController::new(backend, store);
    controller.toggle_skill("Python");
    controller.set_experience_level("Entry Level (0-2 years)");

    match controller.submit().await {
        SubmitOutcome::Failed { message } => {
            assert!(message.starts_with("Unable to connect to the server"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    monitor.stop();
}
