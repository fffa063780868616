//! pathway-core: the client-side interaction pipeline for the Pathway
//! career-recommendation service.
//!
//! This crate provides the stateful components between the user's input and
//! the remote scoring service:
//!
//! - **Remote backend** - [`HttpBackend`] wraps the service's HTTP API and
//!   classifies every failure into an [`ApiError`]
//! - **Availability monitor** - [`AvailabilityMonitor`] probes `/health` on
//!   a timer and keeps a tri-state status current
//! - **Assessment controller** - [`AssessmentController`] owns the draft
//!   profile, validates it, submits it, and hands the result to the store
//! - **Result store** - [`ResultStore`] carries the last response across
//!   the navigation boundary between assessment and results
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use pathway_core::{ApiConfig, AssessmentController, HttpBackend, MemoryResultStore};
//!
//! # async fn example() {
//! let backend = Arc::new(HttpBackend::new(ApiConfig::from_env()));
//! let store = Arc::new(MemoryResultStore::new());
//! let controller = AssessmentController::new(backend, store.clone());
//!
//! controller.toggle_skill("Python");
//! controller.set_experience_level("Entry Level (0-2 years)");
//! let outcome = controller.submit().await;
//! println!("{outcome:?}");
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod monitor;
pub mod store;

// Re-export key types for convenience
pub use backend::{HttpBackend, MockBackend, RecommendBackend};
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use controller::{AssessmentController, SubmitOutcome, SubmitState};
pub use error::ApiError;
pub use monitor::{Availability, AvailabilityMonitor, AvailabilityStatus, PROBE_INTERVAL};
pub use store::{MemoryResultStore, ResultStore, SessionFileStore};
