//! Result hand-off across the navigation boundary
//!
//! The store owns the last [`RecommendationResponse`] between the
//! assessment flow and the results view. Reads are non-destructive; only a
//! retake clears it. `put` is infallible by design: a response arriving
//! after the consumer moved on is simply overwritten later.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use pathway_models::RecommendationResponse;

/// File name for the session-scoped response.
const RESULT_FILE: &str = "last_recommendations.json";

/// Transient hand-off of the last recommendation response.
///
/// Implementations differ only in lifetime; callers never see the backing
/// storage.
pub trait ResultStore: Send + Sync {
    /// Store a response, overwriting any prior one.
    fn put(&self, response: RecommendationResponse);

    /// The stored response, if any. Non-destructive.
    fn latest(&self) -> Option<RecommendationResponse>;

    /// Drop the stored response. Invoked by "retake assessment".
    fn clear(&self);
}

/// In-memory store; lives as long as the process.
#[derive(Default)]
pub struct MemoryResultStore {
    slot: RwLock<Option<RecommendationResponse>>,
}

impl MemoryResultStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn put(&self, response: RecommendationResponse) {
        *self.slot.write().unwrap() = Some(response);
    }

    fn latest(&self) -> Option<RecommendationResponse> {
        self.slot.read().unwrap().clone()
    }

    fn clear(&self) {
        *self.slot.write().unwrap() = None;
    }
}

/// File-backed store under the per-user state directory, so separate
/// `assess` and `results` invocations see the same response.
pub struct SessionFileStore {
    file_path: PathBuf,
}

impl SessionFileStore {
    /// Store rooted at the default pathway state directory.
    pub fn new() -> Self {
        Self::at(default_state_dir())
    }

    /// Store rooted at a specific directory.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            file_path: dir.as_ref().join(RESULT_FILE),
        }
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Default for SessionFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for SessionFileStore {
    fn put(&self, response: RecommendationResponse) {
        let json = match serde_json::to_string_pretty(&response) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize recommendations: {}", e);
                return;
            }
        };
        if let Some(parent) = self.file_path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("failed to create state directory: {}", e);
            return;
        }
        if let Err(e) = fs::write(&self.file_path, json) {
            warn!("failed to persist recommendations: {}", e);
        }
    }

    fn latest(&self) -> Option<RecommendationResponse> {
        let content = fs::read_to_string(&self.file_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(response) => Some(response),
            Err(e) => {
                warn!("discarding unreadable stored recommendations: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.file_path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!("failed to clear stored recommendations: {}", e);
        }
    }
}

/// Per-user state directory for pathway.
///
/// `$XDG_STATE_HOME/pathway` where the platform has one, with local-data
/// and temp-dir fallbacks.
fn default_state_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("pathway")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_models::{CareerRecommendation, UserAssessment};

    fn sample_response() -> RecommendationResponse {
        RecommendationResponse {
            recommendations: vec![
                CareerRecommendation {
                    id: 1,
                    title: "Data Analyst".to_string(),
                    category: "Technology".to_string(),
                    description: "d".to_string(),
                    match_score: 0.92,
                    matched_skills: vec![],
                    missing_skills: vec![],
                    experience_level: "Entry Level (0-2 years)".to_string(),
                    salary_range: "$60,000 - $85,000".to_string(),
                    education: "Bachelor's".to_string(),
                },
                CareerRecommendation {
                    id: 2,
                    title: "Software Engineer".to_string(),
                    category: "Technology".to_string(),
                    description: "d".to_string(),
                    match_score: 0.78,
                    matched_skills: vec![],
                    missing_skills: vec![],
                    experience_level: "Entry Level (0-2 years)".to_string(),
                    salary_range: "$70,000 - $95,000".to_string(),
                    education: "Bachelor's".to_string(),
                },
            ],
            total_careers_analyzed: 27,
            user_profile: UserAssessment::new(),
        }
    }

    // ==================== MemoryResultStore Tests ====================

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryResultStore::new();
        assert!(store.latest().is_none());
    }

    #[test]
    fn memory_store_read_is_non_destructive() {
        let store = MemoryResultStore::new();
        store.put(sample_response());

        assert!(store.latest().is_some());
        assert!(store.latest().is_some());
    }

    #[test]
    fn memory_store_put_overwrites() {
        let store = MemoryResultStore::new();
        store.put(sample_response());

        let mut second = sample_response();
        second.total_careers_analyzed = 99;
        store.put(second);

        assert_eq!(store.latest().unwrap().total_careers_analyzed, 99);
    }

    #[test]
    fn memory_store_clear_drops_response() {
        let store = MemoryResultStore::new();
        store.put(sample_response());
        store.clear();
        assert!(store.latest().is_none());
    }

    // ==================== SessionFileStore Tests ====================

    #[test]
    fn file_store_roundtrip_preserves_ranking_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionFileStore::at(dir.path());

        store.put(sample_response());
        let loaded = store.latest().expect("response should persist");

        let titles: Vec<_> = loaded
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Data Analyst", "Software Engineer"]);
        assert_eq!(loaded, sample_response());
    }

    #[test]
    fn file_store_survives_separate_instances() {
        let dir = tempfile::tempdir().unwrap();
        SessionFileStore::at(dir.path()).put(sample_response());

        let second = SessionFileStore::at(dir.path());
        assert!(second.latest().is_some());
    }

    #[test]
    fn file_store_latest_on_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionFileStore::at(dir.path());
        assert!(store.latest().is_none());
    }

    #[test]
    fn file_store_discards_corrupt_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionFileStore::at(dir.path());
        fs::write(store.file_path(), "not json").unwrap();

        assert!(store.latest().is_none());
    }

    #[test]
    fn file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionFileStore::at(dir.path());
        store.put(sample_response());

        store.clear();

        assert!(store.latest().is_none());
        assert!(!store.file_path().exists());
    }

    #[test]
    fn file_store_clear_on_missing_file_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionFileStore::at(dir.path());
        store.clear();
    }
}
