//! Show the last stored assessment results.

use anyhow::Result;

use pathway_core::{ResultStore, SessionFileStore};

use crate::render;

/// Render the stored response, if there is one.
pub fn run() -> Result<()> {
    let store = SessionFileStore::new();
    match store.latest() {
        Some(response) => render::print_response(&response),
        None => println!("No stored results. Run `pathway assess` to take the assessment."),
    }
    Ok(())
}
