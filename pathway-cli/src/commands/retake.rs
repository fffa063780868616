//! Discard stored results so the next assessment starts fresh.

use anyhow::Result;

use pathway_core::{ResultStore, SessionFileStore};

pub fn run() -> Result<()> {
    let store = SessionFileStore::new();
    if store.latest().is_some() {
        store.clear();
        println!("Stored results cleared.");
    } else {
        println!("Nothing to clear.");
    }
    println!("Run `pathway assess` to take the assessment.");
    Ok(())
}
