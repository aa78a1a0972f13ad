//! Corpus Loader
//!
//! Reads the bundled hymn collection (a JSON array of hymns). Unknown keys are ignored
//! so that the resource can carry extra presentation fields.
//!
//! Failures are reported as `anyhow::Error` with context. Callers that must never fail
//! (the search pipeline at startup) use [`load_hymns_or_empty`], which logs the error and
//! yields an empty corpus instead of a partial one.

use super::types::Hymn;

use anyhow::{Context, Result};
use std::path::Path;

/// Parses a JSON array of hymns.
pub fn parse_hymns(json: &str) -> Result<Vec<Hymn>> {
    let hymns: Vec<Hymn> =
        serde_json::from_str(json).context("Failed to parse hymn collection JSON")?;
    Ok(hymns)
}

/// Reads and parses the hymn collection stored at `path`.
pub fn load_hymns(path: &Path) -> Result<Vec<Hymn>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hymn collection {}", path.display()))?;

    let hymns = parse_hymns(&json)
        .with_context(|| format!("Invalid hymn collection {}", path.display()))?;

    tracing::info!("Loaded {} hymns from {}", hymns.len(), path.display());
    Ok(hymns)
}

/// Like [`load_hymns`], but any failure is logged and treated as an empty corpus.
pub fn load_hymns_or_empty(path: &Path) -> Vec<Hymn> {
    match load_hymns(path) {
        Ok(hymns) => hymns,
        Err(e) => {
            tracing::error!("Corpus unavailable, continuing with no hymns: {:#}", e);
            Vec::new()
        }
    }
}
