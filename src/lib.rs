//! Hymnal Search Library
//!
//! The core of a hymnal application: a static hymn collection, an in-memory inverted index
//! over it, and a debounced search-as-you-type pipeline. It serves as the foundation for the
//! `hymnal` binary (`main.rs`).
//!
//! ## Modules
//! - **`corpus`**: The hymn model, the JSON loader, lookup by number and plain-text rendering.
//! - **`search`**: Tokenizer, the build-once inverted index and the AND query engine.
//! - **`pipeline`**: The concurrency shell. Debounces query edits, runs searches on the
//!   blocking pool and publishes only the latest results.
//! - **`config`**: Command-line configuration.

pub mod config;
pub mod corpus;
pub mod pipeline;
pub mod search;
