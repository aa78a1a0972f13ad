//! Search Pipeline Module
//!
//! The concurrency shell around the search engine: debounced search-as-you-type with
//! stale-result suppression.
//!
//! ## Architecture Overview
//! - A `watch` channel carries the query text; it only ever holds the latest value.
//! - A single driver task debounces edits, dispatches settled queries to tokio's blocking
//!   pool and publishes `SearchState` through a second `watch` channel.
//! - The inverted index is built once on the blocking pool and shared read-only via `Arc`.
//!
//! ## Submodules
//! - **`controller`**: `SearchController`, the handle the display layer talks to.
//! - **`types`**: `SearchConfig` tunables, the `QueryEdit` input and the published `SearchState`.

pub mod controller;
pub mod types;
