//! Hymn Corpus Module
//!
//! The static, bundled collection of hymns that everything else reads from.
//!
//! ## Overview
//! The corpus is loaded once at startup from a JSON array and never mutated afterwards.
//! Hymn `number` is the natural key: it identifies a hymn across search results,
//! the number pad and the detail pager, and it need not match the hymn's position.
//!
//! ## Submodules
//! - **`types`**: The corpus model (`Hymn`, `Verse`, `Chorus`).
//! - **`loader`**: JSON parsing and file loading with a lenient "empty on failure" variant.
//! - **`catalog`**: Number-to-position lookup, number-pad entry parsing and selection state.
//! - **`format`**: Plain-text rendering of a hymn for display.

pub mod catalog;
pub mod format;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
