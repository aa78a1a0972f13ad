//! Search Module
//!
//! Full-text search over the hymn corpus.
//!
//! ## Overview
//! Every title, verse line and chorus line is tokenized into an inverted index once at
//! startup. Queries are tokenized the same way and answered by intersecting the buckets of
//! their tokens, so adding words to a query only ever narrows the result set.
//!
//! ## Submodules
//! - **`tokenizer`**: Splits text into distinct lower-case ASCII alphanumeric tokens.
//! - **`index`**: The build-once inverted index (`token -> hymn number -> passage`).
//! - **`engine`**: Multi-token AND query over the index, ordered by hymn number.
//! - **`types`**: `SearchResult`, the value published to the display layer.

pub mod engine;
pub mod index;
pub mod tokenizer;
pub mod types;
