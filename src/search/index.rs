//! Inverted Index
//!
//! Maps every token in the corpus to the hymns containing it. Each bucket is a keyed set
//! `hymn number -> passage text`: a hymn is present at most once per token, and the first
//! passage inserted for it is the one kept. Titles are indexed before verse lines, and verse
//! lines before chorus lines, so a title that shares a token with a line wins.
//!
//! The index is built once from the whole corpus and is read-only afterwards; share it
//! behind an `Arc` without locking.

use super::tokenizer::tokenize;
use crate::corpus::types::Hymn;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Passages for one token, ordered by hymn number.
pub type Bucket = BTreeMap<u32, String>;

#[derive(Debug, Default)]
pub struct SearchIndex {
    postings: HashMap<String, Bucket>,
    hymns: HashMap<u32, Arc<Hymn>>,
}

impl SearchIndex {
    /// Builds the index in a single pass over `corpus`.
    pub fn build(corpus: &[Arc<Hymn>]) -> Self {
        let mut index = Self::default();

        for hymn in corpus {
            index
                .hymns
                .entry(hymn.number)
                .or_insert_with(|| hymn.clone());

            index.insert_passage(hymn.number, &hymn.title, || hymn.title.clone());
            for line in hymn.lines() {
                index.insert_passage(hymn.number, line, || format!("...{}...", line));
            }
        }

        tracing::debug!(
            "Indexed {} hymns into {} tokens",
            index.hymns.len(),
            index.postings.len()
        );
        index
    }

    fn insert_passage(&mut self, number: u32, text: &str, passage: impl Fn() -> String) {
        for token in tokenize(text) {
            self.postings
                .entry(token)
                .or_default()
                .entry(number)
                .or_insert_with(&passage);
        }
    }

    pub fn bucket(&self, token: &str) -> Option<&Bucket> {
        self.postings.get(token)
    }

    pub fn hymn(&self, number: u32) -> Option<&Arc<Hymn>> {
        self.hymns.get(&number)
    }

    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    pub fn hymn_count(&self) -> usize {
        self.hymns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
