//! Corpus Data Types
//!
//! The hymn model as it is stored in the bundled JSON resource.

use serde::{Deserialize, Serialize};

/// A single hymn.
///
/// `number` is unique within a corpus and is the identity used for deduplication,
/// ordering of search results and navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hymn {
    pub number: u32,
    pub title: String,
    pub verses: Vec<Verse>,
    pub chorus: Option<Chorus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verse {
    pub number: u32,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chorus {
    pub lines: Vec<String>,
}

impl Hymn {
    /// Every verse line in order, followed by the chorus lines (if any).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let verse_lines = self
            .verses
            .iter()
            .flat_map(|verse| verse.lines.iter().map(String::as_str));
        let chorus_lines = self
            .chorus
            .iter()
            .flat_map(|chorus| chorus.lines.iter().map(String::as_str));

        verse_lines.chain(chorus_lines)
    }
}
