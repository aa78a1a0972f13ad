use crate::corpus::types::Hymn;

use serde::Serialize;
use std::sync::Arc;

/// One matching hymn for a query, with the passage that matched.
///
/// `matching_line` is the title verbatim, or a verse/chorus line wrapped as `"...<line>..."`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResult {
    pub hymn: Arc<Hymn>,
    pub matching_line: String,
}

impl SearchResult {
    pub fn number(&self) -> u32 {
        self.hymn.number
    }
}
