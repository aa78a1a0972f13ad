use super::index::SearchIndex;
use super::tokenizer::tokenize;
use super::types::SearchResult;

use std::collections::BTreeMap;

/// Runs `query` against `index`.
///
/// Every query token must match (AND semantics): the first token's bucket is intersected
/// with the bucket of each remaining token, an unindexed token contributing an empty set.
/// The passage reported for a hymn is the one recorded under the first token. Results are
/// ordered by ascending hymn number, one per hymn.
pub fn search(query: &str, index: &SearchIndex) -> Vec<SearchResult> {
    let tokens = tokenize(query);
    let Some((first, rest)) = tokens.split_first() else {
        return Vec::new();
    };

    let Some(first_bucket) = index.bucket(first) else {
        return Vec::new();
    };

    let mut matches: BTreeMap<u32, &str> = first_bucket
        .iter()
        .map(|(number, passage)| (*number, passage.as_str()))
        .collect();

    for token in rest {
        match index.bucket(token) {
            Some(bucket) => matches.retain(|number, _| bucket.contains_key(number)),
            None => matches.clear(),
        }
        if matches.is_empty() {
            break;
        }
    }

    // BTreeMap iteration yields ascending hymn numbers.
    matches
        .into_iter()
        .filter_map(|(number, passage)| {
            index.hymn(number).map(|hymn| SearchResult {
                hymn: hymn.clone(),
                matching_line: passage.to_string(),
            })
        })
        .collect()
}
