use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("token pattern is valid"));

/// Splits `text` into its distinct, lower-cased tokens.
///
/// A token is a maximal run of ASCII letters and digits; everything else separates
/// tokens. Duplicates collapse to one token, and the tokens come back in order of
/// first appearance so the "first token" of a query is well-defined.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    WORD.find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
