//! Corpus Module Tests
//!
//! ## Test Scopes
//! - **Loader**: JSON shape, unknown keys, missing/invalid files.
//! - **Catalog**: Number-to-position lookup, number-pad parsing and selection bounds.
//! - **Format**: Plain-text rendering of a hymn.

#[cfg(test)]
mod tests {
    use crate::corpus::catalog::{parse_hymn_number, HymnCatalog, HymnSelection};
    use crate::corpus::format::{format_hymn, format_listing};
    use crate::corpus::loader::{load_hymns, load_hymns_or_empty, parse_hymns};
    use crate::corpus::types::{Chorus, Hymn, Verse};
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "number": 108,
            "title": "Amazing Grace",
            "verses": [
                { "number": 1, "lines": ["Amazing grace! how sweet the sound", "That saved a wretch like me!"] }
            ],
            "chorus": null
        },
        {
            "number": 4,
            "title": "Blessed Assurance",
            "author": "Fanny Crosby",
            "verses": [
                { "number": 1, "lines": ["Blessed assurance, Jesus is mine!"] }
            ],
            "chorus": { "lines": ["This is my story, this is my song"] }
        },
        {
            "number": 12,
            "title": "Abide With Me",
            "verses": []
        }
    ]"#;

    fn sample_hymn() -> Hymn {
        Hymn {
            number: 4,
            title: "Blessed Assurance".to_string(),
            verses: vec![
                Verse {
                    number: 1,
                    lines: vec![
                        "Blessed assurance, Jesus is mine!".to_string(),
                        "O what a foretaste of glory divine!".to_string(),
                    ],
                },
                Verse {
                    number: 2,
                    lines: vec!["Perfect submission, perfect delight".to_string()],
                },
            ],
            chorus: Some(Chorus {
                lines: vec!["This is my story, this is my song".to_string()],
            }),
        }
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_parse_hymns_keeps_order_and_ignores_unknown_keys() {
        let hymns = parse_hymns(SAMPLE).expect("sample should parse");

        let numbers: Vec<u32> = hymns.iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![108, 4, 12]);

        assert!(hymns[0].chorus.is_none());
        assert_eq!(hymns[1].chorus.as_ref().unwrap().lines.len(), 1);
        // Missing "chorus" key is the same as null.
        assert!(hymns[2].chorus.is_none());
        assert!(hymns[2].verses.is_empty());
    }

    #[test]
    fn test_parse_hymns_rejects_malformed_json() {
        let result = parse_hymns(r#"[{ "number": "one", "title": 3 }]"#);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse hymn collection JSON"));
    }

    #[test]
    fn test_load_hymns_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let hymns = load_hymns(file.path()).unwrap();
        assert_eq!(hymns.len(), 3);
    }

    #[test]
    fn test_bundled_collection_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/hymns.json");

        let catalog = HymnCatalog::new(load_hymns(&path).unwrap());
        assert!(!catalog.is_empty());
        assert_eq!(catalog.by_number(108).unwrap().title, "Amazing Grace");
    }

    #[test]
    fn test_load_hymns_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_hymns(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read hymn collection"));
    }

    #[test]
    fn test_load_hymns_or_empty_absorbs_failures() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_hymns_or_empty(&dir.path().join("missing.json")).is_empty());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_hymns_or_empty(file.path()).is_empty());
    }

    // ============================================================
    // CATALOG TESTS
    // ============================================================

    #[test]
    fn test_catalog_position_is_corpus_order_not_number() {
        let catalog = HymnCatalog::new(parse_hymns(SAMPLE).unwrap());

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of(108), Some(0));
        assert_eq!(catalog.position_of(4), Some(1));
        assert_eq!(catalog.position_of(12), Some(2));
        assert_eq!(catalog.position_of(1), None);

        assert_eq!(catalog.by_number(4).unwrap().title, "Blessed Assurance");
        assert_eq!(catalog.hymn_at(2).unwrap().number, 12);
        assert!(catalog.hymn_at(3).is_none());
    }

    #[test]
    fn test_catalog_duplicate_number_resolves_to_first() {
        let mut first = sample_hymn();
        first.title = "First".to_string();
        let mut second = sample_hymn();
        second.title = "Second".to_string();

        let catalog = HymnCatalog::new(vec![first, second]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position_of(4), Some(0));
        assert_eq!(catalog.by_number(4).unwrap().title, "First");
    }

    #[test]
    fn test_parse_hymn_number() {
        assert_eq!(parse_hymn_number("7"), Some(7));
        assert_eq!(parse_hymn_number("108"), Some(108));
        assert_eq!(parse_hymn_number(" 42 "), Some(42));
        assert_eq!(parse_hymn_number("007"), Some(7));

        assert_eq!(parse_hymn_number(""), None);
        assert_eq!(parse_hymn_number("1000"), None);
        assert_eq!(parse_hymn_number("12a"), None);
        assert_eq!(parse_hymn_number("-1"), None);
        assert_eq!(parse_hymn_number("+1"), None);
    }

    #[test]
    fn test_selection_bounds_and_clear() {
        let catalog = HymnCatalog::new(parse_hymns(SAMPLE).unwrap());
        let mut selection = HymnSelection::default();

        assert_eq!(selection.selected(), None);

        assert!(selection.select(2, &catalog));
        assert_eq!(selection.selected(), Some(2));

        // Out of range leaves the previous selection untouched.
        assert!(!selection.select(3, &catalog));
        assert_eq!(selection.selected(), Some(2));

        selection.clear();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_selection_jump_to_number() {
        let catalog = HymnCatalog::new(parse_hymns(SAMPLE).unwrap());
        let mut selection = HymnSelection::default();

        assert!(selection.jump_to(12, &catalog));
        assert_eq!(selection.selected(), Some(2));

        assert!(!selection.jump_to(999, &catalog));
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn test_hymn_lines_include_chorus_last() {
        let hymn = sample_hymn();
        let lines: Vec<&str> = hymn.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Blessed assurance, Jesus is mine!");
        assert_eq!(lines[3], "This is my story, this is my song");
    }

    // ============================================================
    // FORMAT TESTS
    // ============================================================

    #[test]
    fn test_format_hymn() {
        let text = format_hymn(&sample_hymn());

        let expected = "Hymn 4: Blessed Assurance\n\
                        --------------------------------\n\
                        Verse 1\n\
                        Blessed assurance, Jesus is mine!\n\
                        O what a foretaste of glory divine!\n\
                        \n\
                        Verse 2\n\
                        Perfect submission, perfect delight\n\
                        \n\
                        Chorus\n\
                        This is my story, this is my song\n\
                        \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_hymn_without_chorus() {
        let mut hymn = sample_hymn();
        hymn.chorus = None;

        let text = format_hymn(&hymn);
        assert!(!text.contains("Chorus"));
        assert!(text.ends_with("Perfect submission, perfect delight\n\n"));
    }

    #[test]
    fn test_format_listing() {
        let hymns = parse_hymns(SAMPLE).unwrap();
        let listing = format_listing(&hymns);

        assert_eq!(
            listing,
            "108. Amazing Grace\n4. Blessed Assurance\n12. Abide With Me\n"
        );
    }
}
