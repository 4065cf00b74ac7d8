//! Tests for the layered property store.

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use super::*;

mod grammar {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let entries = PropertyStore::parse("a=1\nb=2\n");

        assert_eq!(entries.get("a").map(String::as_str), Some("1"));
        assert_eq!(entries.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let entries = PropertyStore::parse("# comment\n\n! also comment\na=1\n");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn trims_whitespace_around_key_and_value() {
        let entries = PropertyStore::parse("  a  =  1  \n");

        assert_eq!(entries.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn colon_separator_is_accepted() {
        let entries = PropertyStore::parse("a: 1\n");

        assert_eq!(entries.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn separator_less_line_maps_to_empty_value() {
        let entries = PropertyStore::parse("lonely\n");

        assert_eq!(entries.get("lonely").map(String::as_str), Some(""));
    }

    #[test]
    fn last_duplicate_wins() {
        let entries = PropertyStore::parse("a=1\na=2\n");

        assert_eq!(entries.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn quoted_values_are_stored_verbatim() {
        let entries = PropertyStore::parse("libra_server='example.com'\n");

        assert_eq!(
            entries.get("libra_server").map(String::as_str),
            Some("'example.com'")
        );
    }
}

mod layering {
    use super::*;

    #[test]
    fn local_entry_shadows_parent() {
        let mut parent = PropertyStore::new();
        parent.set("k", "2");

        let mut child = PropertyStore::with_parent(Arc::new(parent));
        child.set("k", "1");

        assert_eq!(child.get("k"), Some("1"));
    }

    #[test]
    fn local_miss_falls_through_to_parent() {
        let mut parent = PropertyStore::new();
        parent.set("k", "2");
        let parent = Arc::new(parent);

        let child = PropertyStore::with_parent(Arc::clone(&parent));

        assert_eq!(child.get("k"), Some("2"));
        // The fallthrough hit is not cached locally.
        assert_eq!(child.get_local("k"), None);
        assert!(child.is_empty());
    }

    #[test]
    fn root_miss_returns_none() {
        let parent = Arc::new(PropertyStore::new());
        let child = PropertyStore::with_parent(parent);

        assert_eq!(child.get("missing"), None);
    }

    #[test]
    fn lookup_traverses_multiple_levels() {
        let mut grandparent = PropertyStore::new();
        grandparent.set("k", "3");

        let parent = PropertyStore::with_parent(Arc::new(grandparent));
        let child = PropertyStore::with_parent(Arc::new(parent));

        assert_eq!(child.get("k"), Some("3"));
    }

    #[test]
    fn set_never_mutates_parent() {
        let parent = Arc::new(PropertyStore::new());
        let mut child = PropertyStore::with_parent(Arc::clone(&parent));

        child.set("k", "1");

        assert_eq!(parent.get("k"), None);
    }
}

mod loading {
    use super::*;

    #[test]
    fn absent_path_yields_empty_store() {
        let store = PropertyStore::load(None, None).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn nonexistent_file_behaves_like_empty_store() {
        let mut parent = PropertyStore::new();
        parent.set("k", "2");
        let parent = Arc::new(parent);

        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-file.conf");

        let loaded =
            PropertyStore::load(Some(&missing), Some(Arc::clone(&parent))).unwrap();
        let fresh = PropertyStore::with_parent(parent);

        assert!(loaded.is_empty());
        assert_eq!(loaded.get("k"), fresh.get("k"));
        assert_eq!(loaded.get("missing"), fresh.get("missing"));
    }

    #[test]
    fn file_entries_land_in_local_map() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.conf");
        fs::write(&path, "a=1\nb=2\n").unwrap();

        let store = PropertyStore::load(Some(&path), None).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_local("a"), Some("1"));
    }
}

mod saving {
    use super::*;

    #[test]
    fn save_without_path_is_a_no_op() {
        let mut store = PropertyStore::new();
        store.set("k", "1");

        store.save(None).unwrap();
    }

    #[test]
    fn save_writes_local_entries_only() {
        let mut parent = PropertyStore::new();
        parent.set("inherited", "x");

        let mut child = PropertyStore::with_parent(Arc::new(parent));
        child.set("own", "1");

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.conf");
        child.save(Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("own=1"));
        assert!(!content.contains("inherited"));
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.conf");
        fs::write(&path, "stale=entry\n").unwrap();

        let mut store = PropertyStore::new();
        store.set("fresh", "1");
        store.save(Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("fresh=1"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn save_to_unwritable_path_is_an_error() {
        let mut store = PropertyStore::new();
        store.set("k", "1");

        let result = store.save(Some(std::path::Path::new(
            "/nonexistent_dir_12345/out.conf",
        )));

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }

    #[test]
    fn round_trip_through_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.conf");

        let mut store = PropertyStore::new();
        store.set("libra_domain", "'mydomain'");
        store.set("timeout", "5000");
        store.save(Some(&path)).unwrap();

        let reloaded = PropertyStore::load(Some(&path), None).unwrap();

        assert_eq!(reloaded.get("libra_domain"), Some("'mydomain'"));
        assert_eq!(reloaded.get("timeout"), Some("5000"));
    }
}
