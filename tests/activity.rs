#[cfg(test)]
mod tests {
    use std::fs;
    use timekeeper::libs::activity::{
        has_prefix, prefix, prefixes, validate_name, ActivityError, ActivityList, DEFAULT_ACTIVITIES,
    };

    #[test]
    fn test_prefix() {
        assert_eq!(prefix("testing manual"), Some("testing"));
        assert_eq!(prefix("code review notes"), Some("code"));
        assert_eq!(prefix("programming"), None);
    }

    #[test]
    fn test_has_prefix_requires_word_boundary() {
        assert!(has_prefix("testing manual", "testing"));
        assert!(!has_prefix("testingmanual", "testing"));
        assert!(!has_prefix("testing", "testing"));
        assert!(!has_prefix("support", "testing"));
    }

    #[test]
    fn test_prefixes_are_distinct_and_sorted() {
        let found = prefixes(["testing b", "other", "code x", "testing a"]);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["code", "testing"]);
    }

    #[test]
    fn test_default_list() {
        let list = ActivityList::default();
        assert_eq!(list.len(), DEFAULT_ACTIVITIES.len());
        assert_eq!(list.get(0), Some("testing automatic"));
        assert!(list.contains("programming"));
    }

    #[test]
    fn test_new_trims_skips_blanks_and_dedups() {
        let list = ActivityList::new(["  A ", "", "B", "A", "   "]).unwrap();
        assert_eq!(list.names(), &["A".to_string(), "B".to_string()]);
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_new_rejects_comma() {
        let result = ActivityList::new(["A", "B,C"]);
        assert!(matches!(result, Err(ActivityError::ContainsComma(name)) if name == "B,C"));
    }

    #[test]
    fn test_new_rejects_line_break() {
        let result = ActivityList::new(["review\ncode", "other"]);
        assert!(matches!(result, Err(ActivityError::ContainsNewline(name)) if name == "review\ncode"));
        assert!(matches!(ActivityList::new(["a\rb"]), Err(ActivityError::ContainsNewline(_))));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  support\n").unwrap(), "support");
        assert!(matches!(validate_name("   "), Err(ActivityError::BlankName)));
        assert!(matches!(validate_name("a,b"), Err(ActivityError::ContainsComma(_))));
        assert!(matches!(validate_name("a\nb"), Err(ActivityError::ContainsNewline(_))));
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(matches!(ActivityList::new(["", " "]), Err(ActivityError::Empty)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.txt");
        fs::write(&path, "review code\nreview docs\n\nmeetings\n").unwrap();

        let list = ActivityList::from_file(&path).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["review code", "review docs", "meetings"]);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ActivityList::from_file(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ActivityError::Read { .. })));
    }
}
