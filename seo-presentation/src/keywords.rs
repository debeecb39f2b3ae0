//! Keyword merging.

use seo_core::KEYWORDS_SEPARATOR;

/// Merges two comma separated keyword lists.
///
/// Keywords are trimmed, empty ones dropped and duplicates removed, keeping
/// the first occurrence. Keywords of `existing` come first.
///
/// ```rust
/// use seo_presentation::merge_keywords;
///
/// assert_eq!(merge_keywords("default, other", "key1, key2"), "default, other, key1, key2");
/// assert_eq!(merge_keywords("a, b", "b,c"), "a, b, c");
/// ```
pub fn merge_keywords(existing: &str, additional: &str) -> String {
    let mut merged: Vec<&str> = Vec::new();
    for keyword in existing.split(',').chain(additional.split(',')) {
        let keyword = keyword.trim();
        if !keyword.is_empty() && !merged.contains(&keyword) {
            merged.push(keyword);
        }
    }
    merged.join(KEYWORDS_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_into_empty() {
        assert_eq!(merge_keywords("", "key1,key2 , "), "key1, key2");
        assert_eq!(merge_keywords("", ""), "");
    }

    #[test]
    fn test_duplicates_within_additional() {
        assert_eq!(merge_keywords("a", "b, b, a"), "a, b");
    }

    fn keyword_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,6}", 0..8)
    }

    proptest! {
        #[test]
        fn prop_existing_keywords_stay_first(existing in keyword_list(), additional in keyword_list()) {
            let merged = merge_keywords(&existing.join(", "), &additional.join(","));
            let parts: Vec<&str> = if merged.is_empty() { Vec::new() } else { merged.split(", ").collect() };

            let mut expected_prefix: Vec<&str> = Vec::new();
            for k in &existing {
                if !expected_prefix.contains(&k.as_str()) {
                    expected_prefix.push(k);
                }
            }
            prop_assert_eq!(&parts[..expected_prefix.len()], &expected_prefix[..]);
        }

        #[test]
        fn prop_merge_is_duplicate_free_union(existing in keyword_list(), additional in keyword_list()) {
            let merged = merge_keywords(&existing.join(","), &additional.join(","));
            let parts: Vec<&str> = if merged.is_empty() { Vec::new() } else { merged.split(", ").collect() };

            for (i, k) in parts.iter().enumerate() {
                prop_assert!(!parts[i + 1..].contains(k));
            }
            for k in existing.iter().chain(additional.iter()) {
                prop_assert!(parts.contains(&k.as_str()));
            }
        }
    }
}
