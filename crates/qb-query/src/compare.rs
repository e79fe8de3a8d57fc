//! Shared comparison helpers.

use std::cmp::Ordering;

/// Locale-style string ordering.
///
/// Letters compare case-insensitively first (`apple < Mango < Zebra`). Strings
/// equal under case folding fall back to lowercase-before-uppercase, then to a
/// plain byte comparison, so the ordering is total.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test. An empty needle always matches.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_primary_order() {
        let mut words = vec!["Zebra", "apple", "Mango"];
        words.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(words, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn lowercase_precedes_uppercase_on_tie() {
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Java", "JavaScript"), Ordering::Less);
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ignore_case("Binary Search", "search"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Binary Search", "tree"));
    }
}
