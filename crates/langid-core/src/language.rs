//! Natural-language allow-list
//!
//! Labels produced by the classifier are either ISO 639-1 codes for human
//! languages or names of programming languages. Anything outside this list
//! is treated as code.

/// Natural-language labels the model can emit, sorted
pub const NATURAL_LANGUAGES: [&str; 20] = [
    "ar", "bg", "de", "el", "en", "es", "fr", "hi", "it", "ja", "nl", "pl", "pt", "ru", "sw", "th",
    "tr", "ur", "vi", "zh",
];

/// Check whether a label names a human language (exact, case-sensitive)
pub fn is_natural_language(label: &str) -> bool {
    NATURAL_LANGUAGES.binary_search(&label).is_ok()
}

/// Check whether a label names a programming language
pub fn is_code(label: &str) -> bool {
    !is_natural_language(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allow_list_sorted_and_unique() {
        let mut sorted = NATURAL_LANGUAGES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, NATURAL_LANGUAGES.to_vec());
    }

    #[test]
    fn test_natural_languages() {
        for label in NATURAL_LANGUAGES {
            assert!(is_natural_language(label), "{label} should be natural");
            assert!(!is_code(label));
        }
    }

    #[test]
    fn test_code_labels() {
        for label in ["python", "rust", "javascript", "c", "go", "sql", ""] {
            assert!(is_code(label), "{label:?} should be code");
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(is_code("EN"));
        assert!(is_code("Fr"));
        assert!(is_code(" en"));
    }

    proptest! {
        #[test]
        fn is_code_iff_not_listed(label in "[a-zA-Z+#]{0,12}") {
            let listed = NATURAL_LANGUAGES.contains(&label.as_str());
            prop_assert_eq!(is_code(&label), !listed);
        }
    }
}
