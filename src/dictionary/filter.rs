//! Admission filter for candidate dictionary words.

use serde::{Deserialize, Serialize};

use crate::util::hamming::word_length;

/// Optional inclusive length bounds applied by a [`WordFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Shortest accepted word, in characters.
    pub min_length: Option<usize>,
    /// Longest accepted word, in characters.
    pub max_length: Option<usize>,
}

/// Decides whether a raw candidate string is admitted into the graph.
///
/// A word is admitted when it is non-empty, made only of lowercase alphabetic
/// characters and, if bounds are configured, its length lies in
/// `[min_length, max_length]`.
///
/// # Examples
///
/// ```
/// use wordforest::dictionary::WordFilter;
///
/// let filter = WordFilter::new().with_length_bounds(Some(3), Some(5));
/// assert!(filter.accepts("cat"));
/// assert!(!filter.accepts("Cat"));
/// assert!(!filter.accepts("it's"));
/// assert!(!filter.accepts("elephant"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFilter {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl WordFilter {
    /// Create a filter with no length bounds.
    pub fn new() -> Self {
        WordFilter::default()
    }

    /// Restrict admitted words to the given inclusive length range.
    pub fn with_length_bounds(
        mut self,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Check whether the candidate should be admitted.
    pub fn accepts(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        if !candidate
            .chars()
            .all(|c| c.is_alphabetic() && c.is_lowercase())
        {
            return false;
        }

        if self.min_length.is_none() && self.max_length.is_none() {
            return true;
        }

        let length = word_length(candidate);
        if self.min_length.is_some_and(|min| length < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| length > max) {
            return false;
        }

        true
    }
}

impl From<&FilterConfig> for WordFilter {
    fn from(config: &FilterConfig) -> Self {
        WordFilter::new().with_length_bounds(config.min_length, config.max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_words() {
        let filter = WordFilter::new();
        assert!(filter.accepts("cat"));
        assert!(filter.accepts("a"));
        assert!(filter.accepts("café"));
    }

    #[test]
    fn test_rejects_non_alphabetic_and_uppercase() {
        let filter = WordFilter::new();
        assert!(!filter.accepts(""));
        assert!(!filter.accepts("Cat"));
        assert!(!filter.accepts("CAT"));
        assert!(!filter.accepts("can't"));
        assert!(!filter.accepts("ab1"));
        assert!(!filter.accepts("two words"));
        assert!(!filter.accepts("cat\r"));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let filter = WordFilter::new().with_length_bounds(Some(3), Some(4));
        assert!(!filter.accepts("at"));
        assert!(filter.accepts("cat"));
        assert!(filter.accepts("goat"));
        assert!(!filter.accepts("goats"));
    }

    #[test]
    fn test_single_sided_bounds() {
        let min_only = WordFilter::new().with_length_bounds(Some(5), None);
        assert!(!min_only.accepts("goat"));
        assert!(min_only.accepts("snake"));

        let max_only = WordFilter::new().with_length_bounds(None, Some(3));
        assert!(max_only.accepts("cat"));
        assert!(!max_only.accepts("goat"));
    }

    #[test]
    fn test_from_config() {
        let config = FilterConfig {
            min_length: Some(2),
            max_length: Some(8),
        };
        let filter = WordFilter::from(&config);
        assert_eq!(filter.min_length(), Some(2));
        assert_eq!(filter.max_length(), Some(8));
    }
}
