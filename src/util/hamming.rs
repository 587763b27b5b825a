//! Hamming distance helpers for equal-length words.
//!
//! Word length is measured in `char`s, not bytes, so every function here
//! compares words position by position over their characters.

/// Length of a word in characters. This decides which subgraph a word lives in.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Calculate the Hamming distance between two words.
///
/// Returns `None` when the words have different lengths, since the distance
/// is only defined for equal-length strings.
pub fn hamming_distance(s1: &str, s2: &str) -> Option<usize> {
    let mut chars1 = s1.chars();
    let mut chars2 = s2.chars();
    let mut distance = 0;

    loop {
        match (chars1.next(), chars2.next()) {
            (Some(c1), Some(c2)) => {
                if c1 != c2 {
                    distance += 1;
                }
            }
            (None, None) => return Some(distance),
            _ => return None,
        }
    }
}

/// Check whether two words differ in exactly one position.
///
/// Stops at the second mismatch, which makes it cheaper than
/// [`hamming_distance`] for the pairwise scan that builds adjacency.
pub fn are_neighbors(s1: &str, s2: &str) -> bool {
    let mut chars1 = s1.chars();
    let mut chars2 = s2.chars();
    let mut found_change = false;

    loop {
        match (chars1.next(), chars2.next()) {
            (Some(c1), Some(c2)) => {
                if c1 != c2 {
                    if found_change {
                        return false;
                    }
                    found_change = true;
                }
            }
            (None, None) => return found_change,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_length() {
        assert_eq!(word_length(""), 0);
        assert_eq!(word_length("cat"), 3);
        assert_eq!(word_length("café"), 4);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("cat", "cat"), Some(0));
        assert_eq!(hamming_distance("cat", "cot"), Some(1));
        assert_eq!(hamming_distance("cat", "dog"), Some(3));
        assert_eq!(hamming_distance("café", "cafe"), Some(1));
        assert_eq!(hamming_distance("cat", "goat"), None);
    }

    #[test]
    fn test_are_neighbors() {
        assert!(are_neighbors("cat", "cot"));
        assert!(are_neighbors("cog", "dog"));
        assert!(!are_neighbors("cat", "cat"));
        assert!(!are_neighbors("cat", "dog"));
        assert!(!are_neighbors("cat", "cats"));
        assert!(!are_neighbors("", ""));
    }

    #[test]
    fn test_neighbors_agree_with_distance() {
        let words = ["cat", "cot", "cog", "dog", "cag", "pig", "big", "bog"];
        for a in words {
            for b in words {
                assert_eq!(are_neighbors(a, b), hamming_distance(a, b) == Some(1));
            }
        }
    }
}
