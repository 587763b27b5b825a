//! Loading candidate words from a dictionary source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::filter::WordFilter;
use crate::error::{Result, WordForestError};

/// Counters collected while reading a word source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Number of lines (candidate strings) read.
    pub lines_read: usize,
    /// Candidates admitted by the filter.
    pub accepted: usize,
    /// Candidates rejected by the filter or not valid UTF-8.
    pub rejected: usize,
}

/// The admitted words of a dictionary, in source order.
///
/// Duplicates are kept; the graph treats a repeated word as the same node.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    stats: LoadStats,
}

impl WordList {
    /// Build a word list from in-memory candidates.
    pub fn from_words<I, S>(candidates: I, filter: &WordFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::default();
        for candidate in candidates {
            list.admit(candidate.as_ref(), filter);
        }
        list
    }

    /// Read one candidate per line from `reader`.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Lines that are not
    /// valid UTF-8 are counted as rejected instead of aborting the load.
    pub fn from_reader<R: BufRead>(mut reader: R, filter: &WordFilter) -> Result<Self> {
        let mut list = WordList::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let mut line = buffer.as_slice();
            if let Some(stripped) = line.strip_suffix(b"\n") {
                line = stripped;
            }
            if let Some(stripped) = line.strip_suffix(b"\r") {
                line = stripped;
            }

            match std::str::from_utf8(line) {
                Ok(candidate) => list.admit(candidate, filter),
                Err(_) => {
                    list.stats.lines_read += 1;
                    list.stats.rejected += 1;
                }
            }
        }

        Ok(list)
    }

    /// Load a dictionary file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P, filter: &WordFilter) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            WordForestError::dictionary(format!("Failed to open {}: {e}", path.display()))
        })?;

        Self::from_reader(BufReader::new(file), filter)
    }

    fn admit(&mut self, candidate: &str, filter: &WordFilter) {
        self.stats.lines_read += 1;
        if filter.accepts(candidate) {
            self.stats.accepted += 1;
            self.words.push(candidate.to_string());
        } else {
            self.stats.rejected += 1;
        }
    }

    /// The admitted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader_filters_lines() {
        let source = "cat\nDog\ncot\r\nit's\n\ncog\n";
        let list = WordList::from_reader(Cursor::new(source), &WordFilter::new()).unwrap();

        assert_eq!(list.words(), ["cat", "cot", "cog"]);
        assert_eq!(
            list.stats(),
            LoadStats {
                lines_read: 6,
                accepted: 3,
                rejected: 3,
            }
        );
    }

    #[test]
    fn test_from_reader_without_trailing_newline() {
        let list = WordList::from_reader(Cursor::new("cat\ndog"), &WordFilter::new()).unwrap();
        assert_eq!(list.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let source: &[u8] = b"cat\n\xff\xfe\ndog\n";
        let list = WordList::from_reader(Cursor::new(source), &WordFilter::new()).unwrap();

        assert_eq!(list.words(), ["cat", "dog"]);
        assert_eq!(list.stats().rejected, 1);
    }

    #[test]
    fn test_from_words_applies_bounds() {
        let filter = WordFilter::new().with_length_bounds(Some(3), Some(3));
        let list = WordList::from_words(["cat", "goat", "at", "dog"], &filter);

        assert_eq!(list.len(), 2);
        assert_eq!(list.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "Cat").unwrap();
        writeln!(file, "dog").unwrap();

        let list = WordList::load_from_file(file.path(), &WordFilter::new()).unwrap();
        assert_eq!(list.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = WordList::load_from_file("/nonexistent/words", &WordFilter::new());
        assert!(matches!(result, Err(WordForestError::Dictionary(_))));
    }
}
