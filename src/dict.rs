use crate::errors::DictionaryLoadError;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The set of words considered real, independent of any board.
/// Loaded once at startup and read-only afterwards; membership is
/// case-insensitive. Stored forms are trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from lines of text, one word per line.
    /// Surrounding whitespace is trimmed; blank lines are skipped, so
    /// the empty string is never a member.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Dictionary { words }
    }

    /// Read a word list file, one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictionaryLoadError::new(path, e))?;
        let mut lines: Vec<String> = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| DictionaryLoadError::new(path, e))?;
            lines.push(line);
        }
        Ok(Self::from_lines(lines))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
