// Word-frequency aggregation.
//
// A document becomes a sparse vector: each distinct normalized word maps to
// the number of times it occurs. The map is built by one linear pass over the
// document's lines and is read-only afterwards.

use std::collections::HashMap;

use serde::Serialize;

use super::tokenize::tokenize;

/// Mapping from normalized word to its occurrence count in one document.
///
/// Every stored count is at least 1. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`, inserting it with count 1 if new.
    pub fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    /// Occurrence count for `word`, or `None` if it never appeared.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the total number of words seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for word in iter {
            map.record(word.to_string());
        }
        map
    }
}

/// Line, word, and distinct-word counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub lines: u64,
    pub words: u64,
    pub distinct_words: u64,
}

/// A named, fully aggregated document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name, normally the path as the user typed it
    pub name: String,
    pub frequencies: FrequencyMap,
    pub stats: DocumentStats,
    /// False when the source could not be read and an empty map stands in
    pub found: bool,
}

impl Document {
    /// Build a document by aggregating `lines`.
    pub fn from_lines<I, L>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let (frequencies, stats) = aggregate(lines);
        Self {
            name: name.into(),
            frequencies,
            stats,
            found: true,
        }
    }

    /// The stand-in for a document whose source could not be read.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequencies: FrequencyMap::new(),
            stats: DocumentStats::default(),
            found: false,
        }
    }
}

/// Tokenize every line and fold the tokens into a frequency map.
///
/// A line that produces no tokens still counts towards `lines`.
pub fn aggregate<I, L>(lines: I) -> (FrequencyMap, DocumentStats)
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut map = FrequencyMap::new();
    let mut line_count = 0u64;
    let mut word_count = 0u64;

    for line in lines {
        for token in tokenize(line.as_ref()) {
            word_count += 1;
            map.record(token);
        }
        line_count += 1;
    }

    let stats = DocumentStats {
        lines: line_count,
        words: word_count,
        distinct_words: map.len() as u64,
    };
    (map, stats)
}
