// Unit tests for tokenization and frequency aggregation.
//
// Tests the bookkeeping invariants (distinct words == map size, words == sum
// of counts), the normalization pipeline order, and idempotence of
// normalization on already-normalized text.

use textcompare::corpus::tokenize::{normalize_line, tokenize};
use textcompare::corpus::{aggregate, DocumentStats, FrequencyMap};

const SAMPLE: &[&str] = &[
    "It was the best of times, it was the worst of times,",
    "it was the age of wisdom, it was the age of foolishness,",
    "",
    "--- Chapter 1 ---",
    "IT WAS the epoch of belief; it was the epoch of incredulity.",
];

// ============================================================
// Aggregation invariants
// ============================================================

#[test]
fn distinct_count_matches_map_size() {
    let (map, stats) = aggregate(SAMPLE);
    assert_eq!(stats.distinct_words, map.len() as u64);
}

#[test]
fn word_count_matches_sum_of_counts() {
    let (map, stats) = aggregate(SAMPLE);
    assert_eq!(stats.words, map.total());
    let summed: u64 = map.iter().map(|(_, c)| c).sum();
    assert_eq!(stats.words, summed);
}

#[test]
fn every_count_is_positive() {
    let (map, _) = aggregate(SAMPLE);
    assert!(map.iter().all(|(_, c)| c >= 1));
}

#[test]
fn every_line_is_counted_including_blank_and_punctuation() {
    let (_, stats) = aggregate(SAMPLE);
    assert_eq!(stats.lines, SAMPLE.len() as u64);
}

#[test]
fn case_is_folded() {
    let (map, _) = aggregate(SAMPLE);
    // "It", "it", "IT" are all the same word
    assert_eq!(map.get("it"), Some(6));
    assert_eq!(map.get("IT"), None);
    assert_eq!(map.get("was"), Some(6));
    assert_eq!(map.get("1"), Some(1));
    assert_eq!(map.get("chapter"), Some(1));
}

#[test]
fn punctuation_only_line_counts_as_line_not_words() {
    let (map, stats) = aggregate(["!!! ??? ---"]);
    assert!(map.is_empty());
    assert_eq!(
        stats,
        DocumentStats {
            lines: 1,
            words: 0,
            distinct_words: 0
        }
    );
}

#[test]
fn empty_input_is_all_zero() {
    let (map, stats) = aggregate(std::iter::empty::<&str>());
    assert_eq!(map, FrequencyMap::new());
    assert_eq!(stats, DocumentStats::default());
}

#[test]
fn hyphenated_and_contracted_words_split() {
    let (map, stats) = aggregate(["well-known isn't"]);
    assert_eq!(stats.words, 4);
    for word in ["well", "known", "isn", "t"] {
        assert_eq!(map.get(word), Some(1), "missing {word}");
    }
}

// ============================================================
// Normalization pipeline
// ============================================================

#[test]
fn normalize_preserves_length() {
    let line = b"Hello,\tWorld! (42)";
    assert_eq!(normalize_line(line).len(), line.len());
}

#[test]
fn normalize_does_not_collapse_runs() {
    assert_eq!(normalize_line(b"a...b"), "a   b");
}

#[test]
fn tokenize_drops_leading_and_trailing_separators() {
    assert_eq!(
        tokenize(b"  ...leading and trailing...  ").collect::<Vec<_>>(),
        vec!["leading", "and", "trailing"]
    );
}

#[test]
fn normalization_is_idempotent() {
    let (original, _) = aggregate(SAMPLE);

    // Re-feed the normalized, tokenized text back through aggregation
    let normalized: Vec<String> = SAMPLE
        .iter()
        .map(|line| tokenize(line.as_bytes()).collect::<Vec<_>>().join(" "))
        .collect();
    let (again, _) = aggregate(&normalized);

    assert_eq!(original, again);
}

#[test]
fn normalize_line_output_is_a_fixed_point() {
    for line in SAMPLE {
        let once = normalize_line(line.as_bytes());
        let twice = normalize_line(once.as_bytes());
        assert_eq!(once, twice);
    }
}
