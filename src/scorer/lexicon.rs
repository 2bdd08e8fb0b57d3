//! Built-in sentiment lexicon
//!
//! Every weight must lie in [-1, 1]. The normalized score is bounded by
//! [-1, 1] only under that invariant, so extending the table with larger
//! weights breaks `AnalysisResult::score`'s range.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Word → weight pairs, keyed by the lowercase form produced by the tokenizer
const ENTRIES: &[(&str, i8)] = &[
    ("хороший", 1),
    ("отличный", 1),
    ("прекрасный", 1),
    ("замечательный", 1),
    ("счастливый", 1),
    ("радость", 1),
    ("любить", 1),
    ("плохой", -1),
    ("ужасный", -1),
    ("отвратительный", -1),
    ("грустный", -1),
    ("печальный", -1),
    ("ненавидеть", -1),
    ("нормальный", 0),
];

static LEXICON: LazyLock<HashMap<&'static str, i8>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Read-only view over the static lexicon table
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicon;

impl Lexicon {
    /// Weight of a normalized word, 0 when the word is unknown
    pub fn weight(&self, word: &str) -> i8 {
        LEXICON.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        LEXICON.contains_key(word)
    }

    pub fn len(&self) -> usize {
        LEXICON.len()
    }

    pub fn is_empty(&self) -> bool {
        LEXICON.is_empty()
    }

    /// All entries, positive first, then neutral, then negative; ties by word
    pub fn entries(&self) -> Vec<(&'static str, i8)> {
        let mut entries: Vec<(&'static str, i8)> = LEXICON.iter().map(|(w, s)| (*w, *s)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_within_bounds() {
        for (word, weight) in ENTRIES {
            assert!(
                (-1..=1).contains(weight),
                "weight for {} out of range: {}",
                word,
                weight
            );
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        assert_eq!(Lexicon.len(), ENTRIES.len());
    }

    #[test]
    fn test_entries_are_lowercase() {
        for (word, _) in ENTRIES {
            assert_eq!(word.to_lowercase(), *word);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Lexicon.weight("хороший"), 1);
        assert_eq!(Lexicon.weight("плохой"), -1);
        assert_eq!(Lexicon.weight("нормальный"), 0);
        assert_eq!(Lexicon.weight("погода"), 0);
        assert!(Lexicon.contains("нормальный"));
        assert!(!Lexicon.contains("погода"));
    }

    #[test]
    fn test_entries_sorted_by_weight() {
        let entries = Lexicon.entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries.first().map(|e| e.1), Some(1));
        assert_eq!(entries.last().map(|e| e.1), Some(-1));
    }
}
