//! Text normalization and tokenization
//!
//! Text is lowercased, stripped of every Unicode punctuation character and
//! split along UAX #29 word boundaries. Hyphens and apostrophes count as
//! punctuation, so "кто-то" becomes the single token "ктото".

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}+").expect("Invalid punctuation pattern"));

/// Lowercase the text and remove punctuation, keeping letters, digits and whitespace
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").into_owned()
}

/// Split text into normalized word tokens, in input order
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .unicode_words()
        .map(str::to_string)
        .collect()
}
