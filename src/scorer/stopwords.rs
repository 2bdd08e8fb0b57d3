//! Russian stop words excluded from scoring

use std::collections::HashSet;
use std::sync::LazyLock;

const WORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "её", "мне", "было", "вот", "от", "меня", "еще", "ещё", "нет", "о", "из", "ему", "теперь",
    "когда", "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него",
    "до", "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего",
    "ей", "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их",
    "чем", "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под",
    "будет", "ж", "тогда", "кто", "этот", "это", "того", "потому", "этого", "какой",
    "совсем", "ним", "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас",
    "были", "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об",
    "другой", "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего",
    "них", "какая", "много", "разве", "три", "эту", "моя", "впрочем", "свою", "этой", "перед",
    "иногда", "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю",
    "между", "очень", "весь", "вся", "эта",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| WORDS.iter().copied().collect());

/// Read-only view over the static stop-word set
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWords;

impl StopWords {
    pub fn contains(&self, word: &str) -> bool {
        STOP_WORDS.contains(word)
    }

    pub fn len(&self) -> usize {
        STOP_WORDS.len()
    }

    pub fn is_empty(&self) -> bool {
        STOP_WORDS.is_empty()
    }

    /// Stop words in alphabetical order
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = STOP_WORDS.iter().copied().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::lexicon::Lexicon;

    #[test]
    fn test_common_fillers() {
        for word in ["и", "но", "в", "на", "это", "не"] {
            assert!(StopWords.contains(word), "{} should be a stop word", word);
        }
        assert!(!StopWords.contains("погода"));
    }

    #[test]
    fn test_disjoint_from_lexicon() {
        for (word, _) in Lexicon.entries() {
            assert!(!StopWords.contains(word), "{} is both scored and filtered", word);
        }
    }

    #[test]
    fn test_sorted() {
        let words = StopWords.sorted();
        assert_eq!(words.len(), StopWords.len());
        assert!(words.windows(2).all(|w| w[0] <= w[1]));
    }
}
