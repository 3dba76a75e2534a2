//! Static word lists shared by the metrics, plus phrase matching helpers.
//!
//! Entries are lowercase. Multi-word entries are matched against the token
//! sequence, never as raw substrings.

pub const FILLER_WORDS: &[&str] = &[
    "like", "um", "uh", "basically", "actually", "well", "so", "anyway",
];

pub const FILLER_PHRASES: &[&str] = &["you know", "sort of", "kind of", "i mean"];

pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should",
];

pub const TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "consequently",
    "furthermore",
    "moreover",
    "nevertheless",
    "nonetheless",
    "meanwhile",
    "otherwise",
    "thus",
    "hence",
    "accordingly",
    "additionally",
    "also",
    "as a result",
    "for example",
    "for instance",
    "in fact",
    "in addition",
    "in conclusion",
    "first",
    "second",
    "third",
    "finally",
    "next",
    "then",
    "afterward",
];

pub const REFERENCE_PRONOUNS: &[&str] = &[
    "he", "she", "it", "they", "this", "that", "these", "those",
];

pub const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "that", "which", "who", "whom", "whose", "where", "when", "if", "unless", "because", "since",
    "although", "while",
];

pub const CAUSAL_CONNECTIVES: &[&str] = &[
    "because",
    "therefore",
    "consequently",
    "due to",
    "as a result",
    "since",
    "so that",
    "thus",
    "hence",
];

pub const INTRODUCTION_CUES: &[&str] = &[
    "introduction",
    "today",
    "in this",
    "i will",
    "we will",
    "let me",
    "good morning",
    "good afternoon",
    "good evening",
    "hello",
    "ladies and gentlemen",
    "welcome",
];

pub const CONCLUSION_CUES: &[&str] = &[
    "conclusion",
    "in conclusion",
    "to summarize",
    "in summary",
    "finally",
    "to conclude",
    "thank you",
];

pub const EXEMPLAR_PHRASES: &[&str] = &[
    "for example",
    "for instance",
    "such as",
    "imagine",
    "picture this",
];

pub const EMPHASIS_WORDS: &[&str] = &[
    "really",
    "truly",
    "absolutely",
    "incredibly",
    "extremely",
    "essential",
    "crucial",
    "important",
    "never",
    "always",
    "amazing",
    "remarkable",
];

/// "may" is left out: as a modal verb it is far more common than the month
pub const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Case-insensitive membership test for a single token
pub fn is_one_of(token: &str, list: &[&str]) -> bool {
    let lower = token.to_lowercase();
    list.contains(&lower.as_str())
}

/// Count occurrences of a (possibly multi-word) phrase in a lowercase token sequence
pub fn count_phrase(tokens: &[String], phrase: &str) -> usize {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    if parts.is_empty() || parts.len() > tokens.len() {
        return 0;
    }
    tokens
        .windows(parts.len())
        .filter(|window| window.iter().zip(&parts).all(|(t, p)| t == p))
        .count()
}

/// Total occurrences of every entry in `list`
pub fn count_any(tokens: &[String], list: &[&str]) -> usize {
    list.iter().map(|phrase| count_phrase(tokens, phrase)).sum()
}

/// True if any entry of `list` occurs in the token sequence
pub fn contains_any(tokens: &[String], list: &[&str]) -> bool {
    list.iter().any(|phrase| count_phrase(tokens, phrase) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_count_phrase_single_and_multi_word() {
        let t = tokens("as a result we left as a result");
        assert_eq!(count_phrase(&t, "as a result"), 2);
        assert_eq!(count_phrase(&t, "we"), 1);
        assert_eq!(count_phrase(&t, "left as a result now"), 0);
        assert_eq!(count_phrase(&t, ""), 0);
    }

    #[test]
    fn test_phrase_needs_whole_tokens() {
        let t = tokens("introductions are long");
        assert!(!contains_any(&t, INTRODUCTION_CUES));
    }

    #[test]
    fn test_is_one_of_case_insensitive() {
        assert!(is_one_of("However", TRANSITIONS));
        assert!(!is_one_of("Although", TRANSITIONS));
    }

    #[test]
    fn test_count_any() {
        let t = tokens("first we ate then we slept for example");
        assert_eq!(count_any(&t, TRANSITIONS), 3);
    }

    #[test]
    fn test_lists_are_lowercase() {
        for list in [
            FILLER_WORDS,
            FILLER_PHRASES,
            STOP_WORDS,
            TRANSITIONS,
            REFERENCE_PRONOUNS,
            SUBORDINATING_CONJUNCTIONS,
            CAUSAL_CONNECTIVES,
            INTRODUCTION_CUES,
            CONCLUSION_CUES,
            EXEMPLAR_PHRASES,
            EMPHASIS_WORDS,
            MONTHS,
        ] {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase());
            }
        }
    }
}
