//! Sentence and word tokenization

use regex::Regex;
use std::sync::OnceLock;

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e",
];

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)?").expect("word pattern is valid")
    })
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    let last = fragment
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}

fn push_sentence(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.chars().any(|c| c.is_alphanumeric()) {
        out.push(fragment.to_string());
    }
}

/// Split text into sentences on terminal punctuation and line breaks.
///
/// Fragments without any alphanumeric character are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let mut start = 0;
        let mut i = 0;
        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminal(c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && (is_terminal(chars[j].1) || is_closer(chars[j].1)) {
                j += 1;
            }
            let at_end = j >= chars.len();
            let boundary = at_end || chars[j].1.is_whitespace();
            let abbreviated = c == '.' && j == i + 1 && ends_with_abbreviation(&line[start..pos]);

            if boundary && !abbreviated {
                let end = if at_end { line.len() } else { chars[j].0 };
                push_sentence(&mut sentences, &line[start..end]);
                start = end;
            }
            i = j;
        }
        push_sentence(&mut sentences, &line[start..]);
    }

    sentences
}

/// Split text into word tokens. Contractions stay a single token.
pub fn split_words(text: &str) -> Vec<String> {
    word_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
