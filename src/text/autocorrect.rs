//! Table-driven autocorrect pass used as a grammar-error proxy

use super::Correction;
use regex::Regex;
use std::sync::OnceLock;

const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("beleive", "believe"),
    ("definately", "definitely"),
    ("seperate", "separate"),
    ("occured", "occurred"),
    ("untill", "until"),
    ("wich", "which"),
    ("thier", "their"),
    ("alot", "a lot"),
    ("becuase", "because"),
    ("goverment", "government"),
    ("enviroment", "environment"),
    ("tommorow", "tomorrow"),
    ("accomodate", "accommodate"),
    ("occassion", "occasion"),
    ("wierd", "weird"),
    ("truely", "truly"),
    ("basicly", "basically"),
    ("irregardless", "regardless"),
    ("gonna", "going to"),
    ("wanna", "want to"),
];

/// Doubled words that are legitimate English
const ALLOWED_REPEATS: &[&str] = &["that", "had", "is", "very", "bye", "no", "so"];

fn misspelling_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternatives: Vec<&str> = MISSPELLINGS.iter().map(|(w, _)| *w).collect();
        Regex::new(&format!(r"(?i)\b({})\b", alternatives.join("|")))
            .expect("misspelling pattern is valid")
    })
}

fn modal_of_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(could|should|would|must|might) of\b").expect("modal pattern is valid")
    })
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{L}+").expect("word pattern is valid"))
}

/// Find every change the corrector would make, ordered by offset
pub fn find_corrections(text: &str) -> Vec<Correction> {
    let mut corrections = Vec::new();

    for m in misspelling_regex().find_iter(text) {
        let lower = m.as_str().to_lowercase();
        if let Some((_, right)) = MISSPELLINGS.iter().find(|(wrong, _)| *wrong == lower) {
            corrections.push(Correction {
                offset: m.start(),
                original: m.as_str().to_string(),
                replacement: right.to_string(),
            });
        }
    }

    for caps in modal_of_regex().captures_iter(text) {
        let (Some(whole), Some(modal)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        corrections.push(Correction {
            offset: whole.start(),
            original: whole.as_str().to_string(),
            replacement: format!("{} have", modal.as_str()),
        });
    }

    let words: Vec<regex::Match> = word_regex().find_iter(text).collect();
    for pair in words.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        let between = &text[first.end()..second.start()];
        let same = first.as_str().eq_ignore_ascii_case(second.as_str());
        if same
            && between.chars().all(char::is_whitespace)
            && !ALLOWED_REPEATS.contains(&first.as_str().to_lowercase().as_str())
        {
            corrections.push(Correction {
                offset: first.start(),
                original: text[first.start()..second.end()].to_string(),
                replacement: first.as_str().to_string(),
            });
        }
    }

    corrections.sort_by_key(|c| c.offset);
    corrections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspellings_found_case_insensitive() {
        let c = find_corrections("Teh results were recieved.");
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].original, "Teh");
        assert_eq!(c[0].replacement, "the");
        assert_eq!(c[1].offset, 17);
        assert_eq!(c[1].replacement, "received");
    }

    #[test]
    fn test_modal_of() {
        let c = find_corrections("We could of won.");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].original, "could of");
        assert_eq!(c[0].replacement, "could have");
    }

    #[test]
    fn test_repeated_word() {
        let c = find_corrections("We went to the the park.");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].original, "the the");
        assert_eq!(c[0].replacement, "the");
    }

    #[test]
    fn test_allowed_repeat_and_punctuated_repeat() {
        assert!(find_corrections("He said that that was fine.").is_empty());
        assert!(find_corrections("Go, go! Run.").is_empty());
    }

    #[test]
    fn test_clean_text_has_no_corrections() {
        assert!(find_corrections("The committee received the final report.").is_empty());
    }
}
