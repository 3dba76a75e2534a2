//! Flesch–Kincaid grade level with heuristic syllable counting

use crate::error::AnalyzerError;

/// Count syllables as vowel groups, discounting a silent trailing `e`
pub fn syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}

/// `0.39 * words/sentences + 11.8 * syllables/words - 15.59`
pub fn flesch_kincaid_grade(words: &[String], sentences: usize) -> Result<f64, AnalyzerError> {
    if words.is_empty() {
        return Err(AnalyzerError::NoWords {
            operation: "readability",
        });
    }
    let word_count = words.len() as f64;
    let sentence_count = sentences.max(1) as f64;
    let syllable_count: usize = words.iter().map(|w| syllables(w)).sum();

    Ok(0.39 * (word_count / sentence_count) + 11.8 * (syllable_count as f64 / word_count) - 15.59)
}
