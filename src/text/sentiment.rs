//! Lexicon-based polarity and subjectivity

use super::Sentiment;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hope", 0.3, 0.5),
    ("inspiring", 0.5, 0.8),
    ("love", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("powerful", 0.3, 1.0),
    ("proud", 0.8, 1.0),
    ("remarkable", 0.75, 0.75),
    ("success", 0.3, 0.2),
    ("successful", 0.75, 0.95),
    ("wonderful", 1.0, 1.0),
    ("grateful", 0.6, 0.8),
    ("glad", 0.5, 1.0),
    ("important", 0.4, 1.0),
    ("interesting", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("strong", 0.43, 0.73),
    ("better", 0.5, 0.5),
    ("easy", 0.43, 0.83),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("fear", -0.5, 0.7),
    ("hate", -0.8, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.3, 0.54),
    ("poor", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
    ("problem", -0.2, 0.3),
    ("failure", -0.32, 0.3),
    ("dangerous", -0.6, 0.9),
    ("disappointing", -0.6, 0.7),
    ("boring", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("crisis", -0.4, 0.4),
    ("tragic", -0.75, 1.0),
    ("painful", -0.7, 0.9),
    ("serious", -0.33, 0.67),
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "incredibly",
    "truly",
    "absolutely",
    "so",
    "quite",
    "too",
    "deeply",
];

const NEGATORS: &[&str] = &[
    "not", "never", "no", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
    "can't", "won't", "cannot", "hardly",
];

const INTENSIFIER_FACTOR: f64 = 1.3;
const NEGATION_FACTOR: f64 = -0.5;

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, p, s)| (*p, *s))
}

/// Average polarity and subjectivity over the opinion words in `words`.
///
/// An intensifier directly before an opinion word scales it; a negator within
/// the two preceding words flips and dampens its polarity. No opinion words
/// means neutral.
pub fn score(words: &[String]) -> Sentiment {
    let lower: Vec<String> = words
        .iter()
        .map(|w| w.to_lowercase().replace('’', "'"))
        .collect();

    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();

    for (i, word) in lower.iter().enumerate() {
        let Some((mut polarity, mut subjectivity)) = lookup(word) else {
            continue;
        };

        if i > 0 && INTENSIFIERS.contains(&lower[i - 1].as_str()) {
            polarity = (polarity * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
            subjectivity = (subjectivity * INTENSIFIER_FACTOR).min(1.0);
        }

        let negated = lower[i.saturating_sub(2)..i]
            .iter()
            .any(|w| NEGATORS.contains(&w.as_str()));
        if negated {
            polarity *= NEGATION_FACTOR;
        }

        polarities.push(polarity);
        subjectivities.push(subjectivity);
    }

    if polarities.is_empty() {
        return Sentiment::neutral();
    }

    let n = polarities.len() as f64;
    Sentiment {
        polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
        subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        super::super::tokenize::split_words(s)
    }

    #[test]
    fn test_positive_text() {
        let s = score(&words("This is a wonderful day"));
        assert_eq!(s.polarity, 1.0);
        assert_eq!(s.subjectivity, 1.0);
    }

    #[test]
    fn test_negative_text() {
        let s = score(&words("That was a terrible idea"));
        assert_eq!(s.polarity, -1.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let s = score(&words("The plan is not good"));
        assert!((s.polarity - (-0.35)).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales() {
        let s = score(&words("a very good result"));
        assert!((s.polarity - 0.91).abs() < 1e-9);
        assert!((s.subjectivity - 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_averaging() {
        let s = score(&words("good and bad"));
        assert!(s.polarity.abs() < 1e-9);
    }

    #[test]
    fn test_neutral_when_no_opinion_words() {
        assert_eq!(score(&words("We walked to the station")), Sentiment::neutral());
        assert_eq!(score(&[]), Sentiment::neutral());
    }
}
