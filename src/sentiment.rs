//! Lexicon-based sentence sentiment.
//!
//! Scores polarity in [-1, 1] and subjectivity in [0, 1] by averaging the
//! lexicon entries found among a sentence's words. A negator within the two
//! words before an entry flips and dampens its polarity; intensifiers scale
//! it. Sentences with no lexicon hits score neutral (0, 0).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tokenize::words_lower;

/// Polarity and subjectivity of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Scored words: (word, polarity, subjectivity).
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bright", 0.7, 0.8),
    ("brilliant", 0.9, 0.9),
    ("celebrated", 0.5, 0.6),
    ("clean", 0.35, 0.65),
    ("clear", 0.1, 0.4),
    ("easy", 0.45, 0.85),
    ("effective", 0.6, 0.7),
    ("efficient", 0.55, 0.75),
    ("excellent", 1.0, 1.0),
    ("famous", 0.4, 0.55),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.55, 0.7),
    ("free", 0.4, 0.8),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.6, 0.7),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("healthy", 0.5, 0.55),
    ("helpful", 0.6, 0.75),
    ("high", 0.16, 0.54),
    ("important", 0.4, 0.8),
    ("impressive", 0.9, 0.9),
    ("influential", 0.45, 0.6),
    ("interesting", 0.5, 0.5),
    ("large", 0.2, 0.4),
    ("leading", 0.35, 0.5),
    ("love", 0.5, 0.6),
    ("major", 0.2, 0.3),
    ("modern", 0.3, 0.4),
    ("new", 0.14, 0.45),
    ("notable", 0.3, 0.5),
    ("outstanding", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("popular", 0.4, 0.4),
    ("powerful", 0.5, 0.6),
    ("prominent", 0.4, 0.5),
    ("remarkable", 0.75, 0.75),
    ("rich", 0.55, 0.6),
    ("safe", 0.5, 0.5),
    ("significant", 0.4, 0.6),
    ("simple", 0.25, 0.55),
    ("strong", 0.45, 0.55),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("useful", 0.3, 0.3),
    ("valuable", 0.35, 0.6),
    ("warm", 0.6, 0.6),
    ("wonderful", 1.0, 1.0),
    // Negative
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.65),
    ("broken", -0.4, 0.5),
    ("controversial", -0.2, 0.6),
    ("dangerous", -0.6, 0.9),
    ("dark", -0.15, 0.4),
    ("deadly", -0.8, 0.9),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("failed", -0.4, 0.5),
    ("failure", -0.4, 0.5),
    ("hard", -0.3, 0.55),
    ("harmful", -0.6, 0.7),
    ("horrible", -1.0, 1.0),
    ("hostile", -0.6, 0.8),
    ("lost", -0.3, 0.4),
    ("painful", -0.7, 0.8),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("serious", -0.3, 0.6),
    ("severe", -0.5, 0.7),
    ("sick", -0.7, 0.9),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unpopular", -0.4, 0.5),
    ("violent", -0.6, 0.8),
    ("weak", -0.5, 0.5),
    ("worse", -0.5, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
    // Hedges: no polarity, high subjectivity
    ("allegedly", 0.0, 0.9),
    ("apparently", 0.0, 0.85),
    ("arguably", 0.0, 0.9),
    ("likely", 0.0, 0.7),
    ("perhaps", 0.0, 0.9),
    ("possibly", 0.0, 1.0),
    ("probably", 0.0, 0.9),
    ("reportedly", 0.0, 0.75),
    ("supposedly", 0.0, 0.9),
];

static LEXICON_MAP: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    LEXICON
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

const NEGATORS: [&str; 6] = ["not", "no", "never", "neither", "nor", "cannot"];

const INTENSIFIERS: [&str; 9] = [
    "very",
    "really",
    "extremely",
    "highly",
    "incredibly",
    "especially",
    "particularly",
    "remarkably",
    "truly",
];

const DIMINISHERS: [&str; 4] = ["slightly", "somewhat", "fairly", "rather"];

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

/// Scores one sentence.
#[must_use]
pub fn score(text: &str) -> Sentiment {
    let tokens = words_lower(text);
    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(&(base_polarity, base_subjectivity)) = LEXICON_MAP.get(token.as_str()) else {
            continue;
        };

        let mut polarity = base_polarity;
        let mut subjectivity = base_subjectivity;

        for prior in tokens[i.saturating_sub(2)..i].iter() {
            if is_negator(prior) {
                polarity *= -0.5;
            } else if INTENSIFIERS.contains(&prior.as_str()) {
                polarity = (polarity * 1.3).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * 1.3).clamp(0.0, 1.0);
            } else if DIMINISHERS.contains(&prior.as_str()) {
                polarity *= 0.7;
                subjectivity *= 0.7;
            }
        }

        polarities.push(polarity);
        subjectivities.push(subjectivity);
    }

    if polarities.is_empty() {
        return Sentiment::default();
    }

    let count = polarities.len() as f64;
    Sentiment {
        polarity: (polarities.iter().sum::<f64>() / count).clamp(-1.0, 1.0),
        subjectivity: (subjectivities.iter().sum::<f64>() / count).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_word_scores_positive() {
        let s = score("The results were good.");
        assert!(s.polarity > 0.0);
        assert!(s.subjectivity > 0.0);
    }

    #[test]
    fn negative_word_scores_negative() {
        assert!(score("It was a terrible failure.").polarity < 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = score("The plan was good.");
        let negated = score("The plan was not good.");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn intensifier_strengthens() {
        assert!(score("very good").polarity > score("good").polarity);
    }

    #[test]
    fn diminisher_weakens() {
        assert!(score("somewhat good").polarity < score("good").polarity);
    }

    #[test]
    fn neutral_sentence_scores_zero() {
        assert_eq!(score("The city lies on the river."), Sentiment::default());
    }

    #[test]
    fn empty_sentence_scores_zero() {
        assert_eq!(score(""), Sentiment::default());
    }

    #[test]
    fn scores_stay_in_bounds() {
        let s = score("extremely wonderful, truly excellent, very best");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }

    #[test]
    fn contraction_negates() {
        assert!(score("It wasn't good.").polarity < 0.0);
    }
}
