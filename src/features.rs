//! Per-sentence feature rows for the keep/drop classifier.
//!
//! Every sentence becomes one row of [`FEATURE_COLUMNS`] values: the position
//! counters and percentiles from [`crate::structure::annotate`], markup-kind
//! flags, topic mentions, and sentiment. Column order is part of the trained
//! model's contract and must not change between training and prediction.

use percent_encoding::percent_decode_str;

use crate::sentiment;
use crate::structure::{self, SentencePosition};
use crate::tokenize::words_lower;

/// Model input schema, in column order.
pub const FEATURE_COLUMNS: [&str; 30] = [
    "cum_sect",
    "cum_subsect",
    "cum_para",
    "cum_sent",
    "cum_sect_pct",
    "cum_subsect_pct",
    "cum_para_pct",
    "cum_sent_pct",
    "subsect_in_sect",
    "para_in_subsect",
    "sent_in_para",
    "subsect_in_sect_pct",
    "para_in_subsect_pct",
    "sent_in_para_pct",
    "para_in_section",
    "para_in_section_pct",
    "sent_in_subsect",
    "sent_in_subsect_pct",
    "sent_in_sect",
    "sent_in_sect_pct",
    "total_sents",
    "sent_len",
    "subheading",
    "heading",
    "table",
    "bullet",
    "numbered_bullet",
    "topic_mentions",
    "polarity",
    "subjectivity",
];

/// Markup class of a cleaned sentence, decided by its leading characters.
///
/// The variants are mutually exclusive: the first matching prefix wins, so a
/// `===` subheading is never also counted as a `==` heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    Subheading,
    Heading,
    Table,
    Bullet,
    NumberedBullet,
    Plain,
}

impl SentenceKind {
    /// Classifies one cleaned sentence.
    #[must_use]
    pub fn of(sentence: &str) -> Self {
        if sentence.starts_with("===") {
            Self::Subheading
        } else if sentence.starts_with("==") {
            Self::Heading
        } else if sentence.starts_with("TABLE:") || sentence.starts_with("||") {
            Self::Table
        } else if sentence.starts_with(":*") || sentence.starts_with('*') {
            Self::Bullet
        } else if sentence.starts_with('#') {
            Self::NumberedBullet
        } else {
            Self::Plain
        }
    }
}

/// One sentence with everything the model scores it by.
#[derive(Debug, Clone)]
pub struct SentenceRecord {
    pub sentence: String,
    pub position: SentencePosition,
    pub kind: SentenceKind,
    pub topic_mentions: f64,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentenceRecord {
    /// The row for this sentence, in [`FEATURE_COLUMNS`] order.
    #[must_use]
    pub fn feature_vector(&self) -> Vec<f64> {
        let p = &self.position;
        let flag = |kind| if self.kind == kind { 1.0 } else { 0.0 };
        vec![
            p.cum_sect as f64,
            p.cum_subsect as f64,
            p.cum_para as f64,
            p.cum_sent as f64,
            p.cum_sect_pct,
            p.cum_subsect_pct,
            p.cum_para_pct,
            p.cum_sent_pct,
            p.subsect_in_sect as f64,
            p.para_in_subsect as f64,
            p.sent_in_para as f64,
            p.subsect_in_sect_pct,
            p.para_in_subsect_pct,
            p.sent_in_para_pct,
            p.para_in_section as f64,
            p.para_in_section_pct,
            p.sent_in_subsect as f64,
            p.sent_in_subsect_pct,
            p.sent_in_sect as f64,
            p.sent_in_sect_pct,
            p.total_sents as f64,
            p.sent_len as f64,
            flag(SentenceKind::Subheading),
            flag(SentenceKind::Heading),
            flag(SentenceKind::Table),
            flag(SentenceKind::Bullet),
            flag(SentenceKind::NumberedBullet),
            self.topic_mentions,
            self.polarity,
            self.subjectivity,
        ]
    }
}

/// Turns a request topic into the words counted by `topic_mentions`.
///
/// Underscores become spaces and percent-escapes are decoded, so the URL form
/// `Diego_Vel%C3%A1zquez` counts mentions of "diego" and "velázquez". Invalid
/// escape sequences decode lossily rather than failing.
#[must_use]
pub fn topic_words(topic: &str) -> Vec<String> {
    let spaced = topic.replace('_', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8_lossy();
    words_lower(&decoded)
}

/// Mean occurrence count of the topic words in one sentence.
///
/// Each topic word contributes how many times it appears among the sentence's
/// lowercased words; repeated topic words count again. No topic words gives 0.
#[must_use]
pub fn topic_mentions(sentence: &str, topic_words: &[String]) -> f64 {
    if topic_words.is_empty() {
        return 0.0;
    }
    let sentence_words = words_lower(sentence);
    let hits: usize = topic_words
        .iter()
        .map(|topic_word| {
            sentence_words
                .iter()
                .filter(|word| *word == topic_word)
                .count()
        })
        .sum();
    hits as f64 / topic_words.len() as f64
}

/// Builds one record per sentence of a cleaned article.
#[must_use]
pub fn build_records(cleaned: &str, topic: &str) -> Vec<SentenceRecord> {
    let sentences = structure::flat_sentences(cleaned);
    let positions = structure::annotate(&structure::parse(cleaned));
    debug_assert_eq!(sentences.len(), positions.len());
    let topic_words = topic_words(topic);

    sentences
        .into_iter()
        .zip(positions)
        .map(|(sentence, position)| {
            let mentions = topic_mentions(&sentence, &topic_words);
            let sentiment = sentiment::score(&sentence);
            SentenceRecord {
                kind: SentenceKind::of(&sentence),
                topic_mentions: mentions,
                polarity: sentiment.polarity,
                subjectivity: sentiment.subjectivity,
                position,
                sentence,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Sentence kinds ===

    #[test]
    fn kind_prefers_subheading_over_heading() {
        assert_eq!(SentenceKind::of("=== Origins ==="), SentenceKind::Subheading);
        assert_eq!(SentenceKind::of("== History =="), SentenceKind::Heading);
    }

    #[test]
    fn kind_spots_tables_and_bullets() {
        assert_eq!(SentenceKind::of("TABLE:"), SentenceKind::Table);
        assert_eq!(SentenceKind::of("||Year||Title||"), SentenceKind::Table);
        assert_eq!(SentenceKind::of("* First item"), SentenceKind::Bullet);
        assert_eq!(SentenceKind::of(":* Indented item"), SentenceKind::Bullet);
        assert_eq!(SentenceKind::of("# First step"), SentenceKind::NumberedBullet);
    }

    #[test]
    fn kind_defaults_to_plain() {
        assert_eq!(SentenceKind::of("An ordinary sentence."), SentenceKind::Plain);
    }

    // === Topic handling ===

    #[test]
    fn topic_words_split_on_underscores() {
        assert_eq!(topic_words("New_York_City"), vec!["new", "york", "city"]);
    }

    #[test]
    fn topic_words_decode_percent_escapes() {
        assert_eq!(topic_words("Diego_Vel%C3%A1zquez"), vec!["diego", "velázquez"]);
    }

    #[test]
    fn mentions_average_over_topic_words() {
        let words = topic_words("New_York");
        // "new" appears once, "york" twice: (1 + 2) / 2.
        let got = topic_mentions("York is in New York state.", &words);
        assert!((got - 1.5).abs() < 1e-9);
    }

    #[test]
    fn mentions_are_case_insensitive() {
        let words = topic_words("python");
        assert!((topic_mentions("Python is a snake.", &words) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_topic_counts_nothing() {
        assert_eq!(topic_mentions("Anything at all.", &topic_words("")), 0.0);
    }

    // === Feature vectors ===

    #[test]
    fn vector_matches_schema_width() {
        let records = build_records("One sentence here.", "here");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].feature_vector().len(), FEATURE_COLUMNS.len());
    }

    #[test]
    fn flags_are_exclusive() {
        let records = build_records("=== Early life ===<br><br>Text follows.", "topic");
        let columns: Vec<usize> = ["subheading", "heading", "table", "bullet", "numbered_bullet"]
            .iter()
            .map(|name| FEATURE_COLUMNS.iter().position(|c| c == name).unwrap())
            .collect();
        let heading_row = records[0].feature_vector();
        let flags: Vec<f64> = columns.iter().map(|&i| heading_row[i]).collect();
        assert_eq!(flags, vec![1.0, 0.0, 0.0, 0.0, 0.0]);
        let plain_row = records[1].feature_vector();
        assert!(columns.iter().all(|&i| plain_row[i] == 0.0));
    }

    #[test]
    fn sent_len_counts_characters() {
        let records = build_records("Abcde.", "x");
        let len_column = FEATURE_COLUMNS.iter().position(|c| *c == "sent_len").unwrap();
        assert_eq!(records[0].feature_vector()[len_column], 6.0);
    }

    #[test]
    fn records_line_up_with_positions() {
        let cleaned = "First para.<br><br>Second para one. Second para two.";
        let records = build_records(cleaned, "topic");
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].position.cum_sent, 2);
        assert_eq!(records[2].position.sent_in_para, 1);
    }
}
