//! Document structure parsing and positional annotation.
//!
//! Cleaned text is split into a four-level hierarchy: section (level-2
//! heading), subsection (level-3 heading), paragraph (`<br><br>` block) and
//! sentence. A level with no markers collapses to a singleton, so every
//! sentence always has a full ancestry. A single forward pass over the tree
//! derives the positional features each sentence record carries.

use crate::tokenize::split_sentences;

/// The paragraph separator in cleaned text.
pub const PARAGRAPH_BREAK: &str = "<br><br>";

/// An ordered document hierarchy of sections down to sentences.
#[derive(Debug, Clone, Default)]
pub struct StructureTree {
    pub sections: Vec<Section>,
}

/// A level-2 heading span, front matter included.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub subsections: Vec<Subsection>,
}

/// A level-3 heading span within a section.
#[derive(Debug, Clone, Default)]
pub struct Subsection {
    pub paragraphs: Vec<Paragraph>,
}

/// One `<br><br>`-delimited block.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub sentences: Vec<String>,
}

impl StructureTree {
    /// Sentences in depth-first order. Matches [`flat_sentences`] on the
    /// same cleaned text; the record builder zips the two by index.
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| &section.subsections)
            .flat_map(|subsection| &subsection.paragraphs)
            .flat_map(|paragraph| &paragraph.sentences)
            .map(String::as_str)
    }
}

/// Splits text at `<br><br>` + marker boundaries, re-prepending the marker
/// consumed by the split. A piece that then starts one heading level deeper
/// belongs to the previous piece and is merged back with its separator.
fn split_level(text: &str, marker: &str) -> Vec<String> {
    let separator = format!("{PARAGRAPH_BREAK}{marker}");
    let child_prefix = format!("{marker}=");
    let mut merged: Vec<String> = Vec::new();

    for (i, piece) in text.split(separator.as_str()).enumerate() {
        let piece = if i == 0 {
            piece.to_string()
        } else {
            format!("{marker}{piece}")
        };

        match merged.last_mut() {
            Some(prev) if piece.starts_with(&child_prefix) => {
                prev.push_str(PARAGRAPH_BREAK);
                prev.push_str(&piece);
            }
            _ => merged.push(piece),
        }
    }

    merged
}

/// Parses cleaned text into the four-level hierarchy.
///
/// Text before the first level-2 heading forms the first section; a section
/// without level-3 headings yields one implicit subsection, and so on down.
#[must_use]
pub fn parse(cleaned: &str) -> StructureTree {
    let sections = split_level(cleaned, "==")
        .iter()
        .map(|section| Section {
            subsections: split_level(section, "===")
                .iter()
                .map(|subsection| Subsection {
                    paragraphs: subsection
                        .split(PARAGRAPH_BREAK)
                        .map(|paragraph| Paragraph {
                            sentences: split_sentences(paragraph),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    StructureTree { sections }
}

/// The flat ordered sentence sequence of a cleaned document.
///
/// Break markers are treated as line separators, blank lines dropped, each
/// line sentence-tokenized. This is the canonical row order for feature
/// records and must equal the tree's depth-first sentence walk.
#[must_use]
pub fn flat_sentences(cleaned: &str) -> Vec<String> {
    cleaned
        .replace("<br>", "\n")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(split_sentences)
        .collect()
}

/// Positional features for one sentence.
///
/// Cumulative counters are document-wide and 0-based; `*_pct` fields divide
/// the count by the total of that kind, so they lie in [0, 1). The
/// `*_in_*` fields count within the named ancestor.
#[derive(Debug, Clone, PartialEq)]
pub struct SentencePosition {
    pub cum_sect: usize,
    pub cum_subsect: usize,
    pub cum_para: usize,
    pub cum_sent: usize,
    pub cum_sect_pct: f64,
    pub cum_subsect_pct: f64,
    pub cum_para_pct: f64,
    pub cum_sent_pct: f64,
    pub subsect_in_sect: usize,
    pub para_in_subsect: usize,
    pub sent_in_para: usize,
    pub subsect_in_sect_pct: f64,
    pub para_in_subsect_pct: f64,
    pub sent_in_para_pct: f64,
    pub para_in_section: usize,
    pub para_in_section_pct: f64,
    pub sent_in_subsect: usize,
    pub sent_in_subsect_pct: f64,
    pub sent_in_sect: usize,
    pub sent_in_sect_pct: f64,
    pub total_sents: usize,
    pub sent_len: usize,
}

fn ratio(index: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        index as f64 / total as f64
    }
}

/// Annotates every sentence of the tree with positional features, in
/// depth-first order.
///
/// One pass maintains the four cumulative counters plus snapshots of the
/// paragraph and sentence counters taken when the current section and
/// subsection began; the in-ancestor counts are differences against those
/// snapshots. An empty document yields no rows.
#[must_use]
pub fn annotate(tree: &StructureTree) -> Vec<SentencePosition> {
    let total_sect = tree.sections.len();
    let total_subsect: usize = tree.sections.iter().map(|s| s.subsections.len()).sum();
    let total_para: usize = tree
        .sections
        .iter()
        .flat_map(|s| &s.subsections)
        .map(|ss| ss.paragraphs.len())
        .sum();
    let total_sent: usize = tree
        .sections
        .iter()
        .flat_map(|s| &s.subsections)
        .flat_map(|ss| &ss.paragraphs)
        .map(|p| p.sentences.len())
        .sum();

    let mut rows = Vec::with_capacity(total_sent);

    let mut cum_sect = 0;
    let mut cum_subsect = 0;
    let mut cum_para = 0;
    let mut cum_sent = 0;
    let mut sect_start_para = 0;
    let mut sect_start_sent = 0;
    let mut subsect_start_sent = 0;

    for section in &tree.sections {
        let sect_subsects = section.subsections.len();
        let sect_paras: usize = section.subsections.iter().map(|ss| ss.paragraphs.len()).sum();
        let sect_sents: usize = section
            .subsections
            .iter()
            .flat_map(|ss| &ss.paragraphs)
            .map(|p| p.sentences.len())
            .sum();

        for (subsect_idx, subsection) in section.subsections.iter().enumerate() {
            let subsect_paras = subsection.paragraphs.len();
            let subsect_sents: usize =
                subsection.paragraphs.iter().map(|p| p.sentences.len()).sum();

            for (para_idx, paragraph) in subsection.paragraphs.iter().enumerate() {
                let para_sents = paragraph.sentences.len();

                for (sent_idx, sentence) in paragraph.sentences.iter().enumerate() {
                    rows.push(SentencePosition {
                        cum_sect,
                        cum_subsect,
                        cum_para,
                        cum_sent,
                        cum_sect_pct: ratio(cum_sect, total_sect),
                        cum_subsect_pct: ratio(cum_subsect, total_subsect),
                        cum_para_pct: ratio(cum_para, total_para),
                        cum_sent_pct: ratio(cum_sent, total_sent),
                        subsect_in_sect: subsect_idx,
                        para_in_subsect: para_idx,
                        sent_in_para: sent_idx,
                        subsect_in_sect_pct: ratio(subsect_idx, sect_subsects),
                        para_in_subsect_pct: ratio(para_idx, subsect_paras),
                        sent_in_para_pct: ratio(sent_idx, para_sents),
                        para_in_section: cum_para - sect_start_para,
                        para_in_section_pct: ratio(cum_para - sect_start_para, sect_paras),
                        sent_in_subsect: cum_sent - subsect_start_sent,
                        sent_in_subsect_pct: ratio(cum_sent - subsect_start_sent, subsect_sents),
                        sent_in_sect: cum_sent - sect_start_sent,
                        sent_in_sect_pct: ratio(cum_sent - sect_start_sent, sect_sents),
                        total_sents: total_sent,
                        sent_len: sentence.chars().count(),
                    });
                    cum_sent += 1;
                }
                cum_para += 1;
            }
            subsect_start_sent = cum_sent;
            cum_subsect += 1;
        }
        sect_start_para = cum_para;
        sect_start_sent = cum_sent;
        cum_sect += 1;
    }

    rows
}
