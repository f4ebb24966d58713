//! # wikisum
//!
//! Extractive summarization of Wikipedia articles from raw wiki markup.
//!
//! The pipeline cleans an article's markup, parses the cleaned text into a
//! section/subsection/paragraph/sentence hierarchy, builds one feature row
//! per sentence, asks a pluggable classifier which sentences to keep, and
//! reassembles the kept sentences into an HTML summary.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikisum::{summarize_article, KeepAll};
//!
//! let raw = "'''Ferris''' is a [[crab|crustacean]].\n\n== Habitat ==\nFerris lives offshore.";
//!
//! let summary = summarize_article(raw, "ferris", &KeepAll)?;
//! assert!(summary.starts_with("<b>Ferris</b>"));
//! # Ok::<(), wikisum::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Markup Cleaning**: Strips templates, references, tables and link syntax from raw wiki text
//! - **Structure Parsing**: Four-level document hierarchy with per-sentence position features
//! - **Pluggable Prediction**: Keep/drop decisions behind a trait, with a serialized linear bundle included
//! - **Request Handling**: Topic normalization, redirect resolution and not-found answers

mod error;
mod options;
mod patterns;
mod result;
mod summarize;

/// Wiki markup cleaning: the ordered transforms from raw page to clean text.
pub mod cleaner;

/// Sentence splitting and word tokenization.
pub mod tokenize;

/// Document hierarchy parsing and positional annotation.
pub mod structure;

/// Lexicon-based polarity and subjectivity scoring.
pub mod sentiment;

/// Per-sentence feature rows and the model input schema.
pub mod features;

/// The predictor trait and the serialized linear model bundle.
pub mod model;

/// Summary assembly and HTML rendering.
pub mod summary;

/// Article sources, redirects and title conventions.
pub mod source;

// Public API - re-exports
pub use cleaner::clean;
pub use error::{Error, Result};
pub use features::{SentenceKind, SentenceRecord, FEATURE_COLUMNS};
pub use model::{KeepAll, LinearModel, Predictor};
pub use options::Options;
pub use result::SummaryResponse;
pub use source::ArticleSource;
pub use summarize::{summarize_article, Summarizer};
