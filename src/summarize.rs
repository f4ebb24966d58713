//! The summarization pipeline.
//!
//! Ties the stages together: clean the raw markup, build one feature row
//! per sentence, ask the predictor which sentences to keep, then assemble
//! and render the summary. [`Summarizer`] adds the request-level concerns
//! on top: topic normalization, redirect resolution and the not-found
//! answer for topics without a page.

use crate::cleaner;
use crate::error::{Error, Result};
use crate::features::{self, SentenceRecord};
use crate::model::Predictor;
use crate::options::Options;
use crate::result::SummaryResponse;
use crate::source::{self, ArticleSource};
use crate::summary;

/// Summarizes one article's raw wiki markup with default options.
pub fn summarize_article(raw: &str, topic: &str, predictor: &dyn Predictor) -> Result<String> {
    run_pipeline(raw, topic, predictor, &Options::default())
}

fn run_pipeline<P: Predictor + ?Sized>(
    raw: &str,
    topic: &str,
    predictor: &P,
    options: &Options,
) -> Result<String> {
    let cleaned = cleaner::clean(raw);
    let records = features::build_records(&cleaned, topic);
    if records.is_empty() {
        return Ok(String::new());
    }

    let rows: Vec<Vec<f64>> = records.iter().map(SentenceRecord::feature_vector).collect();
    let decisions = predictor.predict(&rows)?;
    if decisions.len() != records.len() {
        return Err(Error::PredictionError(format!(
            "{} decisions for {} sentences",
            decisions.len(),
            records.len()
        )));
    }

    let mut sentences = Vec::with_capacity(records.len());
    let mut paragraphs = Vec::with_capacity(records.len());
    for record in records {
        paragraphs.push(record.position.cum_para);
        sentences.push(record.sentence);
    }

    let assembled = summary::assemble(&sentences, &paragraphs, &decisions);
    Ok(if options.render_html {
        summary::render_html(&assembled)
    } else {
        assembled
    })
}

/// A loaded pipeline: one predictor plus options, reusable across requests.
///
/// Nothing here mutates after construction, so one summarizer can serve
/// concurrent requests behind a shared reference.
#[derive(Debug, Clone)]
pub struct Summarizer<P> {
    predictor: P,
    options: Options,
}

impl<P: Predictor> Summarizer<P> {
    /// A summarizer with default options.
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            options: Options::default(),
        }
    }

    /// A summarizer with explicit options.
    pub fn with_options(predictor: P, options: Options) -> Self {
        Self { predictor, options }
    }

    /// The options this summarizer runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Summarizes raw wiki markup for `topic`.
    pub fn summarize_raw(&self, raw: &str, topic: &str) -> Result<String> {
        run_pipeline(raw, topic, &self.predictor, &self.options)
    }

    /// Answers a request for `topic` against `source`.
    ///
    /// The topic is normalized to title form and a redirect stub is
    /// followed one hop when enabled. A fetch failure becomes a normal
    /// response carrying the not-found message for the title that failed;
    /// predictor errors propagate to the caller.
    pub fn respond<S: ArticleSource + ?Sized>(
        &self,
        source: &S,
        topic: &str,
    ) -> Result<SummaryResponse> {
        let mut wiki_topic = source::normalize_topic(topic);
        match self.fetch_resolved(source, &mut wiki_topic) {
            Ok(raw) => {
                let summary = self.summarize_raw(&raw, &wiki_topic)?;
                Ok(SummaryResponse {
                    summary,
                    wiki_topic,
                })
            }
            Err(Error::FetchError(_)) => Ok(SummaryResponse {
                summary: source::not_found_message(&wiki_topic),
                wiki_topic,
            }),
            Err(err) => Err(err),
        }
    }

    /// Fetches `title`, following one redirect hop when enabled. The title
    /// is rewritten to the redirect target before the second fetch, so a
    /// failed second fetch reports the target title.
    fn fetch_resolved<S: ArticleSource + ?Sized>(
        &self,
        source: &S,
        title: &mut String,
    ) -> Result<String> {
        let raw = source.fetch_raw(title)?;
        if !self.options.resolve_redirects || !source::is_redirect(&raw) {
            return Ok(raw);
        }
        let target = source::redirect_target(&raw).ok_or_else(|| {
            Error::FetchError(format!("redirect page for {title} has no target link"))
        })?;
        *title = target;
        source.fetch_raw(title)
    }
}
