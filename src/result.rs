//! Result types for summarization output.
//!
//! This module defines the structured response a summarization request
//! produces, shaped for JSON serving.

use serde::{Deserialize, Serialize};

/// The answer to one summarization request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The assembled summary, HTML-rendered unless rendering is disabled.
    /// For a topic with no page this carries the not-found message.
    pub summary: String,

    /// The underscore-form title the summary was built from: the normalized
    /// request topic, or the redirect target when a redirect was followed.
    pub wiki_topic: String,
}
