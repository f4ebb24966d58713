//! Summary assembly and HTML rendering.
//!
//! [`assemble`] joins the kept sentences back into one string, restoring
//! paragraph breaks where the kept text crosses a paragraph boundary.
//! [`render_html`] then rewrites the wiki emphasis, heading and list markers
//! still present in kept sentences into HTML tags. All rewriting is done by
//! bounded left-to-right scans: every step consumes at least one marker and
//! resumes past what it wrote, so rendering terminates on any input,
//! malformed markup included.

use regex::Regex;

use crate::patterns::{BULLET_RUN, NUMBERED_RUN};
use crate::structure::PARAGRAPH_BREAK;

/// Joins kept sentences into the summary string.
///
/// `paragraphs` carries each sentence's cumulative paragraph index and
/// `decisions` the keep flags; all three slices run in sentence order. The
/// first kept sentence starts the summary, later ones attach with a space,
/// or with a paragraph break when their paragraph index has advanced past
/// the previously kept sentence's.
#[must_use]
pub fn assemble(sentences: &[String], paragraphs: &[usize], decisions: &[bool]) -> String {
    let mut summary = String::new();
    let mut first = true;
    let mut last_paragraph = 0;

    for ((sentence, &paragraph), &keep) in sentences.iter().zip(paragraphs).zip(decisions) {
        if !keep {
            continue;
        }
        if first {
            first = false;
        } else if paragraph > last_paragraph {
            summary.push_str(PARAGRAPH_BREAK);
        } else {
            summary.push(' ');
        }
        summary.push_str(sentence);
        last_paragraph = paragraph;
    }

    summary
}

/// Replaces same-marker pairs left to right: the next two occurrences of
/// `marker` become `open_tag` and `close_tag`. An unpaired trailing marker
/// stays as is. Resuming after the written close tag makes each iteration
/// strictly shrink the unscanned suffix.
fn rewrite_spans(text: &mut String, marker: &str, open_tag: &str, close_tag: &str) {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find(marker) {
        let open = search_from + found;
        let after_open = open + marker.len();
        let Some(close_found) = text[after_open..].find(marker) else {
            break;
        };
        let close = after_open + close_found;
        text.replace_range(close..close + marker.len(), close_tag);
        text.replace_range(open..open + marker.len(), open_tag);
        search_from = close + open_tag.len() - marker.len() + close_tag.len();
    }
}

/// Wraps each marker-led run (up to the next paragraph break or end of
/// text) in list tags. The scan resumes just inside the written open tag,
/// so markers buried mid-run are picked up on the next pass. Each step
/// removes one marker character and the tags contain none, so the loop
/// terminates.
fn wrap_list_runs(text: &mut String, run: &Regex, open_tag: &str, close_tag: &str) {
    let mut search_from = 0;
    while let Some(found) = run.find_at(text, search_from) {
        let (start, end) = (found.start(), found.end());
        let inner = text[start + 1..end].to_string();
        text.replace_range(start..end, &format!("{open_tag}{inner}{close_tag}"));
        search_from = start + open_tag.len();
    }
}

/// Merges everything from the first `open_tag` to the last `close_tag` into
/// one list block, dropping the intermediate list tags and any line breaks
/// caught inside.
fn collapse_list_block(text: &mut String, open_tag: &str, close_tag: &str) {
    let Some(start) = text.find(open_tag) else {
        return;
    };
    let Some(last_close) = text.rfind(close_tag) else {
        return;
    };
    let inner_start = start + open_tag.len();
    if last_close < inner_start {
        return;
    }
    let inner = text[inner_start..last_close]
        .replace(open_tag, "")
        .replace(close_tag, "")
        .replace("<br>", "");
    let end = last_close + close_tag.len();
    text.replace_range(start..end, &format!("{open_tag}{inner}{close_tag}"));
}

/// Rewrites remaining wiki markup in an assembled summary to HTML.
///
/// Bold and italic quotes become `<b>`/`<i>`, heading markers become bold
/// or bold-italic spans, and bullet and numbered runs become a `<ul>` or
/// `<ol>` list. Longer markers rewrite before their prefixes, so `===` is
/// never consumed by the `==` pass.
#[must_use]
pub fn render_html(summary: &str) -> String {
    let mut html = summary.to_string();
    rewrite_spans(&mut html, "'''", "<b>", "</b>");
    rewrite_spans(&mut html, "''", "<i>", "</i>");
    rewrite_spans(&mut html, "====", "<i>", "</i>");
    rewrite_spans(&mut html, "===", "<b><i>", "</i></b>");
    rewrite_spans(&mut html, "==", "<b>", "</b>");

    let mut html = html
        .replace("<b> ", "<b>")
        .replace("<i> ", "<i>")
        .replace(" </b>", "</b>")
        .replace(" </i>", "</i>");

    wrap_list_runs(&mut html, &BULLET_RUN, "<ul><li>", "</li></ul>");
    wrap_list_runs(&mut html, &NUMBERED_RUN, "<ol><li>", "</li></ol>");
    collapse_list_block(&mut html, "<ul>", "</ul>");
    collapse_list_block(&mut html, "<ol>", "</ol>");

    html
}
