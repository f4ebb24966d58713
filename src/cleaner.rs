//! Wiki markup cleaning.
//!
//! Turns raw wiki markup into a flat, paragraph-delimited text where the only
//! remaining markup is headings, list markers, inline quotes and normalized
//! `TABLE:` blocks, with `<br><br>` as the canonical paragraph separator.
//! Every transform is total: malformed markup degrades to pass-through,
//! never to a panic.

use crate::patterns;

/// Cleans a raw wiki markup article.
///
/// Transforms are applied in a fixed order; each consumes the previous
/// step's output. Running `clean` on already-cleaned text is a no-op.
#[must_use]
pub fn clean(raw: &str) -> String {
    let text = strip_templates(raw);
    let text = resolve_links(&text);
    let text = reformat_tables(&text);
    let text = text.replace('\n', "<br>");
    let text = patterns::REF_PAIR.replace_all(&text, "");
    let text = patterns::REF_SELF_CLOSING.replace_all(&text, "");
    let text = patterns::SUP_PAIR.replace_all(&text, "");
    let text = truncate_trailing_sections(&text);
    let text = patterns::GALLERY_PAIR.replace_all(&text, "");
    let text = patterns::HTML_COMMENT.replace_all(&text, "");
    let text = patterns::DIV_PAIR.replace_all(&text, "");
    normalize_spacing(&text)
}

/// Removes balanced `{{...}}` template blocks, nested pairs included.
///
/// A depth counter tracks nesting so inner pairs cannot close the outer
/// block early. Unmatched closers at depth zero pass through unchanged;
/// the counter never goes negative.
#[must_use]
fn strip_templates(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut last = '\0';
    let mut depth: u32 = 0;

    for (i, &ch) in chars.iter().enumerate() {
        if last == '{' && ch == '{' {
            depth += 1;
        } else if last == '}' && ch == '}' && depth > 0 {
            depth -= 1;
        } else if depth == 0 {
            // The first brace of an opening pair is suppressed by lookahead.
            if !(ch == '{' && chars.get(i + 1) == Some(&'{')) {
                out.push(ch);
            }
        }
        last = ch;
    }

    out
}

/// True for link targets that carry no prose: media and category links.
fn is_dropped_link(contents: &str) -> bool {
    ["file:", "image:", "category:"]
        .iter()
        .any(|prefix| {
            contents
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
}

/// Resolves balanced `[[...]]` link blocks to their display text.
///
/// File, image and category links are dropped whole. Piped links keep only
/// the text after the last `|`. The accumulated content always ends with
/// the first bracket of the closing pair, which is trimmed off.
#[must_use]
fn resolve_links(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut contents = String::new();
    let mut last = '\0';
    let mut depth: u32 = 0;

    for (i, &ch) in chars.iter().enumerate() {
        if last == '[' && ch == '[' {
            depth += 1;
        } else if last == ']' && ch == ']' && depth > 0 {
            depth -= 1;
            if depth == 0 {
                if !is_dropped_link(&contents) {
                    let display = contents.rsplit('|').next().unwrap_or_default();
                    out.push_str(display.strip_suffix(']').unwrap_or(display));
                }
                contents.clear();
            }
        } else if depth == 0 {
            if !(ch == '[' && chars.get(i + 1) == Some(&'[')) {
                out.push(ch);
            }
        } else {
            contents.push(ch);
        }
        last = ch;
    }

    // Lone closers left at line starts by "]]]]" runs.
    out.replace("\n]", "\n")
}

/// Rewrites `{|...|}` table blocks into a `TABLE:` marker followed by
/// `||`-delimited rows. Tables are reformatted, not removed; they surface
/// later as table-type sentences.
#[must_use]
fn reformat_tables(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut contents = String::new();
    let mut last = '\0';
    let mut depth: u32 = 0;

    for (i, &ch) in chars.iter().enumerate() {
        if last == '{' && ch == '|' {
            depth += 1;
        } else if last == '|' && ch == '}' && depth > 0 {
            depth -= 1;
            if depth == 0 {
                out.push_str("TABLE:\n");
                out.push_str(&normalize_table(&contents));
                out.push('\n');
                contents.clear();
            }
        } else if depth == 0 {
            if !(ch == '{' && chars.get(i + 1) == Some(&'|')) {
                out.push(ch);
            }
        } else {
            contents.push(ch);
        }
        last = ch;
    }

    out
}

/// Normalizes captured table content into `||`-delimited rows.
///
/// The first line is the table attribute line and is dropped. The replace
/// chain order matters: single pipes are doubled before the collapse steps
/// rebuild row breaks out of long pipe runs.
fn normalize_table(contents: &str) -> String {
    let body = contents.splitn(2, '\n').nth(1).unwrap_or_default();
    let t = body.replace('\n', "");
    let t = patterns::TABLE_STYLE_ATTR.replace_all(&t, "|");
    let t = t.replace("<br/>", " ");
    let t = t.replace("<br>", " ");
    let t = t.replace("!!", "||");
    let t = t.replace("! ", "");
    let t = t.replace("|-|", "||\n||");
    let t = t.replace("|-", "||");
    let t = t.replace("|+ |", "||");
    let t = t.replace(" |", "\n|");
    let t = t.replace('|', "||");
    let t = t.replace('\n', "");
    let t = t.replace("||||||||", "||\n||");
    let t = t.replace("||||||", "||\n||");
    let t = t.replace("||||", "||");
    t.replace("|||", "||")
}

/// Lowercases the first character of a header name.
fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncates the article at the start of trailing reference material.
///
/// Each known trailing header is probed at its heading level, with and
/// without a space after the marker and in both first-letter cases. Each
/// probe finds its last occurrence; the cut point is the leftmost of those.
#[must_use]
fn truncate_trailing_sections(text: &str) -> String {
    let mut cut: Option<usize> = None;

    for (level, name) in patterns::TRAILING_SECTIONS {
        for form in [name.to_string(), lowercase_first(name)] {
            for probe in [format!("{level} {form}"), format!("{level}{form}")] {
                if let Some(pos) = text.rfind(&probe) {
                    cut = Some(cut.map_or(pos, |c| c.min(pos)));
                }
            }
        }
    }

    match cut {
        Some(pos) => text[..pos].to_string(),
        None => text.to_string(),
    }
}

/// Collapses line spacing so every paragraph boundary is exactly one
/// `<br><br>`. Blank lines are dropped; line content is left untrimmed.
#[must_use]
fn normalize_spacing(text: &str) -> String {
    let lines: Vec<&str> = text
        .trim()
        .split("<br>")
        .filter(|line| !line.trim().is_empty())
        .collect();

    lines.join("<br><br>")
}
