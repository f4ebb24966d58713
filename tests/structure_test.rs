use wikisum::clean;
use wikisum::structure::{annotate, flat_sentences, parse};

const RAW: &str = "Lead one. Lead two.\n\n== Alpha ==\nAlpha text.\n\n=== Alpha sub ===\nSub text one. Sub text two.\n\n== Beta ==\nBeta text.";

#[test]
fn cleaned_article_parses_into_expected_hierarchy() {
    let cleaned = clean(RAW);
    let tree = parse(&cleaned);

    // Front matter, Alpha (with its subsection), Beta.
    assert_eq!(tree.sections.len(), 3);
    assert_eq!(tree.sections[0].subsections.len(), 1);
    assert_eq!(tree.sections[1].subsections.len(), 2);
    assert_eq!(tree.sections[2].subsections.len(), 1);
}

#[test]
fn heading_lines_form_their_own_paragraphs() {
    let cleaned = clean(RAW);
    let tree = parse(&cleaned);

    let alpha = &tree.sections[1].subsections[0];
    assert_eq!(alpha.paragraphs.len(), 2);
    assert_eq!(alpha.paragraphs[0].sentences, vec!["== Alpha =="]);
    assert_eq!(alpha.paragraphs[1].sentences, vec!["Alpha text."]);

    let sub = &tree.sections[1].subsections[1];
    assert_eq!(sub.paragraphs[0].sentences, vec!["=== Alpha sub ==="]);
}

#[test]
fn tree_walk_matches_flat_sentence_order() {
    let cleaned = clean(RAW);
    let tree = parse(&cleaned);
    let walked: Vec<&str> = tree.sentences().collect();
    let flat = flat_sentences(&cleaned);
    assert_eq!(flat, walked);
    assert_eq!(flat.len(), 9);
}

#[test]
fn annotation_counts_run_document_wide() {
    let cleaned = clean(RAW);
    let rows = annotate(&parse(&cleaned));
    assert_eq!(rows.len(), 9);

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.cum_sent, i);
        assert_eq!(row.total_sents, 9);
        assert!((row.cum_sent_pct - i as f64 / 9.0).abs() < 1e-12);
    }

    let last = &rows[8];
    assert_eq!(last.cum_sect, 2);
    assert_eq!(last.cum_para, 6);
}

#[test]
fn annotation_resets_within_each_ancestor() {
    let cleaned = clean(RAW);
    let rows = annotate(&parse(&cleaned));

    // "Sub text two." is the second sentence of its paragraph and the
    // third sentence of the Alpha subsection span counted from its start.
    let sub_two = rows
        .iter()
        .zip(flat_sentences(&cleaned))
        .find(|(_, s)| s == "Sub text two.")
        .map(|(r, _)| r.clone())
        .expect("sentence present");
    assert_eq!(sub_two.sent_in_para, 1);
    assert_eq!(sub_two.sent_in_subsect, 2);

    // "== Beta ==" opens a fresh section: in-section counters restart.
    let beta = rows
        .iter()
        .zip(flat_sentences(&cleaned))
        .find(|(_, s)| s == "== Beta ==")
        .map(|(r, _)| r.clone())
        .expect("sentence present");
    assert_eq!(beta.para_in_section, 0);
    assert_eq!(beta.sent_in_sect, 0);
    assert_eq!(beta.cum_sect, 2);
}

#[test]
fn percentiles_lie_in_the_unit_interval() {
    let cleaned = clean(RAW);
    for row in annotate(&parse(&cleaned)) {
        for pct in [
            row.cum_sect_pct,
            row.cum_subsect_pct,
            row.cum_para_pct,
            row.cum_sent_pct,
            row.subsect_in_sect_pct,
            row.para_in_subsect_pct,
            row.sent_in_para_pct,
            row.para_in_section_pct,
            row.sent_in_subsect_pct,
            row.sent_in_sect_pct,
        ] {
            assert!((0.0..1.0).contains(&pct), "percentile out of range: {pct}");
        }
    }
}

#[test]
fn article_without_headings_is_one_section() {
    let cleaned = clean("Only a lead paragraph here.\n\nAnd a second paragraph.");
    let tree = parse(&cleaned);
    assert_eq!(tree.sections.len(), 1);
    assert_eq!(tree.sections[0].subsections.len(), 1);
    assert_eq!(tree.sections[0].subsections[0].paragraphs.len(), 2);
}
