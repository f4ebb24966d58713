use wikisum::clean;

#[test]
fn clean_strips_infobox_links_refs_and_trailing_sections() {
    let raw = "{{Infobox settlement\n|name = Riverton\n|population = 12000\n}}\n\
'''Riverton''' is a town on the [[Green River (Utah)|Green River]].<ref>Atlas entry.</ref> It was settled in 1870.\n\
\n\
== History ==\n\
The town grew around a [[ferry]] crossing.{{citation needed}}\n\
\n\
=== Founding ===\n\
Settlers arrived by wagon.<ref name=\"hist\"/>\n\
\n\
== Notable people ==\n\
* [[Jane Doe|Jane Doe (author)]]\n\
* John Roe\n\
\n\
== References ==\n\
<references />\n\
\n\
== External links ==\n\
[https://example.com Official site]\n";

    let cleaned = clean(raw);
    assert_eq!(
        cleaned,
        "'''Riverton''' is a town on the Green River. It was settled in 1870.\
<br><br>== History ==\
<br><br>The town grew around a ferry crossing.\
<br><br>=== Founding ===\
<br><br>Settlers arrived by wagon.\
<br><br>== Notable people ==\
<br><br>* Jane Doe (author)\
<br><br>* John Roe"
    );
}

#[test]
fn clean_reformats_tables_into_rows() {
    let raw = "Intro.\n{| class=\"wikitable\"\n! Year !! Event\n|-\n| 1870 || Founded\n|}\nOutro.";
    let cleaned = clean(raw);
    assert_eq!(
        cleaned,
        "Intro.<br><br>TABLE:<br><br>Year|| Event||<br><br>|| 1870|| Founded||<br><br>Outro."
    );
}

#[test]
fn clean_drops_media_links_but_keeps_piped_display_text() {
    let raw = "A [[File:Map.png|thumb|The town in 1900]] stood here.\nSee [[Main Street|the main street]].";
    let cleaned = clean(raw);
    assert_eq!(
        cleaned,
        "A  stood here.<br><br>See the main street."
    );
}

#[test]
fn clean_cuts_at_leftmost_trailing_section() {
    let raw = "Body text.\n\n== See also ==\nlinks\n\n== References ==\nrefs";
    assert_eq!(clean(raw), "Body text.");
}

#[test]
fn clean_handles_lowercase_and_spaceless_trailing_headers() {
    assert_eq!(clean("Body.\n==references==\nrefs"), "Body.");
    assert_eq!(clean("Body.\n== further reading ==\nbooks"), "Body.");
}

#[test]
fn clean_removes_comments_galleries_and_divs() {
    let raw = "Keep<!-- editorial note --> this.\n<gallery>\nFile:a.png\n</gallery>\n<div class=\"navbox\">nav</div>\nAnd this.";
    assert_eq!(clean(raw), "Keep this.<br><br>And this.");
}

#[test]
fn clean_preserves_emphasis_heading_and_list_markers() {
    let raw = "'''Bold''' and ''italic''.\n\n== Section ==\n* bullet\n# numbered";
    let cleaned = clean(raw);
    assert!(cleaned.contains("'''Bold'''"));
    assert!(cleaned.contains("''italic''"));
    assert!(cleaned.contains("== Section =="));
    assert!(cleaned.contains("* bullet"));
    assert!(cleaned.contains("# numbered"));
}

#[test]
fn clean_output_paragraphs_are_double_breaks_only() {
    let raw = "One.\n\n\n\nTwo.\nThree.";
    let cleaned = clean(raw);
    assert_eq!(cleaned, "One.<br><br>Two.<br><br>Three.");
    assert!(!cleaned.contains("<br><br><br>"));
}
