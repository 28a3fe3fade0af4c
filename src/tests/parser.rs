use super::{parse_sections, scan_headings, split_list_items, subsection_of, FALLBACK_SECTION};

const DOC: &str = "# Hero\n\n## Title\nLuxe **Salon**\n\n## Subhead\nHair, beauty, spa.\n\n# About\n## Title\nWho we are\n## Paragraphs\n- First para\n- Second para\n\n# Pricing\n## Subhead\nFair prices\n### Hair Services\n- Cut | ₹499\n- Colour | ₹1499\n### Spa & Wellness\n- Massage | ₹999\n";

#[test]
fn test_headless_document_falls_back_to_faq() {
    let raw = "\n  Q: Do you take walk-ins?\nA: Yes.\n\n";
    let sections = parse_sections(raw);

    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections.get(FALLBACK_SECTION),
        Some("Q: Do you take walk-ins?\nA: Yes.")
    );
}

#[test]
fn test_one_entry_per_top_level_heading() {
    let sections = parse_sections(DOC);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections.names(), vec!["Hero", "About", "Pricing"]);
    assert!(sections.get("FAQ").is_none());
}

#[test]
fn test_spans_reconstruct_document() {
    let sections = parse_sections(DOC);
    assert_eq!(sections.spans().concat(), DOC);
}

#[test]
fn test_section_body_is_trimmed_and_excludes_heading() {
    let sections = parse_sections("# About   \n\n  body text  \n\n# Next\nx");
    assert_eq!(sections.get("About"), Some("body text"));
    assert_eq!(sections.get("Next"), Some("x"));
}

#[test]
fn test_second_level_markers_are_not_top_level() {
    let sections = parse_sections("## Only a sub\ntext\n#NoSpace\n");
    assert_eq!(sections.names(), vec![FALLBACK_SECTION]);
}

#[test]
fn test_duplicate_names_last_write_wins() {
    let sections = parse_sections("# Hero\nfirst\n# Hero\nsecond\n");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections.get("Hero"), Some("second"));
    assert_eq!(sections.names(), vec!["Hero", "Hero"]);
}

#[test]
fn test_heading_names_are_case_sensitive() {
    let sections = parse_sections(DOC);
    assert!(sections.get("hero").is_none());
    assert_eq!(sections.section("hero"), "");
}

#[test]
fn test_subsection_is_case_insensitive() {
    let sections = parse_sections(DOC);
    assert_eq!(sections.subsection("Hero", "title"), "Luxe **Salon**");
    assert_eq!(sections.subsection("Hero", "SUBHEAD"), "Hair, beauty, spa.");
    assert_eq!(subsection_of(&sections, "About", "Title"), "Who we are");
}

#[test]
fn test_missing_subsection_is_empty() {
    let sections = parse_sections(DOC);
    assert_eq!(sections.subsection("Hero", "Footer"), "");
    assert_eq!(sections.subsection("Nowhere", "Title"), "");
    assert!(sections.items("Nowhere", "Items").is_empty());
}

#[test]
fn test_last_subsection_runs_to_section_end() {
    let sections = parse_sections(DOC);
    assert_eq!(
        sections.subsection("About", "Paragraphs"),
        "- First para\n- Second para"
    );
}

#[test]
fn test_subsection_includes_deeper_blocks() {
    let sections = parse_sections(DOC);
    let subhead = sections.subsection("Pricing", "Subhead");
    assert!(subhead.starts_with("Fair prices"));
    assert!(subhead.contains("### Hair Services"));
}

#[test]
fn test_nested_blocks_match_exactly() {
    let sections = parse_sections(DOC);
    assert_eq!(
        sections.nested("Pricing", "Hair Services"),
        "- Cut | ₹499\n- Colour | ₹1499"
    );
    assert_eq!(sections.nested("Pricing", "Spa & Wellness"), "- Massage | ₹999");
    assert_eq!(sections.nested("Pricing", "hair services"), "");
}

#[test]
fn test_list_items_split_on_bullets() {
    assert_eq!(split_list_items("- a\n- b\n- c"), vec!["a", "b", "c"]);
    assert!(split_list_items("").is_empty());
    assert!(split_list_items("  \n\n").is_empty());
}

#[test]
fn test_list_items_keep_order_and_continuations() {
    let items = split_list_items("intro\n-   one\n    still one\n-\n- two  \n--not a bullet");
    assert_eq!(items, vec!["intro", "one\n    still one", "two  \n--not a bullet"]);
}

#[test]
fn test_scanner_records_lines_and_offsets() {
    let tokens = scan_headings("x\n## A\ny\n##   B  \n", 2);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name, "A");
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[0].start, 2);
    assert_eq!(tokens[0].end, 6);
    assert_eq!(tokens[1].name, "B");
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn test_crlf_documents() {
    let sections = parse_sections("# Hero\r\n## Title\r\nHello\r\n");
    assert_eq!(sections.subsection("Hero", "Title"), "Hello");
}
