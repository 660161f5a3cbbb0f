use crate::common::load_fixture;
use mdwriter_babel::analyze;

#[test]
fn test_guide_structure() {
    let stats = analyze(&load_fixture("guide.md"));

    assert_eq!(stats.heading_levels.h1, 1);
    assert_eq!(stats.heading_levels.h2, 1);
    assert_eq!(stats.heading_levels.h3, 1);
    assert_eq!(stats.heading_levels.total(), 3);
    assert_eq!(stats.list_item_count, 3);
    assert_eq!(stats.quote_count, 1);
    assert_eq!(stats.code_block_count, 2);
    assert_eq!(stats.paragraph_count, 8);
}

#[test]
fn test_guide_links_and_words() {
    let stats = analyze(&load_fixture("guide.md"));

    // the image also matches the link pattern
    assert_eq!(stats.link_count, 2);
    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.word_count, 36);
}

#[test]
fn test_guide_ratios_are_complementary() {
    let stats = analyze(&load_fixture("guide.md"));

    assert!(stats.formatting_ratio > 0.0);
    assert!(stats.plain_text_ratio > stats.formatting_ratio);
    let sum = stats.plain_text_ratio + stats.formatting_ratio;
    assert!((sum - 100.0).abs() <= 0.1, "ratios sum to {sum}");
}

#[test]
fn test_heading_text_and_list_sample() {
    let stats = analyze("# A\n\nText\n\n- item\n");
    assert_eq!(stats.paragraph_count, 3);
    assert_eq!(stats.heading_levels.h1, 1);
    assert_eq!(stats.list_item_count, 1);
}

#[test]
fn test_single_fenced_block() {
    let stats = analyze("Intro\n\n```\nlet x = 1;\n```\n");
    assert_eq!(stats.code_block_count, 2);
}

#[test]
fn test_empty_text() {
    let stats = analyze("");
    assert_eq!(stats.plain_text_ratio, 0.0);
    assert_eq!(stats.formatting_ratio, 0.0);
    assert_eq!(stats.paragraph_count, 0);
    assert_eq!(stats.average_words_per_paragraph(), 0.0);
}
