//! Translate tag syntax, then analyze the generated markdown.

use mdwriter_babel::{analyze, generate_markdown, parse_input, TagTable};
use proptest::prelude::*;

fn tagged_line() -> impl Strategy<Value = (String, String)> {
    let prefixes = TagTable::with_defaults().prefixes();
    (
        proptest::sample::select(prefixes),
        "[A-Za-z0-9][A-Za-z0-9 ]{0,24}",
    )
}

proptest! {
    #[test]
    fn heading_counts_follow_title_tags(lines in proptest::collection::vec(tagged_line(), 0..40)) {
        let table = TagTable::with_defaults();
        let input = lines
            .iter()
            .map(|(prefix, content)| format!("{prefix}({content})"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = parse_input(&table, &input);
        prop_assert_eq!(parsed.len(), lines.len());

        let stats = analyze(&generate_markdown(&parsed));
        let count = |names: [&str; 2]| lines.iter().filter(|(p, _)| names.contains(&p.as_str())).count();

        prop_assert_eq!(stats.heading_levels.h1, count(["Title1", "AAA"]));
        prop_assert_eq!(stats.heading_levels.h2, count(["Title2", "BBB"]));
        prop_assert_eq!(stats.heading_levels.h3, count(["Title3", "CCC"]));
        prop_assert_eq!(stats.list_item_count, count(["List", "DDD"]));
        prop_assert_eq!(stats.quote_count, count(["Quote", "EEE"]));
    }
}

#[test]
fn test_fixture_round_trip() {
    let table = TagTable::with_defaults();
    let parsed = parse_input(&table, "AAA(Title)\nBBB(Section)\nDDD(Item1)\nDDD(Item2)\nEEE(Note)");
    let stats = analyze(&generate_markdown(&parsed));

    assert_eq!(stats.heading_levels.h1, 1);
    assert_eq!(stats.heading_levels.h2, 1);
    assert_eq!(stats.list_item_count, 2);
    assert_eq!(stats.quote_count, 1);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.word_count, 5);
}
