use crate::common::load_fixture;
use insta::assert_snapshot;
use mdwriter_babel::{generate_markdown, parse_input, suggest_filename, TagTable};

#[test]
fn test_health_example() {
    let table = TagTable::with_defaults();
    let lines = parse_input(&table, &load_fixture("health.tags"));

    assert_eq!(suggest_filename(&lines), "BBB.md");
    assert_snapshot!(generate_markdown(&lines), @r"
    ## Health Tips
    - Less Sugar
    - More Veggies
    > Remember to stay hydrated!
    ");
}

#[test]
fn test_mixed_file_markdown() {
    let table = TagTable::with_defaults();
    let lines = parse_input(&table, &load_fixture("mixed.tags"));

    assert_eq!(
        generate_markdown(&lines),
        "# Project Notes\n## Goals\n- Ship the parser\n- Write the docs (later)\n### Risks\n> Measure twice, cut once\n### Indented heading"
    );
}

#[test]
fn test_prd_scheme_output() {
    let table = TagTable::with_defaults();
    let lines = parse_input(
        &table,
        "AAA(Title)\nBBB(Section)\nDDD(Item1)\nDDD(Item2)\nEEE(Note)",
    );
    assert_eq!(
        generate_markdown(&lines),
        "# Title\n## Section\n- Item1\n- Item2\n> Note"
    );
}

#[test]
fn test_alias_equivalence() {
    let table = TagTable::with_defaults();
    let lines = parse_input(&table, "Title1(X)\nBBB(Y)");
    assert_eq!(generate_markdown(&lines), "# X\n## Y");

    for (current, prd) in [
        ("Title1", "AAA"),
        ("Title2", "BBB"),
        ("Title3", "CCC"),
        ("List", "DDD"),
        ("Quote", "EEE"),
    ] {
        let a = generate_markdown(&parse_input(&table, &format!("{current}(same)")));
        let b = generate_markdown(&parse_input(&table, &format!("{prd}(same)")));
        assert_eq!(a, b, "{current} vs {prd}");
    }
}

#[test]
fn test_empty_inputs() {
    let table = TagTable::with_defaults();
    let lines = parse_input(&table, "");
    assert_eq!(generate_markdown(&lines), "");
    assert_eq!(suggest_filename(&lines), "output.md");
}
