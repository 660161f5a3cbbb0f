use crate::common::load_fixture;
use mdwriter_babel::{parse_document, parse_input, RecognitionError, RecognitionErrorKind, TagTable};

#[test]
fn test_mixed_file_keeps_good_lines_in_order() {
    let table = TagTable::with_defaults();
    let outcome = parse_document(&table, &load_fixture("mixed.tags"));

    let prefixes: Vec<_> = outcome.lines.iter().map(|l| l.prefix.as_str()).collect();
    assert_eq!(
        prefixes,
        vec!["Title1", "Title2", "List", "List", "Title3", "Quote", "CCC"]
    );
    assert_eq!(outcome.suggested_filename(), "Title1.md");
}

#[test]
fn test_mixed_file_diagnostics() {
    let table = TagTable::with_defaults();
    let outcome = parse_document(&table, &load_fixture("mixed.tags"));

    assert_eq!(outcome.diagnostics.len(), 2);

    let malformed = &outcome.diagnostics[0];
    assert_eq!(malformed.line_number, 6);
    assert_eq!(malformed.error.kind(), RecognitionErrorKind::MalformedLine);
    assert_eq!(malformed.error.offending_text(), "this line is not a tag");

    let unknown = &outcome.diagnostics[1];
    assert_eq!(unknown.line_number, 8);
    match &unknown.error {
        RecognitionError::UnknownPrefix { prefix, known } => {
            assert_eq!(prefix, "FFF");
            assert!(known.contains(&"AAA".to_string()));
            assert!(known.contains(&"Title1".to_string()));
        }
        other => panic!("Expected UnknownPrefix, got {other:?}"),
    }
}

#[test]
fn test_five_lines_with_two_invalid() {
    let table = TagTable::with_defaults();
    let input = "AAA(one)\nnope\nBBB(three)\nXYZ(four)\nCCC(five)";
    let lines = parse_input(&table, input);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].content, "one");
    assert_eq!(lines[1].content, "three");
    assert_eq!(lines[2].content, "five");
}

#[test]
fn test_only_garbage_is_nothing_to_render() {
    let table = TagTable::with_defaults();
    let outcome = parse_document(&table, "hello\nworld(\n)\n");
    assert!(outcome.is_empty());
    assert_eq!(outcome.diagnostics.len(), 3);
    assert_eq!(outcome.suggested_filename(), "output.md");
}

#[test]
fn test_extended_table_adds_prefixes() {
    let table = TagTable::builder_with_defaults()
        .tag("Title4", "####")
        .build()
        .expect("valid table");
    let lines = parse_input(&table, "Title4(Deep)\nAAA(Top)");
    assert_eq!(lines[0].markdown, "#### Deep");
    assert_eq!(lines[1].markdown, "# Top");
}
