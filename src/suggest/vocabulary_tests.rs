//! Tests for the fixed vocabularies

use super::*;

#[test]
fn test_column_count_and_order() {
    assert_eq!(COLUMNS.len(), 14);
    assert_eq!(COLUMNS[0], "name");
    assert_eq!(COLUMNS[6], "http_status");
    assert_eq!(COLUMNS[13], "port");
}

#[test]
fn test_operator_entries() {
    assert_eq!(OPERATORS, &["=", "!", ">", "<"]);
}

#[test]
fn test_joiner_entries() {
    assert_eq!(JOINERS, &["&", "|"]);
}

#[test]
fn test_no_vocabulary_is_empty() {
    for vocab in [Vocabulary::Columns, Vocabulary::Operators, Vocabulary::Joiners] {
        assert!(!vocab.entries().is_empty());
    }
}

#[test]
fn test_entries_match_variant() {
    assert_eq!(Vocabulary::Columns.entries(), COLUMNS);
    assert_eq!(Vocabulary::Operators.entries(), OPERATORS);
    assert_eq!(Vocabulary::Joiners.entries(), JOINERS);
}

#[test]
fn test_default_is_columns() {
    assert_eq!(Vocabulary::default(), Vocabulary::Columns);
}

#[test]
fn test_display_labels() {
    assert_eq!(Vocabulary::Columns.to_string(), "columns");
    assert_eq!(Vocabulary::Operators.to_string(), "operators");
    assert_eq!(Vocabulary::Joiners.to_string(), "joiners");
}
