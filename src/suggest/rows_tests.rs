//! Tests for suggestion row construction

use super::*;
use crate::suggest::Vocabulary;

#[test]
fn test_operator_rows_exact() {
    let rows = suggestion_rows(Vocabulary::Operators);
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[0].token, "=");
    assert_eq!(rows[0].badge, Badge::Success);
    assert_eq!(rows[0].description, "Filters Subdomain Equals Some Value");

    assert_eq!(rows[1].token, "!");
    assert_eq!(rows[1].badge, Badge::Danger);
    assert_eq!(rows[1].description, "Filters Subdomain Not Equals Some Value");

    assert_eq!(rows[2].token, ">");
    assert_eq!(rows[2].badge, Badge::Dark);
    assert_eq!(
        rows[2].description,
        "Filters Subdomain Greater than Some Value"
    );

    assert_eq!(rows[3].token, "<");
    assert_eq!(rows[3].badge, Badge::Dark);
    assert_eq!(rows[3].description, "Filters Subdomain Less than Some Value");
}

#[test]
fn test_joiner_rows_exact() {
    let rows = suggestion_rows(Vocabulary::Joiners);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].token, "&");
    assert_eq!(rows[0].badge, Badge::Danger);
    assert_eq!(rows[0].description, "Match Subdomain if all args are true");

    assert_eq!(rows[1].token, "|");
    assert_eq!(rows[1].badge, Badge::Warning);
    assert_eq!(rows[1].description, "Match Subdomain if either of one is true");
}

#[test]
fn test_column_rows_use_contains_description() {
    let rows = suggestion_rows(Vocabulary::Columns);
    assert_eq!(rows.len(), 14);

    for row in &rows {
        assert_eq!(row.badge, Badge::Info);
        assert_eq!(
            row.description,
            format!("Filter subdomain that contains {}", row.token)
        );
    }
}

#[test]
fn test_rows_keep_vocabulary_order() {
    let rows = suggestion_rows(Vocabulary::Columns);
    let tokens: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
    assert_eq!(tokens, Vocabulary::Columns.entries());
}

#[test]
fn test_row_text_puts_token_first() {
    let row = Suggestion::for_entry("technology");
    let text = row.row_text();
    assert_eq!(text.split_whitespace().next(), Some("technology"));
    assert!(text.contains("Filter subdomain that contains technology"));
}

#[test]
fn test_badge_labels() {
    assert_eq!(Badge::Success.to_string(), "success");
    assert_eq!(Badge::Danger.to_string(), "danger");
    assert_eq!(Badge::Dark.to_string(), "dark");
    assert_eq!(Badge::Warning.to_string(), "warning");
    assert_eq!(Badge::Info.to_string(), "info");
}
