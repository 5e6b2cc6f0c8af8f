//! Suggestion rows
//!
//! Turns vocabulary entries into transient display rows. The badge and
//! description table is a fixed contract shared with the subdomain table's
//! filter syntax.

use std::fmt;

use super::vocabulary::Vocabulary;

/// Visual category of a suggestion's badge tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Success,
    Danger,
    Dark,
    Warning,
    Info,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Badge::Success => "success",
            Badge::Danger => "danger",
            Badge::Dark => "dark",
            Badge::Warning => "warning",
            Badge::Info => "info",
        };
        write!(f, "{label}")
    }
}

/// One dropdown row: a token plus its badge and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub token: String,
    pub badge: Badge,
    pub description: String,
}

impl Suggestion {
    /// Build the row for a single vocabulary entry
    pub fn for_entry(entry: &str) -> Self {
        let (badge, description) = match entry {
            "=" => (
                Badge::Success,
                "Filters Subdomain Equals Some Value".to_string(),
            ),
            "!" => (
                Badge::Danger,
                "Filters Subdomain Not Equals Some Value".to_string(),
            ),
            ">" => (
                Badge::Dark,
                "Filters Subdomain Greater than Some Value".to_string(),
            ),
            "<" => (
                Badge::Dark,
                "Filters Subdomain Less than Some Value".to_string(),
            ),
            "&" => (
                Badge::Danger,
                "Match Subdomain if all args are true".to_string(),
            ),
            "|" => (
                Badge::Warning,
                "Match Subdomain if either of one is true".to_string(),
            ),
            other => (Badge::Info, format!("Filter subdomain that contains {other}")),
        };

        Suggestion {
            token: entry.to_string(),
            badge,
            description,
        }
    }

    /// Textual form of the row: token first, badge and description after.
    ///
    /// Selection recovers the token as the first whitespace-delimited
    /// segment, so the token must stay in front.
    pub fn row_text(&self) -> String {
        format!("{} [{}] {}", self.token, self.badge, self.description)
    }
}

/// Build the full row list for `vocabulary`, in its fixed order.
///
/// Every entry becomes a row; there is no filtering or truncation here.
pub fn suggestion_rows(vocabulary: Vocabulary) -> Vec<Suggestion> {
    vocabulary
        .entries()
        .iter()
        .map(|entry| Suggestion::for_entry(entry))
        .collect()
}

#[cfg(test)]
#[path = "rows_tests.rs"]
mod rows_tests;
