use std::fmt;

/// Column names of the subdomain results table, in display order
pub const COLUMNS: &[&str] = &[
    "name",
    "page_title",
    "is_important",
    "http_url",
    "checked",
    "cname",
    "http_status",
    "content_type",
    "response_time",
    "webserver",
    "content_length",
    "technology",
    "ip_address",
    "port",
];

/// Comparison operators offered after a complete column name
pub const OPERATORS: &[&str] = &["=", "!", ">", "<"];

/// Boolean joiners offered after a comparison operator
pub const JOINERS: &[&str] = &["&", "|"];

/// One of the three fixed suggestion sets
///
/// The active vocabulary is always exactly one of these; there is no empty
/// or partial set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vocabulary {
    #[default]
    Columns,
    Operators,
    Joiners,
}

impl Vocabulary {
    /// Entries in their fixed display order
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Vocabulary::Columns => COLUMNS,
            Vocabulary::Operators => OPERATORS,
            Vocabulary::Joiners => JOINERS,
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Vocabulary::Columns => "columns",
            Vocabulary::Operators => "operators",
            Vocabulary::Joiners => "joiners",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod vocabulary_tests;
