//! Tail classification for the filter expression
//!
//! One look at the end of the input decides which vocabulary applies next.
//! Modeled as a small state machine: [`TailContext`] is the input alphabet,
//! [`Vocabulary::advance`] the transition function.

use super::vocabulary::{COLUMNS, Vocabulary};

/// Characters that delimit tokens in a filter expression.
///
/// The separator set is contractual; the table view's expression syntax
/// depends on it.
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(ch, '=' | '>' | '<' | '!' | '&' | '|')
}

/// Classification of the end of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailContext {
    /// Nothing typed yet
    Empty,
    /// The trailing token is a complete column name
    ColumnName,
    /// The text ends in a comparison character (`=`, `!`, `>`, `<`)
    ComparisonChar,
    /// The text ends in a joiner character (`&`, `|`)
    JoinerChar,
    /// Anything else, typically a partial token
    Other,
}

impl TailContext {
    /// Classify the tail of `text`.
    ///
    /// Precedence matters: a complete column name wins over the trailing
    /// character rules.
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return TailContext::Empty;
        }

        // rsplit yields the segment after the last separator first; text
        // ending in a separator yields an empty tail token.
        let tail_token = text.rsplit(is_separator).next().unwrap_or("");
        if COLUMNS.contains(&tail_token) {
            return TailContext::ColumnName;
        }

        match text.chars().next_back() {
            Some('=' | '!' | '>' | '<') => TailContext::ComparisonChar,
            Some('&' | '|') => TailContext::JoinerChar,
            _ => TailContext::Other,
        }
    }
}

impl Vocabulary {
    /// Transition to the vocabulary that applies after `tail`.
    ///
    /// `Other` keeps the current vocabulary: mid-token typing does not move
    /// the machine.
    pub fn advance(self, tail: TailContext) -> Self {
        match tail {
            TailContext::Empty => Vocabulary::Columns,
            TailContext::ColumnName => Vocabulary::Operators,
            TailContext::ComparisonChar => Vocabulary::Joiners,
            TailContext::JoinerChar => Vocabulary::Columns,
            TailContext::Other => self,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
