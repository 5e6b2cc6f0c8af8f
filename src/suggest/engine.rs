//! The suggestion engine and its view seam
//!
//! One engine instance per input field; the active vocabulary is its only
//! state. The host supplies a [`SuggestionView`] for everything that touches
//! the screen or the input widget.

use super::context::TailContext;
use super::rows::{Suggestion, suggestion_rows};
use super::vocabulary::Vocabulary;

/// Identity of the filter input field, as reported by the host layout
pub const INPUT_ELEMENT_ID: &str = "subdomains-search";

/// Identity of a rendered suggestion row
pub const ROW_ELEMENT_ID: &str = "filter_name";

/// Host-side surface the engine drives
pub trait SuggestionView {
    /// Current text of the filter input field
    fn input_text(&self) -> String;

    /// Replace the input field's text
    fn set_input_text(&mut self, text: &str);

    /// Replace the dropdown's rows
    fn render_rows(&mut self, rows: &[Suggestion]);

    /// Show or hide the dropdown
    fn set_dropdown_visible(&mut self, visible: bool);

    /// Notify the filtering consumer that the expression changed
    fn dispatch_change(&mut self);
}

/// Context-sensitive suggestion engine
#[derive(Debug, Default)]
pub struct SuggestionEngine {
    active: Vocabulary,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self {
            active: Vocabulary::Columns,
        }
    }

    /// The vocabulary currently offered
    pub fn active(&self) -> Vocabulary {
        self.active
    }

    /// Re-classify against `text` and record the result.
    ///
    /// An unrecognized tail keeps the previous vocabulary.
    pub fn classify_context(&mut self, text: &str) -> Vocabulary {
        let tail = TailContext::of(text);
        let next = self.active.advance(tail);
        if next != self.active {
            log::debug!("vocabulary {} -> {} ({:?})", self.active, next, tail);
        }
        self.active = next;
        next
    }

    /// React to the input text changing (typing, paste, programmatic write).
    ///
    /// Renders the active vocabulary into the dropdown and opens it.
    pub fn on_input_changed(&mut self, view: &mut dyn SuggestionView, text: &str) {
        if text.is_empty() {
            // Explicit reset; classification would land on Columns anyway
            self.active = Vocabulary::Columns;
        } else {
            self.classify_context(text);
        }

        let rows = suggestion_rows(self.active);
        view.render_rows(&rows);
        view.set_dropdown_visible(true);
    }

    /// Apply a clicked suggestion row.
    ///
    /// The token is the first whitespace-delimited segment of the row text.
    /// It is appended to the current expression, never replacing it, and the
    /// change notification fires exactly as it would for manual typing.
    pub fn on_suggestion_selected(&mut self, view: &mut dyn SuggestionView, row_text: &str) {
        let token = row_text.split_whitespace().next().unwrap_or("");
        let text = format!("{}{}", view.input_text(), token);
        view.set_input_text(&text);
        view.dispatch_change();
        self.on_input_changed(view, &text);
    }

    /// React to an interaction outside the suggestion surface.
    ///
    /// The input field and the suggestion rows keep the dropdown open; a row
    /// click must get a chance to run before any dismissal.
    pub fn on_outside_interaction(&mut self, view: &mut dyn SuggestionView, target_id: &str) {
        if target_id != INPUT_ELEMENT_ID && target_id != ROW_ELEMENT_ID {
            view.set_dropdown_visible(false);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
