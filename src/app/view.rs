//! TUI implementation of the engine's view seam

use crate::input::InputState;
use crate::suggest::{DropdownState, Suggestion, SuggestionView};

/// Bridges the suggestion engine to the terminal widgets
pub struct TuiView<'a> {
    pub input: &'a mut InputState,
    pub dropdown: &'a mut DropdownState,
    pub dispatched_filter: &'a mut Option<String>,
}

impl SuggestionView for TuiView<'_> {
    fn input_text(&self) -> String {
        self.input.query().to_string()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input.set_query(text);
    }

    fn render_rows(&mut self, rows: &[Suggestion]) {
        self.dropdown.set_rows(rows.to_vec());
    }

    fn set_dropdown_visible(&mut self, visible: bool) {
        if visible {
            self.dropdown.show();
        } else {
            self.dropdown.hide();
        }
    }

    fn dispatch_change(&mut self) {
        let text = self.input.query().to_string();
        log::debug!("filter change dispatched: {text}");
        *self.dispatched_filter = Some(text);
    }
}
