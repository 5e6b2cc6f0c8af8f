//! Mouse click handling
//!
//! Routes clicks to focus changes, suggestion selection, or dropdown
//! dismissal via the engine's outside-interaction rule.

use super::state::{App, Focus};
use crate::layout::Region;

/// Handle a left mouse button click at the given screen position
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    match app.layout.region_at(column, row) {
        Some(Region::InputField) => click_input_field(app),
        Some(Region::SuggestionRow(index)) => click_suggestion_row(app, index),
        Some(region @ Region::ResultsPane) => {
            if app.focus != Focus::ResultsPane {
                app.focus = Focus::ResultsPane;
            }
            app.outside_interaction(region.element_id());
        }
        None => app.outside_interaction(""),
    }
}

fn click_input_field(app: &mut App) {
    if app.focus != Focus::InputField {
        app.focus = Focus::InputField;
    }
    // A click on the input re-offers suggestions for the current text
    app.notify_input_changed();
}

fn click_suggestion_row(app: &mut App, index: usize) {
    if app.dropdown.is_visible() {
        app.apply_suggestion(index);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
