use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::suggest::{DropdownState, SuggestionEngine};

use super::view::TuiView;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    InputField,
    ResultsPane,
}

/// Application state
pub struct App {
    pub config: Config,
    pub engine: SuggestionEngine,
    pub input: InputState,
    pub dropdown: DropdownState,
    pub layout: LayoutRegions,
    pub focus: Focus,
    /// Last expression handed to the filtering consumer
    pub dispatched_filter: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            config,
            engine: SuggestionEngine::new(),
            input: InputState::new(),
            dropdown: DropdownState::new(),
            layout: LayoutRegions::default(),
            focus: Focus::InputField,
            dispatched_filter: None,
            should_quit: false,
        };

        // Empty input offers the column vocabulary right away
        app.notify_input_changed();
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Run the engine against the current input text
    pub fn notify_input_changed(&mut self) {
        let text = self.input.query().to_string();
        let (engine, mut view) = self.engine_and_view();
        engine.on_input_changed(&mut view, &text);
    }

    /// Apply the suggestion row at `index`, if it exists
    pub fn apply_suggestion(&mut self, index: usize) {
        let Some(row_text) = self.dropdown.row(index).map(|row| row.row_text()) else {
            return;
        };
        let (engine, mut view) = self.engine_and_view();
        engine.on_suggestion_selected(&mut view, &row_text);
    }

    /// Forward an interaction that landed outside the suggestion surface
    pub fn outside_interaction(&mut self, target_id: &str) {
        let (engine, mut view) = self.engine_and_view();
        engine.on_outside_interaction(&mut view, target_id);
    }

    /// Split the engine from the view-facing state so the engine can drive
    /// the view without aliasing itself
    fn engine_and_view(&mut self) -> (&mut SuggestionEngine, TuiView<'_>) {
        (
            &mut self.engine,
            TuiView {
                input: &mut self.input,
                dropdown: &mut self.dropdown,
                dispatched_filter: &mut self.dispatched_filter,
            },
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
