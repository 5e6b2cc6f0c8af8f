use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::state::{App, Focus};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => self.handle_results_pane_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            // Esc closes the dropdown first, then quits
            KeyCode::Esc => {
                if self.dropdown.is_visible() {
                    self.dropdown.hide();
                } else {
                    self.quit();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down if self.dropdown.is_visible() => self.dropdown.select_next(),
            KeyCode::Up if self.dropdown.is_visible() => self.dropdown.select_prev(),
            // Enter never reaches the textarea; the input is single-line
            KeyCode::Enter | KeyCode::Tab => {
                if self.dropdown.is_visible() {
                    self.apply_suggestion(self.dropdown.selected_index());
                }
            }
            _ => {
                if self.input.textarea.input(tui_textarea::Input::from(key)) {
                    self.notify_input_changed();
                }
            }
        }
    }

    fn handle_results_pane_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.focus = Focus::InputField,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            super::mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
