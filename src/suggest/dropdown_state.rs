use super::rows::Suggestion;

/// Dropdown visibility and keyboard selection state
#[derive(Debug, Default)]
pub struct DropdownState {
    visible: bool,
    rows: Vec<Suggestion>,
    selected: usize,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.rows.is_empty()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Replace the rows and reset the keyboard selection
    pub fn set_rows(&mut self, rows: Vec<Suggestion>) {
        self.rows = rows;
        self.selected = 0;
    }

    pub fn rows(&self) -> &[Suggestion] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Suggestion> {
        self.rows.get(index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Suggestion> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
        }
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
