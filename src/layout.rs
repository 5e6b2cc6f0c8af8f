//! Layout module for tracking UI component regions
//!
//! Records where components were rendered and maps a click position back to
//! the component it hit, plus the element identity the suggestion engine
//! compares against.

use ratatui::layout::Rect;

use crate::suggest::{INPUT_ELEMENT_ID, ROW_ELEMENT_ID};

/// UI component under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SuggestionRow(usize),
    ResultsPane,
}

impl Region {
    /// Element identity reported to the suggestion engine
    pub fn element_id(self) -> &'static str {
        match self {
            Region::InputField => INPUT_ELEMENT_ID,
            Region::SuggestionRow(_) => ROW_ELEMENT_ID,
            Region::ResultsPane => "subdomains-table",
        }
    }
}

/// Dropdown placement captured during rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownLayout {
    pub area: Rect,
    /// Index of the suggestion shown on the first inner line
    pub first_row: usize,
}

/// Regions recorded by the last render pass
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub input: Rect,
    pub results: Rect,
    pub dropdown: Option<DropdownLayout>,
}

impl LayoutRegions {
    /// Map a screen position to the component it hits.
    ///
    /// The dropdown overlays the results pane, so its rows are checked
    /// first. A hit on the dropdown border falls through to whatever sits
    /// underneath, matching a click on the box rather than on a row.
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        if let Some(dropdown) = self.dropdown
            && let Some(index) = dropdown.row_index_at(column, row)
        {
            return Some(Region::SuggestionRow(index));
        }

        if contains(self.input, column, row) {
            return Some(Region::InputField);
        }
        if contains(self.results, column, row) {
            return Some(Region::ResultsPane);
        }
        None
    }
}

impl DropdownLayout {
    /// Suggestion index on the inner line at the given position, if any
    fn row_index_at(self, column: u16, row: u16) -> Option<usize> {
        if !contains(self.area, column, row) {
            return None;
        }

        // One suggestion per line inside the border
        let inner_top = self.area.y.saturating_add(1);
        let inner_bottom = self.area.bottom().saturating_sub(1);
        let inner_left = self.area.x.saturating_add(1);
        let inner_right = self.area.right().saturating_sub(1);

        if row >= inner_top && row < inner_bottom && column >= inner_left && column < inner_right {
            Some(self.first_row + (row - inner_top) as usize)
        } else {
            None
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
