//! Tests for region tracking and hit testing

use super::*;

fn regions_with_dropdown() -> LayoutRegions {
    LayoutRegions {
        input: Rect::new(0, 0, 40, 3),
        results: Rect::new(0, 3, 40, 20),
        dropdown: Some(DropdownLayout {
            area: Rect::new(0, 3, 30, 6),
            first_row: 0,
        }),
    }
}

#[test]
fn test_input_field_hit() {
    let regions = regions_with_dropdown();
    assert_eq!(regions.region_at(5, 1), Some(Region::InputField));
}

#[test]
fn test_results_pane_hit() {
    let regions = regions_with_dropdown();
    assert_eq!(regions.region_at(5, 15), Some(Region::ResultsPane));
}

#[test]
fn test_suggestion_row_hit() {
    let regions = regions_with_dropdown();
    // First inner line is one row below the dropdown border
    assert_eq!(regions.region_at(5, 4), Some(Region::SuggestionRow(0)));
    assert_eq!(regions.region_at(5, 6), Some(Region::SuggestionRow(2)));
}

#[test]
fn test_suggestion_row_respects_scroll_offset() {
    let mut regions = regions_with_dropdown();
    regions.dropdown = Some(DropdownLayout {
        area: Rect::new(0, 3, 30, 6),
        first_row: 4,
    });
    assert_eq!(regions.region_at(5, 4), Some(Region::SuggestionRow(4)));
}

#[test]
fn test_dropdown_border_falls_through() {
    let regions = regions_with_dropdown();
    // Top border row of the dropdown sits over the results pane
    assert_eq!(regions.region_at(5, 3), Some(Region::ResultsPane));
    // Left border column as well
    assert_eq!(regions.region_at(0, 4), Some(Region::ResultsPane));
}

#[test]
fn test_dropdown_ignored_when_absent() {
    let mut regions = regions_with_dropdown();
    regions.dropdown = None;
    assert_eq!(regions.region_at(5, 4), Some(Region::ResultsPane));
}

#[test]
fn test_miss_returns_none() {
    let regions = regions_with_dropdown();
    assert_eq!(regions.region_at(50, 1), None);
    assert_eq!(regions.region_at(5, 30), None);
}

#[test]
fn test_element_ids() {
    assert_eq!(Region::InputField.element_id(), "subdomains-search");
    assert_eq!(Region::SuggestionRow(3).element_id(), "filter_name");
    assert_eq!(Region::ResultsPane.element_id(), "subdomains-table");
}
