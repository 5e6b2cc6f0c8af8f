//! Dropdown rendering
//!
//! Renders the suggestion rows as a labeled list popup directly below the
//! input field, one clickable row per suggestion.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::dropdown_state::DropdownState;
use super::rows::Badge;
use super::vocabulary::Vocabulary;
use crate::layout::DropdownLayout;
use crate::widgets::popup;

const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const DROPDOWN_PADDING: u16 = 2;
const MAX_DROPDOWN_WIDTH: usize = 72;
const ROW_PREFIX_WIDTH: usize = 2;

fn badge_color(badge: Badge) -> Color {
    match badge {
        Badge::Success => Color::Green,
        Badge::Danger => Color::Red,
        Badge::Dark => Color::DarkGray,
        Badge::Warning => Color::Yellow,
        Badge::Info => Color::Cyan,
    }
}

/// Render the dropdown below `input_area`.
///
/// Returns the placement so mouse hit-testing can map clicks back to rows.
pub fn render_dropdown(
    dropdown: &DropdownState,
    active: Vocabulary,
    max_visible_rows: usize,
    colored_badges: bool,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<DropdownLayout> {
    if !dropdown.is_visible() {
        return None;
    }

    let rows = dropdown.rows();
    let visible_count = rows.len().min(max_visible_rows.max(1));

    // Keep the keyboard selection inside the visible window
    let first_row = dropdown
        .selected_index()
        .saturating_sub(visible_count.saturating_sub(1))
        .min(rows.len().saturating_sub(visible_count));

    let height = visible_count as u16 + DROPDOWN_BORDER_HEIGHT;

    let max_token_width = rows.iter().map(|r| r.token.width()).max().unwrap_or(0);
    let max_row_width = rows
        .iter()
        .map(|r| {
            // "► token [badge] description"
            ROW_PREFIX_WIDTH
                + max_token_width
                + r.badge.to_string().width()
                + r.description.width()
                + 4
        })
        .max()
        .unwrap_or(20)
        .min(MAX_DROPDOWN_WIDTH);
    let width = max_row_width as u16 + DROPDOWN_PADDING;

    let area = popup::popup_below_anchor(frame.area(), input_area, width, height);
    if area.height <= DROPDOWN_BORDER_HEIGHT {
        return None;
    }
    popup::clear_area(frame, area);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(first_row)
        .take(visible_count)
        .map(|(i, suggestion)| {
            let padding = " ".repeat(max_token_width.saturating_sub(suggestion.token.width()));
            let badge_style = if colored_badges {
                Style::default().fg(badge_color(suggestion.badge))
            } else {
                Style::default().fg(Color::Gray)
            };

            let line = if i == dropdown.selected_index() {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{} ", suggestion.token, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("[{}]", suggestion.badge),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                    Span::styled(
                        format!(" {}", suggestion.description),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{} ", suggestion.token, padding),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(format!("[{}]", suggestion.badge), badge_style),
                    Span::styled(
                        format!(" {}", suggestion.description),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {active} "))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);

    Some(DropdownLayout { area, first_row })
}
