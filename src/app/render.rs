use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::layout::LayoutRegions;
use crate::suggest::dropdown_render;

impl App {
    /// Render the UI and record the hit-test regions for this frame
    pub fn render(&mut self, frame: &mut Frame) {
        // Input on top so the dropdown can open directly below it
        let layout = Layout::vertical([
            Constraint::Length(3), // Filter input is fixed 3 lines
            Constraint::Min(3),    // Results pane takes the rest
        ])
        .split(frame.area());

        let input_area = layout[0];
        let results_area = layout[1];

        self.render_input_field(frame, input_area);
        self.render_results_pane(frame, results_area);

        let dropdown = dropdown_render::render_dropdown(
            &self.dropdown,
            self.engine.active(),
            self.config.dropdown.max_visible_rows,
            self.config.dropdown.colored_badges,
            frame,
            input_area,
        );

        self.layout = LayoutRegions {
            input: input_area,
            results: results_area,
            dropdown,
        };
    }

    /// Render the filter input field (top)
    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter ")
                .border_style(Style::default().fg(border)),
        );

        frame.render_widget(&self.input.textarea, area);
    }

    /// Render the results pane (bottom)
    ///
    /// The actual row filtering lives in the table view listening for filter
    /// changes; this pane only mirrors what was dispatched.
    fn render_results_pane(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::ResultsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Subdomains ")
            .border_style(Style::default().fg(border));

        let status = match &self.dispatched_filter {
            Some(expr) => format!("filter dispatched: {expr}"),
            None => "no filter dispatched yet".to_string(),
        };

        let content = Paragraph::new(vec![
            Line::from(status),
            Line::from(""),
            Line::from("Pick suggestions above to build an expression like name=foo&http_status>200."),
        ])
        .block(block)
        .style(Style::default().fg(Color::Gray));

        frame.render_widget(content, area);
    }
}
