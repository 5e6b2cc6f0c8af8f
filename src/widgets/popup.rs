use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Anchor a popup directly below `anchor`, clamped to the frame
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.bottom().min(frame_area.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.right().saturating_sub(popup_x)),
        height: height.min(frame_area.bottom().saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
