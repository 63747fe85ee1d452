use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::Clear,
};

/// Place a popup on the row below `point`, or above it when there is more room there
///
/// The result is clipped to `bounds`; x is shifted left if the popup would overflow.
pub fn popup_at_point(point: Position, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let below = bounds.bottom().saturating_sub(point.y.saturating_add(1));
    let above = point.y.saturating_sub(bounds.y);

    let (popup_y, popup_height) = if height <= below || below >= above {
        (point.y.saturating_add(1), height.min(below))
    } else {
        let popup_height = height.min(above);
        (point.y - popup_height, popup_height)
    };

    let max_x = bounds.right().saturating_sub(width);
    let popup_x = point.x.max(bounds.x).min(max_x);

    Rect {
        x: popup_x,
        y: popup_y,
        width,
        height: popup_height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

/// Row index inside a bordered popup under the given screen cell
pub fn inner_row_at(area: Rect, column: u16, row: u16) -> Option<u16> {
    let inner = inset_rect(area, 1, 1);
    if inner.contains(Position::new(column, row)) {
        Some(row - inner.y)
    } else {
        None
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
