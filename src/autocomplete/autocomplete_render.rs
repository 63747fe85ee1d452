//! Suggestion panel rendering
//!
//! Draws the panel at the caret from the controller's state. Nothing here
//! mutates the controller.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::controller::AutocompleteController;
use super::suggestion::Suggestion;
use crate::widgets::popup;

const MAX_PANEL_WIDTH: usize = 60;
const PANEL_BORDER_HEIGHT: u16 = 2;
// Border plus the two-column highlight marker
const PANEL_PADDING: u16 = 4;
const VALUE_SPACING: usize = 2;

fn entry_width(suggestion: &Suggestion) -> usize {
    let label = suggestion.label.width();
    if suggestion.value == suggestion.label {
        label
    } else {
        label + VALUE_SPACING + suggestion.value.width()
    }
}

/// Where the panel was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub area: Rect,
    /// List index shown on the first panel row
    pub first_row: usize,
}

/// First row to draw so the highlight fits in `rows` even when the terminal is
/// shorter than the configured panel height
fn first_row(offset: usize, highlighted: Option<usize>, rows: usize) -> usize {
    match highlighted {
        Some(index) if rows > 0 && index >= offset + rows => index + 1 - rows,
        Some(index) if index < offset => index,
        _ => offset,
    }
}

/// Render the suggestion panel anchored at the caret's screen position
///
/// Returns where the panel went, or `None` when the panel is hidden.
pub fn render_panel(
    controller: &AutocompleteController,
    frame: &mut Frame,
    caret: Position,
    bounds: Rect,
) -> Option<PanelLayout> {
    let suggestions = controller.suggestions();
    if !controller.is_visible() || suggestions.is_empty() {
        return None;
    }

    let rows = controller.visible_rows();
    let panel_height = (rows.min(u16::MAX as usize) as u16).saturating_add(PANEL_BORDER_HEIGHT);

    let label_width = suggestions
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);
    let content_width = suggestions
        .iter()
        .map(entry_width)
        .max()
        .unwrap_or(0)
        .min(MAX_PANEL_WIDTH);
    let panel_width = (content_width as u16) + PANEL_PADDING;

    let area = popup::popup_at_point(caret, panel_width, panel_height, bounds);
    let fit = area.height.saturating_sub(PANEL_BORDER_HEIGHT) as usize;
    let highlighted = controller.highlighted();
    let offset = first_row(controller.scroll_offset(), highlighted, fit);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(fit)
        .map(|(i, suggestion)| {
            let padding = " ".repeat(label_width.saturating_sub(suggestion.label.width()));
            let mut spans = if Some(i) == highlighted {
                vec![Span::styled(
                    format!("► {}{}", suggestion.label, padding),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]
            } else {
                vec![Span::styled(
                    format!("  {}{}", suggestion.label, padding),
                    Style::default().fg(Color::White).bg(Color::Black),
                )]
            };

            if suggestion.value != suggestion.label {
                spans.push(Span::styled(
                    format!("  {}", suggestion.value),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    if let Some(index) = highlighted
        && suggestions.len() > fit
    {
        block = block.title_bottom(format!(" {}/{} ", index + 1, suggestions.len()));
    }

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);
    frame.render_widget(List::new(items).block(block), area);

    Some(PanelLayout {
        area,
        first_row: offset,
    })
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
