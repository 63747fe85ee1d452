use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthStr;

use super::app_state::{App, Focus};
use crate::autocomplete::{TextHost, render_panel};

const STATUS_HINTS: &str = " Up/Down: choose  Tab: accept  Esc: close  Ctrl+C: quit ";

/// Screen cell of the caret inside the bordered input
pub(super) fn caret_position(area: Rect, input: &TextArea<'_>) -> Position {
    let text = TextHost::text(input);
    let before: String = text.chars().take(TextHost::caret(input)).collect();
    let inner_width = area.width.saturating_sub(2);
    let column = (before.width().min(u16::MAX as usize) as u16).min(inner_width.saturating_sub(1));

    Position::new(area.x + 1 + column, area.y + 1)
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Text input
            Constraint::Min(3),    // Selected items
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());
        let bounds = frame.area();

        self.render_input(frame, layout[0]);
        self.render_selections(frame, layout[1]);
        self.render_status(frame, layout[2]);

        let caret = caret_position(layout[0], &self.input);
        self.panel = render_panel(&self.autocomplete, frame, caret, bounds);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Editor {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input, area);
    }

    fn render_selections(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Selections {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        // Newest last; keep the tail in view
        let rows = area.height.saturating_sub(2) as usize;
        let skip = self.selections.len().saturating_sub(rows);
        let items: Vec<ListItem> = self
            .selections
            .iter()
            .skip(skip)
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(s.label.clone(), Style::default().fg(Color::White)),
                    Span::styled(" → ", Style::default().fg(Color::DarkGray)),
                    Span::styled(s.value.clone(), Style::default().fg(Color::Green)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Selected ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(list, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(STATUS_HINTS)
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
