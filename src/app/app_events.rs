//! Event handling
//!
//! Key presses go to the autocomplete controller first (key-down), then to
//! the text input unless suppressed, then back to the controller with the
//! updated text (key-up).

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::{App, Focus};
use crate::autocomplete::TextHost;
use crate::widgets::popup;

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // The panel is positioned for the old layout
            Event::Resize(_, _) => self.autocomplete.dismiss(),
            Event::FocusLost => self.autocomplete.dismiss(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Editor => self.handle_editor_key(key, now),
            Focus::Selections => self.handle_selections_key(key),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, now: Instant) {
        let panel_was_visible = self.autocomplete.is_visible();
        let outcome = self.autocomplete.on_key_down(key, &mut self.input);

        if let Some(suggestion) = outcome.selected {
            self.record_selection(suggestion);
        }
        if outcome.suppress_default {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // First Esc closes the panel, a second one quits
                if !panel_was_visible {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = Focus::Selections;
                return;
            }
            // Single-line input
            KeyCode::Enter => return,
            _ => {}
        }

        self.input.input(key);

        let text = TextHost::text(&self.input);
        let caret = TextHost::caret(&self.input);
        self.autocomplete.on_key_up(key, &text, caret, now);
    }

    fn handle_selections_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Editor,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(panel) = self.panel else {
            return;
        };
        let row = popup::inner_row_at(panel.area, mouse.column, mouse.row)
            .map(|row| panel.first_row + row as usize);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match row {
                Some(index) => {
                    if let Some(suggestion) = self.autocomplete.commit_index(index, &mut self.input)
                    {
                        self.record_selection(suggestion);
                    }
                    self.focus = Focus::Editor;
                }
                // Borders count as inside; anything else is an outside click
                None if !panel.area.contains((mouse.column, mouse.row).into()) => {
                    self.autocomplete.dismiss();
                }
                None => {}
            },
            MouseEventKind::Moved => {
                if let Some(index) = row {
                    self.autocomplete.highlight(index);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
