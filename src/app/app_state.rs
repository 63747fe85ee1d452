use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::autocomplete::{AutocompleteController, PanelLayout, Suggestion, TextHost};
use crate::config::AutocompleteConfig;
use crate::source::FetchWorker;

/// Upper bound on how long the event loop waits, so fetch responses are picked up
const RESPONSE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Selections,
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub autocomplete: AutocompleteController,
    pub focus: Focus,
    /// Committed suggestions, oldest first
    pub selections: Vec<Suggestion>,
    /// Where the suggestion panel was last drawn, for mouse hit testing
    pub panel: Option<PanelLayout>,
    pub(super) worker: FetchWorker,
    pub(super) should_quit: bool,
}

fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Text ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl App {
    pub fn new(config: &AutocompleteConfig, worker: FetchWorker) -> Self {
        Self {
            input: create_input_textarea(),
            autocomplete: AutocompleteController::new(config),
            focus: Focus::Editor,
            selections: Vec::new(),
            panel: None,
            worker,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn text(&self) -> String {
        TextHost::text(&self.input)
    }

    /// Replace the input contents, caret at the end
    pub fn set_text(&mut self, text: &str) {
        let len = TextHost::text(&self.input).chars().count();
        self.input.replace_range(0, len, text);
        self.input.set_caret(text.chars().count());
    }

    /// Fire the debounce timer if due and apply any finished fetches
    pub fn tick(&mut self, now: Instant) {
        if let Some(request) = self.autocomplete.poll_timer(now)
            && let Err(e) = self.worker.dispatch(request)
        {
            log::warn!("Could not dispatch fetch: {}", e);
        }

        while let Some(response) = self.worker.try_recv() {
            self.autocomplete.on_fetch_result(response);
        }
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.autocomplete
            .time_until_timer(now)
            .map_or(RESPONSE_POLL_INTERVAL, |left| left.min(RESPONSE_POLL_INTERVAL))
    }

    pub(super) fn record_selection(&mut self, suggestion: Suggestion) {
        log::debug!("Item selected: {:?}", suggestion.label);
        self.selections.push(suggestion);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
