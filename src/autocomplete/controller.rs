//! Autocomplete controller
//!
//! Owns the suggestion cycle for one text input: query extraction on key-up,
//! the debounce timer, the suggestion list with its highlight, keyboard
//! navigation on key-down, and committing a suggestion back into the input.
//!
//! Rendering reads the state exposed here and never feeds back into it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

use super::debouncer::Debouncer;
use super::host::TextHost;
use super::query::{SuggestionQuery, extract_query, token_before_caret};
use super::suggestion::Suggestion;
use crate::config::{AutocompleteConfig, StalePolicy};
use crate::source::SourceError;

/// Fetch dispatched when the debounce timer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    /// Query generation the fetch was scheduled under
    pub generation: u64,
}

/// Result of a fetch, tagged with the generation of its request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: u64,
    pub result: Result<Vec<Suggestion>, SourceError>,
}

/// Panel change requested by a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Open the panel at the caret
    Show,
    /// Panel was already open; re-layout it for the new list
    Reposition,
    Hide,
}

/// What the host should do after `on_key_down`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDownOutcome {
    /// The key must not reach the text input
    pub suppress_default: bool,
    /// The `itemSelected` notification, set when the key committed a suggestion
    pub selected: Option<Suggestion>,
}

impl KeyDownOutcome {
    fn suppressed() -> Self {
        Self {
            suppress_default: true,
            selected: None,
        }
    }
}

/// Keys the controller reacts to on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavKey {
    Previous,
    Next,
    Accept,
    AcceptAndTraverse,
    Dismiss,
}

fn nav_key(key: &KeyEvent) -> Option<NavKey> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return Some(NavKey::Dismiss);
    }

    match key.code {
        KeyCode::Up | KeyCode::Left => Some(NavKey::Previous),
        KeyCode::Down | KeyCode::Right => Some(NavKey::Next),
        KeyCode::Enter => Some(NavKey::Accept),
        KeyCode::Tab => Some(NavKey::AcceptAndTraverse),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char(' ') => Some(NavKey::Dismiss),
        KeyCode::Modifier(
            ModifierKeyCode::LeftControl
            | ModifierKeyCode::RightControl
            | ModifierKeyCode::LeftAlt
            | ModifierKeyCode::RightAlt,
        ) => Some(NavKey::Dismiss),
        _ => None,
    }
}

/// Navigation and control keys never start a new query
fn is_control_key(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        || matches!(
            key.code,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Enter
                | KeyCode::Tab
                | KeyCode::BackTab
                | KeyCode::Esc
                | KeyCode::Char(' ')
                | KeyCode::Modifier(_)
        )
}

pub struct AutocompleteController {
    min_query_length: usize,
    max_panel_height: Option<usize>,
    stale_policy: StalePolicy,
    debouncer: Debouncer,
    /// Query from the keystroke that last scheduled the timer
    pending_query: Option<SuggestionQuery>,
    /// Bumped whenever the query is replaced or abandoned
    generation: u64,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
    visible: bool,
    scroll_offset: usize,
}

impl AutocompleteController {
    pub fn new(config: &AutocompleteConfig) -> Self {
        Self {
            min_query_length: config.min_query_length,
            max_panel_height: config
                .max_panel_height
                .filter(|&rows| rows > 0)
                .map(usize::from),
            stale_policy: config.stale_responses,
            debouncer: Debouncer::new(config.query_delay_ms),
            pending_query: None,
            generation: 0,
            suggestions: Vec::new(),
            highlighted: None,
            visible: false,
            scroll_offset: 0,
        }
    }

    /// Handle a key release with the text and caret as they are after the key
    ///
    /// Restarts the debounce timer for a long enough query, otherwise cancels it.
    /// Either way the previous query is superseded, so fetches already in flight
    /// for it become stale.
    pub fn on_key_up(&mut self, key: KeyEvent, text: &str, caret: usize, now: Instant) {
        if is_control_key(&key) {
            return;
        }

        match extract_query(text, caret, self.min_query_length) {
            Some(query) => {
                self.generation = self.generation.wrapping_add(1);
                self.debouncer.schedule(now);
                self.pending_query = Some(query);
            }
            None => self.cancel_pending(),
        }
    }

    /// Fire the debounce timer if it is due
    ///
    /// Returns the fetch to dispatch, tagged with the current query generation.
    pub fn poll_timer(&mut self, now: Instant) -> Option<FetchRequest> {
        if !self.debouncer.fire(now) {
            return None;
        }

        let query = self.pending_query.take()?;
        log::debug!(
            "Dispatching fetch {} for query {:?}",
            self.generation,
            query.text
        );

        Some(FetchRequest {
            query: query.text,
            generation: self.generation,
        })
    }

    /// Apply a fetch response
    ///
    /// Errors count as an empty list. Returns `None` when the response was
    /// discarded as stale.
    pub fn on_fetch_result(&mut self, response: FetchResponse) -> Option<PanelCommand> {
        if response.generation != self.generation && self.stale_policy == StalePolicy::Discard {
            log::debug!(
                "Discarding stale response {} (current {})",
                response.generation,
                self.generation
            );
            return None;
        }

        let suggestions = match response.result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::debug!("Fetch {} failed: {}", response.generation, e);
                Vec::new()
            }
        };

        Some(self.replace_suggestions(suggestions))
    }

    /// Replace the suggestion list wholesale
    pub fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) -> PanelCommand {
        self.suggestions = suggestions;
        self.scroll_offset = 0;

        if self.suggestions.is_empty() {
            self.highlighted = None;
            self.visible = false;
            return PanelCommand::Hide;
        }

        self.highlighted = Some(0);
        if self.visible {
            PanelCommand::Reposition
        } else {
            self.visible = true;
            PanelCommand::Show
        }
    }

    /// Handle a key press before it reaches the text input
    pub fn on_key_down<H: TextHost + ?Sized>(
        &mut self,
        key: KeyEvent,
        host: &mut H,
    ) -> KeyDownOutcome {
        let Some(nav) = nav_key(&key) else {
            return KeyDownOutcome::default();
        };

        self.cancel_pending();

        if !self.visible {
            return KeyDownOutcome::default();
        }

        match nav {
            NavKey::Previous => {
                self.select_previous();
                KeyDownOutcome::suppressed()
            }
            NavKey::Next => {
                self.select_next();
                KeyDownOutcome::suppressed()
            }
            NavKey::Accept => KeyDownOutcome {
                suppress_default: true,
                selected: self.commit(host),
            },
            NavKey::AcceptAndTraverse => KeyDownOutcome {
                suppress_default: false,
                selected: self.commit(host),
            },
            NavKey::Dismiss => {
                self.dismiss();
                KeyDownOutcome::default()
            }
        }
    }

    /// Commit the highlighted suggestion into the host
    ///
    /// Replaces the token before the caret with the suggestion's value, puts
    /// the caret after it, and hides the panel. Returns the committed
    /// suggestion, or `None` when nothing is highlighted.
    pub fn commit<H: TextHost + ?Sized>(&mut self, host: &mut H) -> Option<Suggestion> {
        let suggestion = self
            .highlighted
            .and_then(|index| self.suggestions.get(index))
            .cloned()?;

        let text = host.text();
        let caret = host.caret();
        let (start, end) = token_before_caret(&text, caret)
            .map_or((caret, caret), |token| (token.start, token.end()));

        host.replace_range(start, end, &suggestion.value);
        host.set_caret(start + suggestion.value.chars().count());
        self.visible = false;

        log::debug!("Committed suggestion {:?}", suggestion.value);
        Some(suggestion)
    }

    /// Highlight `index` and commit it (mouse click on a panel row)
    pub fn commit_index<H: TextHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> Option<Suggestion> {
        if !self.visible || index >= self.suggestions.len() {
            return None;
        }
        self.highlighted = Some(index);
        self.commit(host)
    }

    /// Highlight `index` (mouse hover over a panel row)
    pub fn highlight(&mut self, index: usize) {
        if self.visible && index < self.suggestions.len() {
            self.highlighted = Some(index);
            self.keep_highlight_in_view();
        }
    }

    /// Hide the panel, keeping the list and highlight in memory
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Cancel the pending debounce timer and abandon the current query
    ///
    /// Responses still in flight for the abandoned query are stale afterwards.
    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
        self.pending_query = None;
        self.generation = self.generation.wrapping_add(1);
    }

    fn select_previous(&mut self) {
        if let Some(index) = self.highlighted {
            self.highlighted = Some(index.saturating_sub(1));
            self.keep_highlight_in_view();
        }
    }

    fn select_next(&mut self) {
        if let Some(index) = self.highlighted
            && index + 1 < self.suggestions.len()
        {
            self.highlighted = Some(index + 1);
            self.keep_highlight_in_view();
        }
    }

    fn keep_highlight_in_view(&mut self) {
        let Some(index) = self.highlighted else {
            return;
        };
        let rows = self.visible_rows();
        if rows == 0 {
            return;
        }

        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + rows {
            self.scroll_offset = index + 1 - rows;
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        self.highlighted.and_then(|index| self.suggestions.get(index))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// First list index shown in the panel
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows the panel shows, clipped to the configured max height
    pub fn visible_rows(&self) -> usize {
        let len = self.suggestions.len();
        self.max_panel_height.map_or(len, |max| len.min(max))
    }

    pub fn is_timer_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_until_timer(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
