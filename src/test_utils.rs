#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::autocomplete::{AutocompleteController, Suggestion, TextHost};
    use crate::config::AutocompleteConfig;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn controller() -> AutocompleteController {
        AutocompleteController::new(&AutocompleteConfig::default())
    }

    pub fn hello_help() -> Vec<Suggestion> {
        vec![
            Suggestion::new("Hello", "hello"),
            Suggestion::new("Help", "help"),
        ]
    }

    pub fn words(words: &[&str]) -> Vec<Suggestion> {
        words.iter().map(|w| Suggestion::word(*w)).collect()
    }

    /// In-memory single-line host with a char-column caret
    #[derive(Debug, Clone, Default)]
    pub struct StringHost {
        pub text: String,
        pub caret: usize,
    }

    impl StringHost {
        /// Host with the caret at the end of `text`
        pub fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                caret: text.chars().count(),
            }
        }

        /// Type a character at the caret
        pub fn type_char(&mut self, ch: char) {
            let end = self.caret;
            self.replace_range(end, end, &ch.to_string());
            self.caret += 1;
        }
    }

    impl TextHost for StringHost {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
            let chars: Vec<char> = self.text.chars().collect();
            let mut text: String = chars[..start].iter().collect();
            text.push_str(replacement);
            text.extend(&chars[end..]);
            self.text = text;
        }

        fn set_caret(&mut self, column: usize) {
            self.caret = column;
        }
    }
}

#[cfg(test)]
pub mod app_helpers {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::config::AutocompleteConfig;
    use crate::source::{FetchWorker, WordListSource};

    use super::test_helpers::words;

    pub const TEST_WORDS: &[&str] = &["hello", "help", "world"];

    pub fn test_app() -> App {
        test_app_with(&AutocompleteConfig::default())
    }

    pub fn test_app_with(config: &AutocompleteConfig) -> App {
        let source = WordListSource::new(words(TEST_WORDS), config.max_results);
        let worker = FetchWorker::spawn(Arc::new(source)).unwrap();
        App::new(config, worker)
    }

    /// Tick until the suggestion panel opens or the timeout passes
    ///
    /// `fire_at` is the instant handed to the debounce timer; responses are
    /// polled in real time.
    pub fn wait_for_panel(app: &mut App, fire_at: Instant, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick(fire_at);
            if app.autocomplete.is_visible() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
