use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::autocomplete::Suggestion;
use crate::error::AutotextError;

/// Used when no word list is configured
const BUILTIN_WORDS: &[&str] = &[
    "about", "above", "across", "action", "address", "after", "again", "against", "almost",
    "already", "although", "always", "another", "answer", "anything", "around", "because",
    "before", "behind", "believe", "between", "building", "business", "certain", "change",
    "children", "company", "complete", "consider", "continue", "country", "different",
    "during", "early", "enough", "evening", "everything", "example", "family", "father",
    "follow", "friend", "government", "ground", "happen", "hello", "helmet", "help",
    "helpful", "history", "however", "important", "interest", "language", "letter", "little",
    "morning", "mother", "mountain", "nothing", "number", "often", "people", "perhaps",
    "picture", "place", "problem", "question", "really", "remember", "second", "sentence",
    "should", "something", "sometimes", "started", "still", "story", "student", "system",
    "thought", "through", "together", "toward", "under", "until", "usually", "water",
    "where", "whether", "without", "world", "would", "write", "yesterday",
];

/// How a word list file is laid out, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    /// `[[suggestions]]` tables with `label` and `value`
    Toml,
    /// Array of `{"label": ..., "value": ...}` objects
    Json,
    /// One word per line; blank lines and `#` comments are skipped
    Lines,
}

impl WordListFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => WordListFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => WordListFormat::Json,
            _ => WordListFormat::Lines,
        }
    }
}

#[derive(Deserialize)]
struct SuggestionsFile {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

pub fn builtin_suggestions() -> Vec<Suggestion> {
    BUILTIN_WORDS.iter().map(|w| Suggestion::word(*w)).collect()
}

pub fn load_suggestions(path: &Path) -> Result<Vec<Suggestion>, AutotextError> {
    let contents = fs::read_to_string(path)?;
    let suggestions = parse_suggestions(&contents, WordListFormat::from_path(path)).map_err(
        |reason| AutotextError::WordList {
            path: path.display().to_string(),
            reason,
        },
    )?;

    log::debug!(
        "Loaded {} suggestions from {}",
        suggestions.len(),
        path.display()
    );
    Ok(suggestions)
}

pub fn parse_suggestions(
    content: &str,
    format: WordListFormat,
) -> Result<Vec<Suggestion>, String> {
    match format {
        WordListFormat::Toml => toml::from_str::<SuggestionsFile>(content)
            .map(|file| file.suggestions)
            .map_err(|e| e.to_string()),
        WordListFormat::Json => {
            serde_json::from_str::<Vec<Suggestion>>(content).map_err(|e| e.to_string())
        }
        WordListFormat::Lines => {
            let mut seen = HashSet::new();
            Ok(content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .filter(|line| seen.insert(*line))
                .map(Suggestion::word)
                .collect())
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
