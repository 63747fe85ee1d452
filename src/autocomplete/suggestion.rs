use serde::{Deserialize, Serialize};

/// A single suggestion returned by a source
///
/// `label` is what the panel shows, `value` is what commit inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Suggestion whose label and value are the same word
    pub fn word(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            label: word.clone(),
            value: word,
        }
    }
}
