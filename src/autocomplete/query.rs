//! Query extraction
//!
//! The query is the run of non-whitespace characters that ends at the caret.
//! Offsets are char columns, the same unit the text input reports its cursor in.

/// The token immediately preceding the caret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    pub text: String,
    /// Char column where the token starts
    pub start: usize,
}

impl SuggestionQuery {
    /// Char column just past the token (the caret it was extracted at)
    pub fn end(&self) -> usize {
        self.start + self.text.chars().count()
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Find the non-whitespace token ending at `caret`, regardless of length
///
/// A caret past the end of the text is treated as the end of the text.
pub fn token_before_caret(text: &str, caret: usize) -> Option<SuggestionQuery> {
    let before: Vec<char> = text.chars().take(caret).collect();
    let start = before
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |i| i + 1);

    if start == before.len() {
        return None;
    }

    Some(SuggestionQuery {
        text: before[start..].iter().collect(),
        start,
    })
}

/// Extract the suggestion query at `caret`
///
/// Returns `None` when there is no token or it is shorter than `min_len` chars.
pub fn extract_query(text: &str, caret: usize, min_len: usize) -> Option<SuggestionQuery> {
    token_before_caret(text, caret).filter(|query| query.len() >= min_len)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
