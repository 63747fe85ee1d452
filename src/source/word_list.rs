use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::{SourceError, SuggestionSource};
use crate::autocomplete::Suggestion;

/// In-memory source over a fixed list of suggestions
///
/// Case-insensitive prefix matches come first, in list order, followed by
/// fuzzy matches ordered by score.
pub struct WordListSource {
    entries: Vec<Suggestion>,
    matcher: SkimMatcherV2,
    max_results: usize,
}

impl fmt::Debug for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordListSource")
            .field("entries", &self.entries.len())
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl WordListSource {
    pub fn new(entries: Vec<Suggestion>, max_results: usize) -> Self {
        Self {
            entries,
            matcher: SkimMatcherV2::default().ignore_case(),
            max_results,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, query: &str) -> Vec<Suggestion> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut prefix = Vec::new();
        let mut fuzzy: Vec<(usize, i64)> = Vec::new();

        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.label.to_lowercase().starts_with(&needle) {
                prefix.push(idx);
            } else if let Some(score) = self.matcher.fuzzy_match(&entry.label, query) {
                fuzzy.push((idx, score));
            }
        }

        // Stable sort keeps list order among equal scores
        fuzzy.sort_by(|a, b| b.1.cmp(&a.1));

        prefix
            .into_iter()
            .chain(fuzzy.into_iter().map(|(idx, _)| idx))
            .take(self.max_results)
            .map(|idx| self.entries[idx].clone())
            .collect()
    }
}

impl SuggestionSource for WordListSource {
    fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SourceError> {
        Ok(self.matches(query))
    }
}

#[cfg(test)]
#[path = "word_list_tests.rs"]
mod word_list_tests;
