mod autocomplete_render;
mod controller;
mod debouncer;
mod host;
mod query;
mod suggestion;

pub use autocomplete_render::{PanelLayout, render_panel};
pub use controller::{
    AutocompleteController, FetchRequest, FetchResponse, KeyDownOutcome, PanelCommand,
};
pub use debouncer::Debouncer;
pub use host::TextHost;
pub use query::{SuggestionQuery, extract_query, token_before_caret};
pub use suggestion::Suggestion;
