pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod source;
pub mod widgets;

#[cfg(test)]
mod test_utils;
