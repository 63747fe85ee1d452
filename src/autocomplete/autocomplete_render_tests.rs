//! Tests for suggestion panel rendering

use super::*;
use crate::config::AutocompleteConfig;
use crate::test_utils::test_helpers::{StringHost, controller, hello_help, key, words};
use crossterm::event::KeyCode;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const TEST_WIDTH: u16 = 40;
const TEST_HEIGHT: u16 = 12;

fn render(controller: &AutocompleteController, caret: Position) -> (String, Option<PanelLayout>) {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            area = render_panel(controller, f, caret, f.area());
        })
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_hidden_panel_renders_nothing() {
    let controller = controller();

    let (output, area) = render(&controller, Position::new(2, 1));

    assert!(area.is_none());
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_visible_panel_lists_labels_below_caret() {
    let mut controller = controller();
    controller.replace_suggestions(hello_help());

    let (output, layout) = render(&controller, Position::new(2, 1));
    let area = layout.unwrap().area;

    assert_eq!(area.x, 2);
    assert_eq!(area.y, 2);
    assert_eq!(area.height, 4);
    assert!(output.contains("Suggestions"));
    assert!(output.contains("► Hello"));
    assert!(output.contains("  Help"));
    // Values differ from labels, so they are shown too
    assert!(output.contains("hello"));
}

#[test]
fn test_dismissed_panel_renders_nothing() {
    let mut controller = controller();
    controller.replace_suggestions(hello_help());
    controller.dismiss();

    let (_, area) = render(&controller, Position::new(2, 1));
    assert!(area.is_none());
}

#[test]
fn test_bounded_panel_scrolls_with_highlight() {
    let config = AutocompleteConfig {
        max_panel_height: Some(2),
        ..AutocompleteConfig::default()
    };
    let mut controller = AutocompleteController::new(&config);
    let mut host = StringHost::new("x");
    controller.replace_suggestions(words(&["alpha", "bravo", "charlie", "delta"]));
    for _ in 0..3 {
        controller.on_key_down(key(KeyCode::Down), &mut host);
    }

    let (output, layout) = render(&controller, Position::new(0, 0));
    let layout = layout.unwrap();

    assert_eq!(layout.area.height, 4);
    assert_eq!(layout.first_row, 2);
    assert!(!output.contains("alpha"));
    assert!(!output.contains("bravo"));
    assert!(output.contains("charlie"));
    assert!(output.contains("► delta"));
    assert!(output.contains("4/4"));
}

#[test]
fn test_short_terminal_still_shows_highlight() {
    let mut controller = controller();
    let mut host = StringHost::new("x");
    let list: Vec<String> = (0..20).map(|i| format!("word{:02}", i)).collect();
    let list: Vec<&str> = list.iter().map(String::as_str).collect();
    controller.replace_suggestions(words(&list));
    for _ in 0..15 {
        controller.on_key_down(key(KeyCode::Down), &mut host);
    }

    let (output, layout) = render(&controller, Position::new(0, 0));

    assert!(output.contains("► word15"));
    assert_eq!(layout.unwrap().first_row, 7);
}

#[test]
fn test_first_row_adjusts_to_fit() {
    assert_eq!(first_row(0, Some(0), 3), 0);
    assert_eq!(first_row(0, Some(5), 3), 3);
    assert_eq!(first_row(4, Some(2), 3), 2);
    assert_eq!(first_row(2, None, 3), 2);
}
