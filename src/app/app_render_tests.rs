//! Tests for App rendering

use super::*;
use crate::autocomplete::Suggestion;
use crate::test_utils::app_helpers::test_app;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_render_shows_panes() {
    let mut app = test_app();
    app.set_text("hello world");

    let output = render_app(&mut app, 60, 12);

    assert!(output.contains("Text"));
    assert!(output.contains("hello world"));
    assert!(output.contains("Selected"));
    assert!(output.contains("Ctrl+C: quit"));
    assert!(app.panel.is_none());
}

#[test]
fn test_render_lists_selections() {
    let mut app = test_app();
    app.selections.push(Suggestion::new("Help", "help"));

    let output = render_app(&mut app, 60, 12);

    assert!(output.contains("Help → help"));
}

#[test]
fn test_render_places_panel_under_caret() {
    let mut app = test_app();
    app.set_text("say hel");
    app.autocomplete
        .replace_suggestions(vec![Suggestion::word("hello"), Suggestion::word("help")]);

    let output = render_app(&mut app, 60, 12);
    let panel = app.panel.unwrap();

    // Input border + "say hel" puts the caret at column 8 on row 1
    assert_eq!(panel.area.x, 8);
    assert_eq!(panel.area.y, 2);
    assert!(output.contains("► hello"));
}

#[test]
fn test_caret_position_is_clamped_to_input() {
    let mut input = TextArea::default();
    input.insert_str("a long line of text that overflows");
    let area = Rect::new(0, 0, 10, 3);

    let caret = caret_position(area, &input);

    assert_eq!(caret, Position::new(8, 1));
}

#[test]
fn test_caret_position_uses_display_width() {
    let mut input = TextArea::default();
    input.insert_str("日本");
    let area = Rect::new(0, 0, 40, 3);

    assert_eq!(caret_position(area, &input), Position::new(5, 1));
}
