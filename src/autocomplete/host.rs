//! The text input the controller augments
//!
//! Columns are char offsets on the caret's line.

use tui_textarea::{CursorMove, TextArea};

pub trait TextHost {
    /// Text of the line holding the caret
    fn text(&self) -> String;

    /// Caret column
    fn caret(&self) -> usize;

    /// Replace the chars in `start..end` with `replacement`
    fn replace_range(&mut self, start: usize, end: usize, replacement: &str);

    fn set_caret(&mut self, column: usize);
}

impl TextHost for TextArea<'_> {
    fn text(&self) -> String {
        let row = self.cursor().0;
        self.lines().get(row).cloned().unwrap_or_default()
    }

    fn caret(&self) -> usize {
        self.cursor().1
    }

    fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let line = TextHost::text(self);
        let chars: Vec<char> = line.chars().collect();
        let end = end.min(chars.len());
        let start = start.min(end);

        let mut new_line: String = chars[..start].iter().collect();
        new_line.push_str(replacement);
        new_line.extend(&chars[end..]);

        // Delete from the line end, not the cursor, so nothing after it is left behind
        self.move_cursor(CursorMove::End);
        if !chars.is_empty() {
            self.delete_line_by_head();
        }
        self.insert_str(&new_line);
    }

    fn set_caret(&mut self, column: usize) {
        let row = self.cursor().0;
        let column = column.min(u16::MAX as usize) as u16;
        let row = row.min(u16::MAX as usize) as u16;
        self.move_cursor(CursorMove::Jump(row, column));
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
