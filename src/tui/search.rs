// Search bar line editor
//
// A single-line text buffer with a cursor, edited by printable keys,
// backspace/delete, and cursor movement. The cursor is a byte offset
// that always sits on a char boundary; the display column accounts for
// wide characters so the terminal cursor lands where the user expects.

use unicode_width::UnicodeWidthStr;

/// Editable search input state
#[derive(Debug, Default)]
pub struct SearchInput {
    buffer: String,
    /// Byte offset of the cursor within `buffer`
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The word a submission would look up: trimmed and lowercased.
    /// An empty result means the submission is a validation error.
    pub fn normalized(&self) -> String {
        self.buffer.trim().to_lowercase()
    }

    /// Display column of the cursor, in terminal cells
    pub fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = self.buffer[self.cursor..]
                .chars()
                .next()
                .map(|c| self.cursor + c.len_utf8())
                .unwrap_or(self.buffer.len());
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Byte offset of the char boundary before the cursor, if any
    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].chars().next_back().map(|c| {
            self.cursor - c.len_utf8()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_normalize() {
        let input = typed("  Hello  ");
        assert_eq!(input.text(), "  Hello  ");
        assert_eq!(input.normalized(), "hello");
    }

    #[test]
    fn test_whitespace_only_normalizes_to_empty() {
        assert_eq!(typed("   ").normalized(), "");
        assert_eq!(SearchInput::new().normalized(), "");
    }

    #[test]
    fn test_backspace_respects_utf8() {
        let mut input = typed("café");
        input.backspace();
        assert_eq!(input.text(), "caf");
        input.backspace();
        assert_eq!(input.text(), "ca");
    }

    #[test]
    fn test_cursor_movement_and_mid_edit() {
        let mut input = typed("word");
        input.move_left();
        input.move_left();
        input.insert('x');
        assert_eq!(input.text(), "woxrd");

        input.move_home();
        input.delete();
        assert_eq!(input.text(), "oxrd");

        input.move_end();
        input.backspace();
        assert_eq!(input.text(), "oxr");
    }

    #[test]
    fn test_cursor_column_counts_cells_not_bytes() {
        let mut input = typed("日本");
        assert_eq!(input.cursor_column(), 4); // two wide chars
        input.move_left();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("abc");
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_column(), 0);
    }
}
