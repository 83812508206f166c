//! Minimal single-line text input.
//!
//! Cursor is a byte offset kept on a char boundary. Three of these exist:
//! the search query, the chat draft, and the upload path.

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((offset, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.remove(offset);
            self.cursor = offset;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((offset, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = offset;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Kill from cursor to end of line (Ctrl+K).
    pub fn kill_to_end(&mut self) {
        self.text.truncate(self.cursor);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replace the whole content, cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Take the content, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Acme".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "Acme");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.text, "Acm");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn edit_in_the_middle() {
        let mut input = TextInput::new();
        input.set("bolt");
        input.move_home();
        input.move_right();
        input.insert_char('o');
        assert_eq!(input.text, "boolt");
        input.delete();
        assert_eq!(input.text, "bolt");
    }

    #[test]
    fn multibyte_cursor_stays_on_boundaries() {
        let mut input = TextInput::new();
        input.insert_char('é');
        input.insert_char('x');
        assert_eq!(input.cursor, 3);
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.backspace();
        assert_eq!(input.text, "x");
    }

    #[test]
    fn take_empties_the_input() {
        let mut input = TextInput::new();
        input.set("hello");
        assert_eq!(input.take(), "hello");
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn kill_to_end() {
        let mut input = TextInput::new();
        input.set("hello world");
        input.move_home();
        for _ in 0..5 {
            input.move_right();
        }
        input.kill_to_end();
        assert_eq!(input.text, "hello");
    }
}
