/// Single-line text field with a cursor. The cursor counts characters,
/// not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.content.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Split around the cursor for rendering: text before, the character
    /// under the cursor (if any) and the rest.
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let idx = self.byte_index(self.cursor);
        let (before, after) = self.content.split_at(idx);
        let mut chars = after.chars();
        let current = chars.next();
        (before, current, chars.as_str())
    }
}

/// Editing keystroke applied to whichever field has focus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl TextInput {
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(ch) => self.insert_char(ch),
            Edit::Backspace => self.backspace(),
            Edit::Delete => self.delete_char(),
            Edit::Left => self.move_cursor_left(),
            Edit::Right => self.move_cursor_right(),
            Edit::Home => self.move_cursor_home(),
            Edit::End => self.move_cursor_end(),
        }
    }

    /// True when the edit can change the content, as opposed to only moving the cursor
    pub fn changes_content(edit: Edit) -> bool {
        matches!(edit, Edit::Insert(_) | Edit::Backspace | Edit::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_in_the_middle() {
        let mut input = TextInput::from_content("acd");
        input.move_cursor_left();
        input.move_cursor_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abcd");
        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.value(), "abc");
        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn multibyte_characters_are_single_steps() {
        let mut input = TextInput::new();
        input.insert_char('é');
        input.insert_char('x');
        input.move_cursor_left();
        input.backspace();
        assert_eq!(input.value(), "x");
        assert_eq!(input.split_at_cursor(), ("", Some('x'), ""));
    }
}
