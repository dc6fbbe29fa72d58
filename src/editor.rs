/// Single-line input field with a movable cursor, used for the title bar
/// and the content/date/time edit popups. Enter commits, Esc abandons;
/// multi-line input is deliberately not supported (Enter never inserts a
/// newline, it submits).
#[derive(Debug, Clone, Default)]
pub struct InputField {
    chars: Vec<char>,
    pub cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        InputField::default()
    }

    pub fn with_value(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        let cursor = chars.len();
        InputField { chars, cursor }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_around_the_cursor() {
        let mut field = InputField::with_value("nte");
        assert_eq!(field.cursor, 3);
        field.move_home();
        field.move_right();
        field.insert_char('o');
        assert_eq!(field.value(), "note");

        field.backspace();
        assert_eq!(field.value(), "nte");
        field.delete();
        assert_eq!(field.value(), "ne");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = InputField::new();
        field.move_left();
        field.backspace();
        assert_eq!(field.cursor, 0);
        field.insert_char('a');
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor, 1);
        field.move_end();
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut field = InputField::with_value("done");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor, 0);
        assert_eq!(field.value(), "");
    }
}
