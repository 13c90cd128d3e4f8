//! Single-line labeled text input with an inline validation message.

use std::io;

use crossterm::style::Color;

use crate::event::{Key, KeyPress};
use crate::term::Term;
use crate::text::{char_width, truncate_to_width};
use crate::theme::Theme;

const MASK_CHAR: char = '•';

/// A labeled input field. The cursor position is a char index into the text.
pub struct TextField {
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    masked: bool,
    revealed: bool,
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder,
            masked: false,
            revealed: false,
            text: String::new(),
            cursor: 0,
        }
    }

    /// A field whose value is rendered as mask characters.
    pub fn masked(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(id, label, placeholder)
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Temporarily show a masked value in plain text.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.revealed = false;
    }

    /// Apply a key press to the field. Returns true when the text changed.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        let mods = press.modifiers;
        match press.key {
            Key::Char(c) if !c.is_control() && !mods.ctrl && !mods.alt => {
                self.insert_char(c);
                true
            }
            Key::Backspace if mods.none() => self.delete_back(),
            Key::Delete if mods.none() => self.delete_forward(),
            Key::Left if mods.none() => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Key::Right if mods.none() => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            Key::Home if mods.none() => {
                self.cursor = 0;
                false
            }
            Key::End if mods.none() => {
                self.cursor = self.text.chars().count();
                false
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        let index = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(index, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    fn display_text(&self) -> String {
        if self.masked && !self.revealed {
            self.text.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.text.clone()
        }
    }

    /// Visible slice of the display text for a field `width` columns wide,
    /// plus the cursor column within that slice. One column is reserved so
    /// the cursor can sit past the last char.
    fn visible_window(&self, width: u16) -> (String, u16) {
        let chars: Vec<char> = self.display_text().chars().collect();
        let budget = width.saturating_sub(1) as usize;

        let mut start = 0;
        while char_span(&chars[start..self.cursor]) > budget {
            start += 1;
        }

        let mut window = String::new();
        let mut used = 0;
        for &c in &chars[start..] {
            let w = char_width(c);
            if used + w > budget {
                break;
            }
            window.push(c);
            used += w;
        }

        (window, char_span(&chars[start..self.cursor]) as u16)
    }

    /// Draw label, value row, and error line at `(x, y)`. Returns the
    /// terminal cursor position when the field is focused.
    pub fn draw(
        &self,
        term: &mut Term,
        theme: &Theme,
        (x, y): (u16, u16),
        width: u16,
        focused: bool,
        error: Option<&str>,
    ) -> io::Result<Option<(u16, u16)>> {
        let label_fg = label_color(theme, focused, error.is_some());
        term.print_bold(x, y, &self.label.to_uppercase(), label_fg, theme.surface)?;

        term.fill_row(x, y + 1, width, theme.background)?;
        let (window, cursor_col) = self.visible_window(width);
        if self.text.is_empty() {
            let hint = truncate_to_width(self.placeholder, width as usize);
            term.print(x, y + 1, &hint, theme.text_muted, theme.background)?;
        } else {
            term.print(x, y + 1, &window, theme.text, theme.background)?;
        }

        if let Some(message) = error {
            let message = truncate_to_width(message, width as usize);
            term.print(x, y + 2, &message, theme.error, theme.surface)?;
        }

        Ok(focused.then_some((x + cursor_col, y + 1)))
    }
}

/// Label color: an invalid field keeps the error color even while focused.
fn label_color(theme: &Theme, focused: bool, invalid: bool) -> Color {
    if invalid {
        theme.error
    } else if focused {
        theme.primary
    } else {
        theme.text_muted
    }
}

fn char_span(chars: &[char]) -> usize {
    chars.iter().map(|&c| char_width(c)).sum()
}

fn char_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    fn press(key: Key) -> KeyPress {
        KeyPress {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_typing_inserts_at_the_cursor() {
        let mut field = TextField::new("username", "Username", "Enter your username");
        for c in "abc".chars() {
            assert!(field.handle_key(&press(Key::Char(c))));
        }
        field.handle_key(&press(Key::Left));
        field.handle_key(&press(Key::Char('X')));

        assert_eq!(field.text(), "abXc");
    }

    #[test]
    fn test_backspace_removes_the_char_before_the_cursor() {
        let mut field = TextField::new("username", "Username", "");
        for c in "abc".chars() {
            field.handle_key(&press(Key::Char(c)));
        }

        assert!(field.handle_key(&press(Key::Backspace)));
        assert_eq!(field.text(), "ab");

        field.handle_key(&press(Key::Home));
        assert!(!field.handle_key(&press(Key::Backspace)));
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_delete_removes_the_char_at_the_cursor() {
        let mut field = TextField::new("username", "Username", "");
        for c in "abc".chars() {
            field.handle_key(&press(Key::Char(c)));
        }
        field.handle_key(&press(Key::Home));

        assert!(field.handle_key(&press(Key::Delete)));
        assert_eq!(field.text(), "bc");

        field.handle_key(&press(Key::End));
        assert!(!field.handle_key(&press(Key::Delete)));
        assert_eq!(field.text(), "bc");
    }

    #[test]
    fn test_editing_multibyte_text_stays_on_char_boundaries() {
        let mut field = TextField::new("name", "Name", "");
        for c in "héllo".chars() {
            field.handle_key(&press(Key::Char(c)));
        }
        assert_eq!(field.text(), "héllo");

        field.handle_key(&press(Key::Home));
        field.handle_key(&press(Key::Right));
        field.handle_key(&press(Key::Backspace));

        assert_eq!(field.text(), "éllo");
    }

    #[test]
    fn test_masked_display_hides_the_value() {
        let mut field = TextField::masked("password", "Password", "");
        for c in "secret".chars() {
            field.handle_key(&press(Key::Char(c)));
        }

        assert_eq!(field.display_text(), "••••••");
        field.toggle_reveal();
        assert_eq!(field.display_text(), "secret");
    }

    #[test]
    fn test_window_follows_the_cursor() {
        let mut field = TextField::new("email", "Email", "");
        for c in "abcdefghij".chars() {
            field.handle_key(&press(Key::Char(c)));
        }

        let (window, col) = field.visible_window(6);
        assert_eq!(window, "fghij");
        assert_eq!(col, 5);

        field.handle_key(&press(Key::Home));
        let (window, col) = field.visible_window(6);
        assert_eq!(window, "abcde");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_control_and_modified_chars_are_ignored() {
        let mut field = TextField::new("username", "Username", "");

        assert!(!field.handle_key(&press(Key::Char('\t'))));
        let ctrl_p = KeyPress {
            key: Key::Char('p'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert!(!field.handle_key(&ctrl_p));

        assert!(field.text().is_empty());
    }

    #[test]
    fn test_label_color_prefers_invalid_over_focus() {
        let theme = Theme::default();

        assert_eq!(label_color(&theme, false, false), theme.text_muted);
        assert_eq!(label_color(&theme, true, false), theme.primary);
        assert_eq!(label_color(&theme, false, true), theme.error);
        assert_eq!(label_color(&theme, true, true), theme.error);
    }

    #[test]
    fn test_clear_resets_text_cursor_and_reveal() {
        let mut field = TextField::masked("password", "Password", "");
        for c in "abc".chars() {
            field.handle_key(&press(Key::Char(c)));
        }
        field.toggle_reveal();

        field.clear();

        assert!(field.text().is_empty());
        let (window, col) = field.visible_window(10);
        assert!(window.is_empty());
        assert_eq!(col, 0);
    }
}
