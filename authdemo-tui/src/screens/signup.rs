//! Sign-up screen: the full six-field registration form.

use std::collections::HashMap;
use std::io;

use fieldcheck::{rule_set, FieldKind, Validator};

use crate::event::{Key, KeyPress};
use crate::focus::FocusRing;
use crate::screens::shell::draw_shell;
use crate::screens::{Action, Route};
use crate::term::Term;
use crate::theme::Theme;
use crate::widgets::{Button, Link, TextField};

const BUTTON_SUBMIT: &str = "submit";
const LINK_LOGIN: &str = "login-link";
const FOCUS_ORDER: &[&str] = &[
    "name",
    "username",
    "email",
    "phone",
    "password",
    "confirmPassword",
    BUTTON_SUBMIT,
    LINK_LOGIN,
];

const HINTS: &str = "Tab move · Enter submit · Ctrl+P reveal · Esc back";

pub struct SignUpScreen {
    focus: FocusRing,
    fields: [TextField; 6],
    submit: Button,
    login_link: Link,
    validator: Validator,
    busy: bool,
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(FOCUS_ORDER),
            fields: [
                TextField::new("name", "Name", "Enter your name"),
                TextField::new("username", "Username", "Enter username"),
                TextField::new("email", "Email", "Enter your email"),
                TextField::new("phone", "Phone No.", "+1234567890"),
                TextField::masked("password", "Password", "Enter password"),
                TextField::masked("confirmPassword", "Confirm Password", "Confirm password"),
            ],
            submit: Button::new("SIGN UP").with_busy_label("Creating Account..."),
            login_link: Link::new("Already have an account?", "Sign In"),
            validator: Validator::new(rule_set(&FieldKind::ALL)),
            busy: false,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Drop everything entered on this screen, ready for the next visit.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.validator = Validator::new(rule_set(&FieldKind::ALL));
        self.focus.reset();
        self.busy = false;
    }

    pub fn handle_key(&mut self, press: &KeyPress) -> Option<Action> {
        let mods = press.modifiers;
        match press.key {
            Key::Char('p') if mods.ctrl && !mods.alt => {
                let current = self.focus.current();
                if let Some(field) = self.field_mut(current) {
                    if field.is_masked() {
                        field.toggle_reveal();
                    }
                }
                None
            }
            Key::Tab | Key::Down if mods.none() => {
                self.focus.next();
                None
            }
            Key::BackTab => {
                self.focus.prev();
                None
            }
            Key::Up if mods.none() => {
                self.focus.prev();
                None
            }
            Key::Escape => Some(Action::Navigate(Route::Index)),
            Key::Enter => {
                if self.focus.current() == LINK_LOGIN {
                    Some(Action::Navigate(Route::Login))
                } else {
                    self.submit()
                }
            }
            _ => {
                self.forward_to_field(press);
                None
            }
        }
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut TextField> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    fn forward_to_field(&mut self, press: &KeyPress) {
        let current = self.focus.current();
        let Some(field) = self.field_mut(current) else {
            return;
        };
        let changed = field
            .handle_key(press)
            .then(|| (field.id(), field.text().to_string()));
        if let Some((name, value)) = changed {
            self.validator.set_value(name, value);
        }
    }

    fn submit(&mut self) -> Option<Action> {
        if self.busy {
            return None;
        }
        let snapshot: HashMap<String, String> = self
            .fields
            .iter()
            .map(|field| (field.id().to_string(), field.text().to_string()))
            .collect();
        self.validator
            .validate_all(&snapshot)
            .then_some(Action::Submit)
    }

    pub fn draw(&self, term: &mut Term, theme: &Theme) -> io::Result<Option<(u16, u16)>> {
        let frame = draw_shell(term, theme, "Create new Account", None, 56, 18, HINTS)?;
        let col_width = (frame.width - 2) / 2;
        let right_x = frame.x + col_width + 2;

        // name/username and password/confirmPassword share a two-column row.
        let slots: [((u16, u16), u16); 6] = [
            ((frame.x, frame.y), col_width),
            ((right_x, frame.y), col_width),
            ((frame.x, frame.y + 4), frame.width),
            ((frame.x, frame.y + 8), frame.width),
            ((frame.x, frame.y + 12), col_width),
            ((right_x, frame.y + 12), col_width),
        ];

        let mut cursor = None;
        for (field, (pos, width)) in self.fields.iter().zip(slots) {
            let c = field.draw(
                term,
                theme,
                pos,
                width,
                self.focus.current() == field.id(),
                self.validator.error(field.id()),
            )?;
            cursor = cursor.or(c);
        }

        self.submit.draw(
            term,
            theme,
            (frame.x, frame.y + 16),
            frame.width,
            self.focus.current() == BUTTON_SUBMIT,
            self.busy,
        )?;
        self.login_link.draw(
            term,
            theme,
            (frame.x, frame.y + 17),
            frame.width,
            self.focus.current() == LINK_LOGIN,
        )?;

        Ok(cursor)
    }
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
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

    fn focus_on(screen: &mut SignUpScreen, id: &str) {
        while screen.focus.current() != id {
            screen.handle_key(&press(Key::Tab));
        }
    }

    fn type_text(screen: &mut SignUpScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(&press(Key::Char(c)));
        }
    }

    fn fill(screen: &mut SignUpScreen, id: &str, text: &str) {
        focus_on(screen, id);
        type_text(screen, text);
    }

    #[test]
    fn test_focus_visits_fields_then_button_then_link() {
        let mut screen = SignUpScreen::new();
        let mut seen = Vec::new();
        for _ in 0..FOCUS_ORDER.len() {
            seen.push(screen.focus.current());
            screen.handle_key(&press(Key::Tab));
        }
        assert_eq!(seen, FOCUS_ORDER);
        assert_eq!(screen.focus.current(), "name");
    }

    #[test]
    fn test_invalid_email_shows_the_email_message() {
        let mut screen = SignUpScreen::new();
        fill(&mut screen, "email", "not-an-email");

        assert_eq!(
            screen.validator.error("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_phone_without_country_code_is_rejected() {
        let mut screen = SignUpScreen::new();
        fill(&mut screen, "phone", "1234567890");

        assert_eq!(
            screen.validator.error("phone"),
            Some("Please enter a valid phone number with country code")
        );
    }

    #[test]
    fn test_confirm_password_mismatch_is_flagged() {
        let mut screen = SignUpScreen::new();
        fill(&mut screen, "password", "s3cret!x");
        fill(&mut screen, "confirmPassword", "different!");

        assert_eq!(
            screen.validator.error("confirmPassword"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_empty_submit_reports_every_field() {
        let mut screen = SignUpScreen::new();

        assert_eq!(screen.handle_key(&press(Key::Enter)), None);
        assert_eq!(screen.validator.errors().len(), 6);
    }

    #[test]
    fn test_valid_form_submits() {
        let mut screen = SignUpScreen::new();
        fill(&mut screen, "name", "Ada Lovelace");
        fill(&mut screen, "username", "ada_l0velace");
        fill(&mut screen, "email", "ada@example.com");
        fill(&mut screen, "phone", "+442071234567");
        fill(&mut screen, "password", "s3cret!x");
        fill(&mut screen, "confirmPassword", "s3cret!x");

        assert_eq!(screen.handle_key(&press(Key::Enter)), Some(Action::Submit));
        assert!(screen.validator.errors().is_empty());
    }

    #[test]
    fn test_enter_on_the_login_link_navigates() {
        let mut screen = SignUpScreen::new();
        focus_on(&mut screen, LINK_LOGIN);

        assert_eq!(
            screen.handle_key(&press(Key::Enter)),
            Some(Action::Navigate(Route::Login))
        );
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut screen = SignUpScreen::new();
        fill(&mut screen, "name", "Ada");
        screen.handle_key(&press(Key::Enter));

        screen.reset();

        assert!(screen.fields.iter().all(|field| field.text().is_empty()));
        assert!(screen.validator.errors().is_empty());
        assert_eq!(screen.focus.current(), "name");
    }
}
