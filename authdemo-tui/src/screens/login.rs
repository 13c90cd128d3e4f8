//! Login screen: username + password against the credential rules.

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

const FIELD_USERNAME: &str = "username";
const FIELD_PASSWORD: &str = "password";
const BUTTON_SUBMIT: &str = "submit";
const LINK_SIGNUP: &str = "signup-link";
const FOCUS_ORDER: &[&str] = &[FIELD_USERNAME, FIELD_PASSWORD, BUTTON_SUBMIT, LINK_SIGNUP];

const LOGIN_FIELDS: [FieldKind; 2] = [FieldKind::Username, FieldKind::Password];

const HINTS: &str = "Tab move · Enter submit · Ctrl+P reveal · Esc back";

pub struct LoginScreen {
    focus: FocusRing,
    username: TextField,
    password: TextField,
    submit: Button,
    signup_link: Link,
    validator: Validator,
    busy: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(FOCUS_ORDER),
            username: TextField::new(FIELD_USERNAME, "Username", "Enter your username"),
            password: TextField::masked(FIELD_PASSWORD, "Password", "Enter your password"),
            submit: Button::new("LOGIN").with_busy_label("Signing In..."),
            signup_link: Link::new("Don't have Account?", "SignUp"),
            validator: Validator::new(rule_set(&LOGIN_FIELDS)),
            busy: false,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Drop everything entered on this screen, ready for the next visit.
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.validator = Validator::new(rule_set(&LOGIN_FIELDS));
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
                if self.focus.current() == LINK_SIGNUP {
                    Some(Action::Navigate(Route::SignUp))
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
        match id {
            FIELD_USERNAME => Some(&mut self.username),
            FIELD_PASSWORD => Some(&mut self.password),
            _ => None,
        }
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
        let snapshot = HashMap::from([
            (FIELD_USERNAME.to_string(), self.username.text().to_string()),
            (FIELD_PASSWORD.to_string(), self.password.text().to_string()),
        ]);
        self.validator
            .validate_all(&snapshot)
            .then_some(Action::Submit)
    }

    pub fn draw(&self, term: &mut Term, theme: &Theme) -> io::Result<Option<(u16, u16)>> {
        let frame = draw_shell(term, theme, "Login", Some("Sign in to continue"), 40, 11, HINTS)?;

        let mut cursor = self.username.draw(
            term,
            theme,
            (frame.x, frame.y),
            frame.width,
            self.focus.current() == FIELD_USERNAME,
            self.validator.error(FIELD_USERNAME),
        )?;
        cursor = cursor.or(self.password.draw(
            term,
            theme,
            (frame.x, frame.y + 4),
            frame.width,
            self.focus.current() == FIELD_PASSWORD,
            self.validator.error(FIELD_PASSWORD),
        )?);

        self.submit.draw(
            term,
            theme,
            (frame.x, frame.y + 8),
            frame.width,
            self.focus.current() == BUTTON_SUBMIT,
            self.busy,
        )?;
        self.signup_link.draw(
            term,
            theme,
            (frame.x, frame.y + 10),
            frame.width,
            self.focus.current() == LINK_SIGNUP,
        )?;

        Ok(cursor)
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}
