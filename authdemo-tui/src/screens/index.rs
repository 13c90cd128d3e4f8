//! Landing screen with the two navigation buttons.
//!
//! Unlike the form screens this draws directly on the background, without
//! the card shell.

use std::io;

use crate::event::{Key, KeyPress};
use crate::focus::FocusRing;
use crate::screens::{Action, Route};
use crate::term::Term;
use crate::text::{center_offset, display_width};
use crate::theme::Theme;
use crate::widgets::Button;

const BUTTON_LOGIN: &str = "login";
const BUTTON_SIGNUP: &str = "signup";
const FOCUS_ORDER: &[&str] = &[BUTTON_LOGIN, BUTTON_SIGNUP];

const HINTS: &str = "Tab/↑↓ move · Enter select · Q quit";

pub struct IndexScreen {
    focus: FocusRing,
    login_button: Button,
    signup_button: Button,
}

impl IndexScreen {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(FOCUS_ORDER),
            login_button: Button::new("Go to Login"),
            signup_button: Button::new("Go to Sign Up"),
        }
    }

    pub fn handle_key(&mut self, press: &KeyPress) -> Option<Action> {
        match press.key {
            Key::Tab | Key::Down => {
                self.focus.next();
                None
            }
            Key::BackTab | Key::Up => {
                self.focus.prev();
                None
            }
            Key::Enter => match self.focus.current() {
                BUTTON_SIGNUP => Some(Action::Navigate(Route::SignUp)),
                _ => Some(Action::Navigate(Route::Login)),
            },
            Key::Char('q') if press.modifiers.none() => Some(Action::Quit),
            Key::Escape => Some(Action::Quit),
            _ => None,
        }
    }

    pub fn draw(&self, term: &mut Term, theme: &Theme) -> io::Result<Option<(u16, u16)>> {
        let (cols, rows) = term.size()?;
        term.begin_frame(theme.background)?;

        let title = "Authentication Demo";
        let tagline = "Welcome to the login and sign-up application demo";
        let button_width: u16 = 24;

        let top = rows.saturating_sub(8) / 2;
        let title_x = center_offset(display_width(title), cols as usize) as u16;
        term.print_bold(title_x, top, title, theme.primary, theme.background)?;
        let tag_x = center_offset(display_width(tagline), cols as usize) as u16;
        term.print(tag_x, top + 1, tagline, theme.text_muted, theme.background)?;

        let button_x = center_offset(button_width as usize, cols as usize) as u16;
        self.login_button.draw(
            term,
            theme,
            (button_x, top + 4),
            button_width,
            self.focus.current() == BUTTON_LOGIN,
            false,
        )?;
        self.signup_button.draw(
            term,
            theme,
            (button_x, top + 6),
            button_width,
            self.focus.current() == BUTTON_SIGNUP,
            false,
        )?;

        let hint_x = center_offset(display_width(HINTS), cols as usize) as u16;
        term.print(hint_x, rows.saturating_sub(1), HINTS, theme.text_muted, theme.background)?;

        Ok(None)
    }
}

impl Default for IndexScreen {
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

    #[test]
    fn test_enter_navigates_to_the_focused_target() {
        let mut screen = IndexScreen::new();
        assert_eq!(
            screen.handle_key(&press(Key::Enter)),
            Some(Action::Navigate(Route::Login))
        );

        screen.handle_key(&press(Key::Tab));
        assert_eq!(
            screen.handle_key(&press(Key::Enter)),
            Some(Action::Navigate(Route::SignUp))
        );
    }

    #[test]
    fn test_q_and_escape_quit() {
        let mut screen = IndexScreen::new();
        assert_eq!(screen.handle_key(&press(Key::Char('q'))), Some(Action::Quit));
        assert_eq!(screen.handle_key(&press(Key::Escape)), Some(Action::Quit));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut screen = IndexScreen::new();
        screen.handle_key(&press(Key::Down));
        screen.handle_key(&press(Key::Down));
        assert_eq!(screen.focus.current(), BUTTON_LOGIN);

        screen.handle_key(&press(Key::Up));
        assert_eq!(screen.focus.current(), BUTTON_SIGNUP);
    }
}
