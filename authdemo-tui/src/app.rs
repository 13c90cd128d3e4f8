//! Event loop, routing, simulated submits, and toast lifecycle.

use std::time::Instant;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::event::{key_presses, Key, KeyPress};
use crate::screens::{Action, IndexScreen, LoginScreen, Route, SignUpScreen};
use crate::term::Term;
use crate::theme::Theme;
use crate::toast::{self, Toast, ToastState};

struct PendingSubmit {
    route: Route,
    deadline: Instant,
}

pub struct App {
    config: AppConfig,
    theme: Theme,
    route: Route,
    index: IndexScreen,
    login: LoginScreen,
    signup: SignUpScreen,
    toasts: ToastState,
    pending: Option<PendingSubmit>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            route: Route::Index,
            index: IndexScreen::new(),
            login: LoginScreen::new(),
            signup: SignUpScreen::new(),
            toasts: ToastState::new(),
            pending: None,
        }
    }

    /// Draw, wait for input or the nearest deadline, apply, repeat.
    pub fn run(&mut self, term: &mut Term) -> Result<(), AppError> {
        log::info!("started on {:?}", self.route);
        loop {
            self.draw(term)?;

            let timeout = self
                .next_wakeup()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()));
            for press in key_presses(&term.poll(timeout)?) {
                if press.key == Key::Char('c') && press.modifiers.ctrl {
                    return Ok(());
                }
                if self.apply_key(&press) {
                    return Ok(());
                }
            }

            self.tick(Instant::now());
        }
    }

    /// Returns true when the app should quit.
    fn apply_key(&mut self, press: &KeyPress) -> bool {
        let action = match self.route {
            Route::Index => self.index.handle_key(press),
            Route::Login => self.login.handle_key(press),
            Route::SignUp => self.signup.handle_key(press),
        };
        match action {
            Some(Action::Quit) => true,
            Some(Action::Navigate(to)) => {
                self.navigate(to);
                false
            }
            Some(Action::Submit) => {
                self.begin_submit();
                false
            }
            None => false,
        }
    }

    fn draw(&self, term: &mut Term) -> Result<(), AppError> {
        let cursor = match self.route {
            Route::Index => self.index.draw(term, &self.theme)?,
            Route::Login => self.login.draw(term, &self.theme)?,
            Route::SignUp => self.signup.draw(term, &self.theme)?,
        };
        if let Some(active) = self.toasts.current() {
            toast::draw(term, &self.theme, active)?;
        }
        term.end_frame(cursor)?;
        Ok(())
    }

    fn navigate(&mut self, to: Route) {
        if to == self.route {
            return;
        }
        match self.route {
            Route::Login => self.login.reset(),
            Route::SignUp => self.signup.reset(),
            Route::Index => {}
        }
        log::info!("navigating to {:?}", to);
        self.route = to;
    }

    fn begin_submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let deadline = Instant::now() + self.config.submit_delay;
        self.pending = Some(PendingSubmit {
            route: self.route,
            deadline,
        });
        match self.route {
            Route::Login => self.login.set_busy(true),
            Route::SignUp => self.signup.set_busy(true),
            Route::Index => {}
        }
        log::debug!("submit started on {:?}", self.route);
    }

    /// Apply any deadline that has passed.
    fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            if let Some(pending) = self.pending.take() {
                self.complete_submit(pending.route);
            }
        }
        self.toasts.expire(now);
    }

    fn complete_submit(&mut self, route: Route) {
        log::info!("submit completed on {:?}", route);
        match route {
            Route::Login => {
                self.login.set_busy(false);
                self.toasts.show(
                    Toast::success("Login Successful", "Welcome back!")
                        .with_duration(self.config.toast_duration),
                );
                self.navigate(Route::Index);
            }
            Route::SignUp => {
                self.signup.set_busy(false);
                self.toasts.show(
                    Toast::success(
                        "Account Created Successfully",
                        "Welcome! Please sign in with your credentials.",
                    )
                    .with_duration(self.config.toast_duration),
                );
                self.navigate(Route::Login);
            }
            Route::Index => {}
        }
    }

    /// Earliest instant the loop has to wake up for without input.
    fn next_wakeup(&self) -> Option<Instant> {
        let submit = self.pending.as_ref().map(|p| p.deadline);
        match (submit, self.toasts.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;
    use std::time::Duration;

    fn instant_app() -> App {
        App::new(
            AppConfig {
                submit_delay: Duration::ZERO,
                ..AppConfig::default()
            },
            Theme::default(),
        )
    }

    fn press(key: Key) -> KeyPress {
        KeyPress {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_enter_on_index_navigates_to_login() {
        let mut app = instant_app();

        assert!(!app.apply_key(&press(Key::Enter)));
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_quit_action_ends_the_loop() {
        let mut app = instant_app();
        assert!(app.apply_key(&press(Key::Char('q'))));
    }

    #[test]
    fn test_login_submit_toasts_and_returns_to_index() {
        let mut app = instant_app();
        app.navigate(Route::Login);

        app.begin_submit();
        assert!(app.pending.is_some());

        app.tick(Instant::now());
        assert!(app.pending.is_none());
        assert_eq!(app.route, Route::Index);
        assert_eq!(
            app.toasts.current().map(|t| t.title.as_str()),
            Some("Login Successful")
        );
    }

    #[test]
    fn test_signup_completion_lands_on_login() {
        let mut app = instant_app();
        app.navigate(Route::SignUp);

        app.begin_submit();
        app.tick(Instant::now());

        assert_eq!(app.route, Route::Login);
        assert_eq!(
            app.toasts.current().map(|t| t.title.as_str()),
            Some("Account Created Successfully")
        );
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut app = App::new(AppConfig::default(), Theme::default());
        app.navigate(Route::Login);

        app.begin_submit();
        // Push the first deadline far out; a replacement would land near now.
        if let Some(pending) = app.pending.as_mut() {
            pending.deadline += Duration::from_secs(100);
        }
        app.begin_submit();

        let far_off = Instant::now() + Duration::from_secs(50);
        assert!(app.pending.as_ref().is_some_and(|p| p.deadline > far_off));
    }

    #[test]
    fn test_next_wakeup_picks_the_earliest_deadline() {
        let mut app = App::new(AppConfig::default(), Theme::default());
        assert!(app.next_wakeup().is_none());

        app.toasts
            .show(Toast::success("t", "").with_duration(Duration::from_secs(60)));
        app.navigate(Route::Login);
        app.begin_submit();

        assert_eq!(
            app.next_wakeup(),
            app.pending.as_ref().map(|p| p.deadline)
        );
    }

    #[test]
    fn test_toast_survives_navigation() {
        let mut app = instant_app();
        app.navigate(Route::Login);
        app.begin_submit();
        app.tick(Instant::now());

        app.navigate(Route::SignUp);
        assert!(app.toasts.current().is_some());
    }
}
