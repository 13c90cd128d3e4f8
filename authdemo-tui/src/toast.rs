//! Temporary success notifications, drawn over the top-right corner.

use std::io;
use std::time::{Duration, Instant};

use crate::term::Term;
use crate::text::{display_width, truncate_to_width};
use crate::theme::Theme;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// A toast notification with a title line and a body line.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub duration: Duration,
}

impl Toast {
    /// Create a success toast.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// The single active toast, if any. Showing a new toast replaces it.
#[derive(Debug, Default)]
pub struct ToastState {
    active: Option<ActiveToast>,
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    deadline: Instant,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, toast: Toast) {
        let deadline = Instant::now() + toast.duration;
        self.active = Some(ActiveToast { toast, deadline });
    }

    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|a| &a.toast)
    }

    /// When the active toast should be removed.
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|a| a.deadline)
    }

    /// Drop the active toast once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.active.as_ref().is_some_and(|a| now >= a.deadline) {
            self.active = None;
        }
    }
}

/// Draw the toast box in the top-right corner, over whatever is below.
pub fn draw(term: &mut Term, theme: &Theme, toast: &Toast) -> io::Result<()> {
    let (cols, _) = term.size()?;

    let need = display_width(&toast.title).max(display_width(&toast.body)) + 4;
    let width = need.min(cols.saturating_sub(4) as usize) as u16;
    let x = cols.saturating_sub(width + 2);
    let inner = width.saturating_sub(4) as usize;

    for row in 1..=4 {
        term.fill_row(x, row, width, theme.surface)?;
        term.print(x, row, "▎", theme.success, theme.surface)?;
    }
    let title = truncate_to_width(&toast.title, inner);
    let body = truncate_to_width(&toast.body, inner);
    term.print_bold(x + 2, 2, &title, theme.success, theme.surface)?;
    term.print(x + 2, 3, &body, theme.text, theme.surface)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_a_deadline() {
        let mut toasts = ToastState::new();
        assert!(toasts.deadline().is_none());

        toasts.show(Toast::success("Saved", "All good"));

        assert!(toasts.current().is_some());
        assert!(toasts.deadline().is_some());
    }

    #[test]
    fn test_expire_before_the_deadline_keeps_the_toast() {
        let mut toasts = ToastState::new();
        toasts.show(Toast::success("Saved", "All good"));

        toasts.expire(Instant::now());
        assert!(toasts.current().is_some());
    }

    #[test]
    fn test_expire_after_the_deadline_removes_the_toast() {
        let mut toasts = ToastState::new();
        toasts.show(Toast::success("Saved", "All good").with_duration(Duration::ZERO));

        toasts.expire(Instant::now());
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_showing_a_second_toast_replaces_the_first() {
        let mut toasts = ToastState::new();
        toasts.show(Toast::success("First", ""));
        toasts.show(Toast::success("Second", ""));

        assert_eq!(toasts.current().map(|t| t.title.as_str()), Some("Second"));
    }
}
