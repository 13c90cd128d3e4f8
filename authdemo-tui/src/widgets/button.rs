//! Action button drawn as a filled single-row band.

use std::io;

use crate::term::Term;
use crate::text::{center_offset, display_width, truncate_to_width};
use crate::theme::Theme;

pub struct Button {
    label: &'static str,
    busy_label: Option<&'static str>,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            busy_label: None,
        }
    }

    /// Label shown while a submit is in flight.
    pub fn with_busy_label(mut self, busy_label: &'static str) -> Self {
        self.busy_label = Some(busy_label);
        self
    }

    fn label_text(&self, focused: bool, busy: bool) -> String {
        if busy {
            self.busy_label.unwrap_or(self.label).to_string()
        } else if focused {
            format!("▸ {} ◂", self.label)
        } else {
            self.label.to_string()
        }
    }

    pub fn draw(
        &self,
        term: &mut Term,
        theme: &Theme,
        (x, y): (u16, u16),
        width: u16,
        focused: bool,
        busy: bool,
    ) -> io::Result<()> {
        let bg = if busy { theme.primary_dim } else { theme.primary };
        term.fill_row(x, y, width, bg)?;

        let label = truncate_to_width(&self.label_text(focused, busy), width as usize);
        let offset = center_offset(display_width(&label), width as usize) as u16;
        term.print_bold(x + offset, y, &label, theme.on_primary, bg)
    }
}
