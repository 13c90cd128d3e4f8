//! Inline navigation link, like the sign-up prompt under a form.

use std::io;

use crate::term::Term;
use crate::text::{center_offset, display_width};
use crate::theme::Theme;

pub struct Link {
    prefix: &'static str,
    label: &'static str,
}

impl Link {
    pub fn new(prefix: &'static str, label: &'static str) -> Self {
        Self { prefix, label }
    }

    /// Draw "prefix label" centered in the row, label highlighted.
    pub fn draw(
        &self,
        term: &mut Term,
        theme: &Theme,
        (x, y): (u16, u16),
        width: u16,
        focused: bool,
    ) -> io::Result<()> {
        let prefix_width = display_width(self.prefix);
        let total = prefix_width + 1 + display_width(self.label);
        let offset = center_offset(total, width as usize) as u16;

        term.print(x + offset, y, self.prefix, theme.text_muted, theme.surface)?;
        let label_x = x + offset + prefix_width as u16 + 1;
        if focused {
            term.print_bold(label_x, y, self.label, theme.primary, theme.surface)
        } else {
            term.print(label_x, y, self.label, theme.primary, theme.surface)
        }
    }
}
