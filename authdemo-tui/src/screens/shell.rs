//! Shared card layout: header band over a body area, hint line at the bottom.

use std::io;

use crate::term::Term;
use crate::text::{center_offset, display_width};
use crate::theme::Theme;

/// Body area handed back to the screen, in absolute terminal coordinates.
pub struct Frame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

/// Draw the centered card and return the body frame inside it.
pub fn draw_shell(
    term: &mut Term,
    theme: &Theme,
    title: &str,
    subtitle: Option<&str>,
    body_width: u16,
    body_height: u16,
    hints: &str,
) -> io::Result<Frame> {
    let (cols, rows) = term.size()?;
    term.begin_frame(theme.background)?;

    let header_height = if subtitle.is_some() { 4 } else { 3 };
    let card_width = body_width + 4;
    let card_height = header_height + body_height + 2;
    let card_x = center_offset(card_width as usize, cols as usize) as u16;
    let card_y = center_offset(card_height as usize, rows as usize) as u16;

    for row in 0..header_height {
        term.fill_row(card_x, card_y + row, card_width, theme.primary)?;
    }
    let title_x = card_x + center_offset(display_width(title), card_width as usize) as u16;
    term.print_bold(title_x, card_y + 1, title, theme.on_primary, theme.primary)?;
    if let Some(subtitle) = subtitle {
        let sub_x = card_x + center_offset(display_width(subtitle), card_width as usize) as u16;
        term.print(sub_x, card_y + 2, subtitle, theme.on_primary, theme.primary)?;
    }

    for row in 0..body_height + 2 {
        term.fill_row(card_x, card_y + header_height + row, card_width, theme.surface)?;
    }

    let hint_x = center_offset(display_width(hints), cols as usize) as u16;
    term.print(hint_x, rows.saturating_sub(1), hints, theme.text_muted, theme.background)?;

    Ok(Frame {
        x: card_x + 2,
        y: card_y + header_height + 1,
        width: body_width,
    })
}
