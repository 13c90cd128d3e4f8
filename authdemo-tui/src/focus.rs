//! Tab-order focus tracking for a screen's widgets.

/// Cycles focus through a fixed list of widget ids.
///
/// Something is always focused; screens start at their first widget.
#[derive(Debug)]
pub struct FocusRing {
    ids: &'static [&'static str],
    current: usize,
}

impl FocusRing {
    pub fn new(ids: &'static [&'static str]) -> Self {
        Self { ids, current: 0 }
    }

    /// Id of the focused widget.
    pub fn current(&self) -> &'static str {
        self.ids[self.current]
    }

    /// Focus the next widget, wrapping at the end.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.ids.len();
    }

    /// Focus the previous widget, wrapping at the start.
    pub fn prev(&mut self) {
        self.current = if self.current == 0 {
            self.ids.len() - 1
        } else {
            self.current - 1
        };
    }

    /// Back to the first widget.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn test_next_wraps_around() {
        let mut focus = FocusRing::new(&IDS);
        assert_eq!(focus.current(), "a");

        focus.next();
        focus.next();
        assert_eq!(focus.current(), "c");

        focus.next();
        assert_eq!(focus.current(), "a");
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut focus = FocusRing::new(&IDS);

        focus.prev();
        assert_eq!(focus.current(), "c");

        focus.prev();
        assert_eq!(focus.current(), "b");
    }

    #[test]
    fn test_reset_returns_to_first() {
        let mut focus = FocusRing::new(&IDS);
        focus.next();
        focus.reset();
        assert_eq!(focus.current(), "a");
    }
}
