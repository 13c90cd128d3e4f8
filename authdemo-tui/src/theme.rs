//! Color palette for the demo screens.

use crossterm::style::Color;

/// Named colors the screens draw with.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Card background.
    pub surface: Color,
    /// Header band, buttons, focused accents.
    pub primary: Color,
    /// Busy button background.
    pub primary_dim: Color,
    /// Text drawn on primary surfaces.
    pub on_primary: Color,
    pub text: Color,
    pub text_muted: Color,
    /// Field validation messages.
    pub error: Color,
    /// Success toast accent.
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb { r: 18, g: 18, b: 28 },
            surface: Color::Rgb { r: 32, g: 32, b: 46 },
            primary: Color::Rgb { r: 99, g: 102, b: 241 },
            primary_dim: Color::Rgb { r: 67, g: 56, b: 202 },
            on_primary: Color::Rgb { r: 255, g: 255, b: 255 },
            text: Color::Rgb { r: 229, g: 229, b: 235 },
            text_muted: Color::Rgb { r: 148, g: 148, b: 165 },
            error: Color::Rgb { r: 239, g: 68, b: 68 },
            success: Color::Rgb { r: 34, g: 197, b: 94 },
        }
    }
}
