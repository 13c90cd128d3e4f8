//! Widgets shared by the screens.

mod button;
mod input;
mod link;

pub use button::Button;
pub use input::TextField;
pub use link::Link;
