//! The three screens and the actions they hand back to the app.

mod index;
mod login;
mod shell;
mod signup;

pub use index::IndexScreen;
pub use login::LoginScreen;
pub use signup::SignUpScreen;

/// Screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Login,
    SignUp,
}

/// What a screen asks the app to do in response to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Submit,
    Quit,
}
