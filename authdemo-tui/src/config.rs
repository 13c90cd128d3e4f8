//! App configuration.

use std::time::Duration;

use crate::toast::DEFAULT_TOAST_DURATION;

/// Fixed settings for one run of the demo.
///
/// There is no config file; the defaults are the demo's behavior.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Artificial delay between a valid submit and its success toast.
    pub submit_delay: Duration,

    /// How long success toasts stay on screen.
    pub toast_duration: Duration,

    /// Log file path, created fresh on startup.
    pub log_file: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1000),
            toast_duration: DEFAULT_TOAST_DURATION,
            log_file: "authdemo-tui.log",
        }
    }
}
