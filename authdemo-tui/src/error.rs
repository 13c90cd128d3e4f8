use thiserror::Error;

/// Errors that can abort the demo.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The logger was already initialized.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
