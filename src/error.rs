use filter_css::FilterCssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NightfilterError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),

    #[error(transparent)]
    Filter(#[from] FilterCssError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, NightfilterError>;
