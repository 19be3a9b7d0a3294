use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermwrapError {
    #[error("Output error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Attribute error: {0}")]
    Attribute(#[from] ansi::AnsiError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TermwrapError>;
