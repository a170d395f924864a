use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The duration was NaN or infinite and cannot be rendered.
    #[error("invalid duration: {0} is not a finite number of seconds")]
    InvalidDuration(f64),

    /// Text that does not follow the `MM:SS` / `HH:MM:SS` layout.
    #[error("invalid time label: {0:?}")]
    InvalidLabel(String),

    /// Unknown negative duration policy name.
    #[error(
        "invalid negative duration policy: {0:?} (expected `clamp` or `signed`)"
    )]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
