use clipdeck_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error(transparent)]
    InvalidDuration(#[from] ModelError),

    #[error("invalid volume: {0}")]
    InvalidVolume(f64),

    #[error("invalid fraction: {0} is outside 0.0..=1.0 or not a number")]
    InvalidFraction(f64),

    #[error("invalid playback speed: {0}")]
    InvalidSpeed(f64),

    #[error("no video source loaded")]
    NoSource,
}

impl PlayerError {
    /// Rejection for a NaN or infinite seconds value.
    pub fn non_finite(seconds: f64) -> Self {
        PlayerError::InvalidDuration(ModelError::InvalidDuration(seconds))
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
