//! Value types shared by the clipdeck widgets, most importantly the
//! playback [`TimeLabel`] and the [`format_seconds`] helper that renders one.
#![allow(missing_docs)]

pub mod error;
pub mod negative;
pub mod time_label;

pub use error::{ModelError, Result as ModelResult};
pub use negative::NegativePolicy;
pub use time_label::{
    TimeLabel, format_seconds, format_seconds_with, format_whole_seconds,
};
