//! Embeddable video player widgets.
//!
//! Each widget is a plain state type: it owns the numbers a renderer needs
//! and produces the text the renderer shows verbatim. Drawing and event
//! wiring belong to the embedding UI toolkit.

pub mod error;
pub mod widgets;

pub use clipdeck_model::{
    NegativePolicy, TimeLabel, format_seconds, format_seconds_with,
};
pub use error::{PlayerError, Result};
pub use widgets::{
    ContentFit, ProgressBar, SingleVideoPlayer, VideoContainer, VolumeSlider,
};
