//! Configuration for the clipdeck widgets.
//!
//! Player defaults (volume, seek step, controls auto-hide, how negative
//! durations render) are read from `clipdeck.toml` or `clipdeck.json` and can
//! be overridden per process with `CLIPDECK_*` environment variables. The
//! crate also owns the tracing subscriber setup so binaries embedding the
//! widgets share one logging configuration.
#![allow(missing_docs)]

pub mod env;
pub mod error;
pub mod logging;
pub mod player;
pub mod util;

pub use error::ConfigError;
pub use player::{PlayerConfig, PlayerConfigSource};
