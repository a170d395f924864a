use clipdeck_config::PlayerConfig;
use clipdeck_model::{NegativePolicy, TimeLabel};

use super::UNKNOWN_TIME;
use crate::{PlayerError, Result};

/// Seek bar state: playback position, total duration and buffered fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    position: f64,
    /// `None` until a positive duration is reported.
    duration: Option<f64>,
    buffered: f64,
    negative_policy: NegativePolicy,
    show_remaining: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl ProgressBar {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            position: 0.0,
            duration: None,
            buffered: 0.0,
            negative_policy: config.negative_durations,
            show_remaining: config.show_remaining,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn set_position(&mut self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() {
            return Err(PlayerError::non_finite(seconds));
        }
        self.position = seconds;
        Ok(())
    }

    /// A zero or negative duration marks it as unknown (e.g. live streams).
    pub fn set_duration(&mut self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() {
            return Err(PlayerError::non_finite(seconds));
        }
        self.duration = (seconds > 0.0).then_some(seconds);
        Ok(())
    }

    pub fn set_buffered(&mut self, fraction: f64) -> Result<()> {
        if !fraction.is_finite() {
            return Err(PlayerError::InvalidFraction(fraction));
        }
        self.buffered = fraction.clamp(0.0, 1.0);
        Ok(())
    }

    pub fn set_show_remaining(&mut self, show_remaining: bool) {
        self.show_remaining = show_remaining;
    }

    pub fn show_remaining(&self) -> bool {
        self.show_remaining
    }

    /// Back to the start, keeping the duration of the current source.
    pub fn rewind(&mut self) {
        self.position = 0.0;
        self.buffered = 0.0;
    }

    pub fn reset(&mut self) {
        self.rewind();
        self.duration = None;
    }

    /// Played portion of the bar in `0.0..=1.0`.
    pub fn played_fraction(&self) -> f64 {
        match self.duration {
            Some(duration) => (self.position / duration).clamp(0.0, 1.0),
            None => {
                log::trace!("progress bar: no duration available");
                0.0
            }
        }
    }

    /// Buffered can't be less than played.
    pub fn buffered_fraction(&self) -> f64 {
        self.buffered.clamp(self.played_fraction(), 1.0)
    }

    /// Maps a press at `x` on a bar `width` wide to a position in seconds.
    pub fn seek_position(&self, x: f64, width: f64) -> f64 {
        let Some(duration) = self.duration else {
            return 0.0;
        };
        if !(width.is_finite() && width > 0.0) || !x.is_finite() {
            return 0.0;
        }
        (x / width).clamp(0.0, 1.0) * duration
    }

    pub fn position_label(&self) -> Result<TimeLabel> {
        Ok(TimeLabel::from_seconds(self.position, self.negative_policy)?)
    }

    pub fn duration_label(&self) -> Option<TimeLabel> {
        self.duration.map(|duration| {
            TimeLabel::from_whole_seconds(duration.floor() as u64)
        })
    }

    /// Time left until the end, rendered negative (`-MM:SS`). A position
    /// past the end shows `00:00`.
    pub fn remaining_label(&self) -> Option<TimeLabel> {
        let duration = self.duration?;
        let left = (self.position - duration).min(0.0);
        TimeLabel::from_seconds(left, NegativePolicy::Signed).ok()
    }

    /// `"<position> / <duration>"`, with `--:--` for whatever is unknown.
    pub fn time_text(&self) -> String {
        let position = self
            .position_label()
            .map(|label| label.to_string())
            .unwrap_or_else(|_| UNKNOWN_TIME.to_string());

        let total = if self.show_remaining {
            self.remaining_label()
        } else {
            self.duration_label()
        };

        match total {
            Some(total) => format!("{position} / {total}"),
            None => format!("{position} / {UNKNOWN_TIME}"),
        }
    }
}
