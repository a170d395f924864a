use std::time::Instant;

use clipdeck_config::PlayerConfig;
use url::Url;

use super::{ProgressBar, VideoContainer, VolumeSlider};
use crate::{PlayerError, Result};

const MIN_PLAYBACK_SPEED: f64 = 0.25;
const MAX_PLAYBACK_SPEED: f64 = 4.0;

/// One video source with its container, volume slider and progress bar.
///
/// The playback backend reports position and duration through
/// [`SingleVideoPlayer::on_progress`]; user intents (play, seek, volume)
/// go through the methods here and are read back by the backend.
#[derive(Debug, Clone)]
pub struct SingleVideoPlayer {
    source: Option<Url>,
    playing: bool,
    playback_speed: f64,
    seek_step: f64,

    pub container: VideoContainer,
    pub volume: VolumeSlider,
    pub progress: ProgressBar,
}

impl Default for SingleVideoPlayer {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

impl SingleVideoPlayer {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            source: None,
            playing: false,
            playback_speed: 1.0,
            seek_step: config.seek_step,
            container: VideoContainer::from_config(config),
            volume: VolumeSlider::from_config(config),
            progress: ProgressBar::from_config(config),
        }
    }

    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn playback_speed(&self) -> f64 {
        self.playback_speed
    }

    /// Replaces the current source. Playback starts paused at zero.
    pub fn load(&mut self, url: Url) {
        log::info!("loading video source {url}");
        self.progress.reset();
        self.playing = false;
        self.playback_speed = 1.0;
        self.source = Some(url);
    }

    pub fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlayerError::NoSource);
        }
        self.playing = true;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Returns whether the player is playing afterwards.
    pub fn toggle_play(&mut self) -> Result<bool> {
        if self.playing {
            self.pause();
        } else {
            self.play()?;
        }
        Ok(self.playing)
    }

    /// Pauses and goes back to the beginning of the current source.
    pub fn stop(&mut self) {
        self.pause();
        self.progress.rewind();
    }

    /// Moves to `seconds`, clamped to the known duration. Returns the
    /// position actually applied.
    pub fn seek(&mut self, seconds: f64) -> Result<f64> {
        if !seconds.is_finite() {
            return Err(PlayerError::non_finite(seconds));
        }

        let target = match self.progress.duration() {
            Some(duration) => seconds.clamp(0.0, duration),
            None => seconds.max(0.0),
        };
        log::debug!("seek to {target:.3}s (requested {seconds:.3}s)");
        self.progress.set_position(target)?;
        Ok(target)
    }

    pub fn seek_relative(&mut self, delta: f64) -> Result<f64> {
        self.seek(self.progress.position() + delta)
    }

    pub fn seek_forward(&mut self) -> Result<f64> {
        self.seek_relative(self.seek_step)
    }

    pub fn seek_backward(&mut self) -> Result<f64> {
        self.seek_relative(-self.seek_step)
    }

    /// Seeks from a press on the progress bar.
    pub fn seek_to_bar(&mut self, x: f64, width: f64) -> Result<f64> {
        self.seek(self.progress.seek_position(x, width))
    }

    pub fn set_playback_speed(&mut self, speed: f64) -> Result<()> {
        if !(MIN_PLAYBACK_SPEED..=MAX_PLAYBACK_SPEED).contains(&speed) {
            return Err(PlayerError::InvalidSpeed(speed));
        }
        self.playback_speed = speed;
        Ok(())
    }

    /// Applies a position/duration report from the playback backend.
    ///
    /// Invalid reports are dropped with a warning and the last valid values
    /// remain on screen.
    pub fn on_progress(&mut self, position: f64, duration: f64) {
        if let Err(err) = self.progress.set_duration(duration) {
            log::warn!("ignoring duration report: {err}");
        }
        if let Err(err) = self.progress.set_position(position) {
            log::warn!("ignoring position report: {err}");
        }
    }

    /// Called on every frame tick to auto-hide the controls.
    pub fn tick(&mut self, now: Instant) {
        self.container.update_controls(now, self.playing);
    }

    pub fn time_text(&self) -> String {
        self.progress.time_text()
    }
}
