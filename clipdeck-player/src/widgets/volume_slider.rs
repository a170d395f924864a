use clipdeck_config::PlayerConfig;

use crate::{PlayerError, Result};

// Drops float residue left by stepping (0.8999999999999999 -> 0.9)
const SNAP_SCALE: f64 = 1e9;

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSlider {
    volume: f64,
    muted: bool,
    step: f64,
}

impl Default for VolumeSlider {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl VolumeSlider {
    /// Expects a validated config; out-of-range volumes are clamped.
    pub fn from_config(config: &PlayerConfig) -> Self {
        let step = if config.volume_step > 0.0 && config.volume_step <= 1.0 {
            config.volume_step
        } else {
            0.01
        };
        let mut slider = Self {
            volume: 1.0,
            muted: false,
            step,
        };
        if slider.set_volume(config.volume).is_err() {
            log::warn!("ignoring invalid configured volume {}", config.volume);
        }
        slider
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Volume actually sent to the audio sink.
    pub fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Clamps to `0.0..=1.0` and snaps to the slider step. Any audible
    /// volume unmutes.
    pub fn set_volume(&mut self, volume: f64) -> Result<f64> {
        if !volume.is_finite() {
            return Err(PlayerError::InvalidVolume(volume));
        }

        let clamped = volume.clamp(0.0, 1.0);
        let on_grid =
            ((clamped / self.step).round() * self.step).clamp(0.0, 1.0);
        // Full volume stays reachable when the step does not divide 1.0
        let snapped = if 1.0 - clamped < (clamped - on_grid).abs() {
            1.0
        } else {
            (on_grid * SNAP_SCALE).round() / SNAP_SCALE
        };
        self.volume = snapped;
        if snapped > 0.0 && self.muted {
            log::debug!("volume raised to {snapped:.2}, unmuting");
            self.muted = false;
        }
        Ok(snapped)
    }

    /// Adjusts by a signed amount, e.g. from a scroll wheel.
    pub fn nudge(&mut self, delta: f64) -> Result<f64> {
        self.set_volume(self.volume + delta)
    }

    /// Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }

    /// `"73%"`, or `"muted"`.
    pub fn percent_text(&self) -> String {
        if self.muted {
            "muted".to_string()
        } else {
            format!("{}%", self.percent())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn defaults_to_full_volume() {
        let slider = VolumeSlider::default();
        assert_eq!(slider.volume(), 1.0);
        assert!(!slider.is_muted());
        assert_eq!(slider.percent_text(), "100%");
    }

    #[test]
    fn clamps_and_snaps_to_step() {
        let mut slider = VolumeSlider::default();
        assert!(approx(slider.set_volume(0.734).unwrap(), 0.73));
        assert_eq!(slider.percent_text(), "73%");

        assert_eq!(slider.set_volume(1.7).unwrap(), 1.0);
        assert_eq!(slider.set_volume(-0.3).unwrap(), 0.0);
    }

    #[test]
    fn coarse_step_from_config() {
        let config = PlayerConfig {
            volume: 0.5,
            volume_step: 0.25,
            ..PlayerConfig::default()
        };
        let mut slider = VolumeSlider::from_config(&config);
        assert_eq!(slider.volume(), 0.5);
        assert_eq!(slider.set_volume(0.6).unwrap(), 0.5);
        assert_eq!(slider.nudge(0.2).unwrap(), 0.75);
    }

    #[test]
    fn non_dividing_step_still_reaches_full_volume() {
        let config = PlayerConfig {
            volume: 1.0,
            volume_step: 0.3,
            ..PlayerConfig::default()
        };
        let mut slider = VolumeSlider::from_config(&config);
        assert_eq!(slider.volume(), 1.0);
        assert_eq!(slider.percent_text(), "100%");

        assert_eq!(slider.set_volume(0.96).unwrap(), 1.0);
        assert_eq!(slider.set_volume(0.8).unwrap(), 0.9);
        assert_eq!(slider.percent_text(), "90%");
        assert_eq!(slider.set_volume(0.1).unwrap(), 0.0);
        assert_eq!(slider.nudge(0.2).unwrap(), 0.3);
    }

    #[test]
    fn rejects_nan() {
        let mut slider = VolumeSlider::default();
        assert!(matches!(
            slider.set_volume(f64::NAN),
            Err(PlayerError::InvalidVolume(v)) if v.is_nan()
        ));
        assert_eq!(slider.volume(), 1.0);
    }

    #[test]
    fn mute_silences_without_losing_level() {
        let mut slider = VolumeSlider::default();
        slider.set_volume(0.4).unwrap();

        assert!(slider.toggle_mute());
        assert_eq!(slider.effective_volume(), 0.0);
        assert_eq!(slider.percent_text(), "muted");
        assert!(approx(slider.volume(), 0.4));

        assert!(!slider.toggle_mute());
        assert!(approx(slider.effective_volume(), 0.4));
    }

    #[test]
    fn raising_volume_unmutes() {
        let mut slider = VolumeSlider::default();
        slider.toggle_mute();
        slider.set_volume(0.0).unwrap();
        assert!(slider.is_muted());

        slider.nudge(0.1).unwrap();
        assert!(!slider.is_muted());
    }
}
