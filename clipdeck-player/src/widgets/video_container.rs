use std::time::{Duration, Instant};

use clipdeck_config::PlayerConfig;

/// How the video frame is scaled inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFit {
    /// Letterboxed, whole frame visible.
    #[default]
    Contain,
    /// Fills the container, cropping the overflow.
    Cover,
    /// Stretched to the container, ignoring aspect ratio.
    Fill,
}

impl ContentFit {
    pub fn next(self) -> Self {
        match self {
            ContentFit::Contain => ContentFit::Cover,
            ContentFit::Cover => ContentFit::Fill,
            ContentFit::Fill => ContentFit::Contain,
        }
    }
}

/// Frame around the video surface: scaling, fullscreen and the controls
/// overlay that hides itself while playing.
#[derive(Debug, Clone)]
pub struct VideoContainer {
    content_fit: ContentFit,
    fullscreen: bool,
    controls_visible: bool,
    last_interaction: Option<Instant>,
    controls_timeout: Duration,
}

impl Default for VideoContainer {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl VideoContainer {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            content_fit: ContentFit::default(),
            fullscreen: false,
            controls_visible: true,
            last_interaction: None,
            controls_timeout: config.controls_timeout,
        }
    }

    pub fn content_fit(&self) -> ContentFit {
        self.content_fit
    }

    pub fn set_content_fit(&mut self, content_fit: ContentFit) {
        self.content_fit = content_fit;
    }

    pub fn cycle_content_fit(&mut self) -> ContentFit {
        self.content_fit = self.content_fit.next();
        self.content_fit
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        log::debug!("fullscreen: {}", self.fullscreen);
        self.fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Records pointer or keyboard activity over the player.
    pub fn touch(&mut self, now: Instant) {
        self.controls_visible = true;
        self.last_interaction = Some(now);
    }

    /// Hides the controls once they have been idle past the timeout. They
    /// stay up while nothing is playing.
    pub fn update_controls(&mut self, now: Instant, playing: bool) {
        if !playing {
            self.touch(now);
            return;
        }

        let idle = self
            .last_interaction
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or(Duration::MAX);

        if self.controls_visible && idle > self.controls_timeout {
            self.controls_visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fit_cycles() {
        let mut container = VideoContainer::default();
        assert_eq!(container.content_fit(), ContentFit::Contain);
        assert_eq!(container.cycle_content_fit(), ContentFit::Cover);
        assert_eq!(container.cycle_content_fit(), ContentFit::Fill);
        assert_eq!(container.cycle_content_fit(), ContentFit::Contain);
    }

    #[test]
    fn fullscreen_toggles() {
        let mut container = VideoContainer::default();
        assert!(container.toggle_fullscreen());
        assert!(container.is_fullscreen());
        assert!(!container.toggle_fullscreen());
    }

    #[test]
    fn controls_hide_after_timeout_while_playing() {
        let start = Instant::now();
        let mut container = VideoContainer::default();
        container.touch(start);

        container.update_controls(start + Duration::from_secs(2), true);
        assert!(container.controls_visible());

        container.update_controls(start + Duration::from_secs(4), true);
        assert!(!container.controls_visible());

        container.touch(start + Duration::from_secs(5));
        assert!(container.controls_visible());
    }

    #[test]
    fn controls_stay_up_while_paused() {
        let start = Instant::now();
        let mut container = VideoContainer::default();
        container.touch(start);

        container.update_controls(start + Duration::from_secs(60), false);
        assert!(container.controls_visible());
    }

    #[test]
    fn untouched_controls_hide_on_first_playing_update() {
        let mut container = VideoContainer::default();
        container.update_controls(Instant::now(), true);
        assert!(!container.controls_visible());
    }
}
