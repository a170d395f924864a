pub mod progress_bar;
pub mod single_video_player;
pub mod video_container;
pub mod volume_slider;

pub use progress_bar::ProgressBar;
pub use single_video_player::SingleVideoPlayer;
pub use video_container::{ContentFit, VideoContainer};
pub use volume_slider::VolumeSlider;

/// Placeholder shown where a time cannot be rendered yet.
pub const UNKNOWN_TIME: &str = "--:--";
