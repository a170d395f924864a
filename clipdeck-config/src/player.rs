use anyhow::{Context, anyhow};
use clipdeck_model::NegativePolicy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{ConfigError, env, util::humantime_duration};

/// Source that produced the player configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

/// Defaults shared by every widget of a player instance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume in `0.0..=1.0`.
    pub volume: f64,
    /// Granularity of the volume slider. Every volume change snaps to it.
    pub volume_step: f64,
    /// Seconds skipped by the rewind / fast-forward controls.
    pub seek_step: f64,
    /// How long the controls overlay stays up after the last interaction
    /// while a video is playing.
    #[serde(with = "humantime_duration")]
    pub controls_timeout: Duration,
    /// Rendering of durations below zero (e.g. a position reported before
    /// the stream starts).
    pub negative_durations: NegativePolicy,
    /// Show `-MM:SS` remaining instead of the total duration.
    pub show_remaining: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            volume_step: 0.01,
            seek_step: 10.0,
            controls_timeout: Duration::from_secs(3),
            negative_durations: NegativePolicy::default(),
            show_remaining: false,
        }
    }
}

impl PlayerConfig {
    /// Load player configuration.
    /// Evaluation order:
    /// 1) `$CLIPDECK_CONFIG` (TOML or JSON file),
    /// 2) `clipdeck.toml` / `clipdeck.json` in the working directory, then in
    ///    the per-user config directory,
    /// 3) defaults if none exists.
    ///
    /// `CLIPDECK_*` environment overrides (including those from a `.env`
    /// file) are applied on top and the result is validated.
    pub fn load() -> anyhow::Result<(Self, PlayerConfigSource)> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }

        let (mut config, source) = Self::load_base()?;
        env::apply_process_overrides(&mut config)
            .context("invalid CLIPDECK_* environment override")?;
        config.validate().with_context(|| {
            format!("player config from {source:?} failed validation")
        })?;

        tracing::info!(
            ?source,
            volume = config.volume,
            seek_step = config.seek_step,
            negative_durations = %config.negative_durations,
            "player configuration loaded"
        );
        Ok((config, source))
    }

    /// Like [`PlayerConfig::load`] but falls back to defaults on any error.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok((config, _)) => config,
            Err(err) => {
                tracing::warn!("using default player config: {err:#}");
                Self::default()
            }
        }
    }

    fn load_base() -> anyhow::Result<(Self, PlayerConfigSource)> {
        if let Ok(path_str) = std::env::var(env::CONFIG_PATH)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, PlayerConfigSource::EnvPath(path)));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, PlayerConfigSource::File(path)));
        }

        tracing::debug!("no player config file found, using defaults");
        Ok((Self::default(), PlayerConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read player config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid player config {}", path.display())
            }),
            Some("toml") => Self::parse_toml(&contents).with_context(|| {
                format!("invalid player config {}", path.display())
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        Self::parse_toml(contents).or_else(|toml_err| {
            Self::parse_json(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse player config {}: \
                     toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Checks ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::invalid(
                "volume",
                self.volume,
                "must be within 0.0..=1.0",
            ));
        }
        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(ConfigError::invalid(
                "volume_step",
                self.volume_step,
                "must be within (0.0, 1.0]",
            ));
        }
        if !(self.seek_step.is_finite() && self.seek_step > 0.0) {
            return Err(ConfigError::invalid(
                "seek_step",
                self.seek_step,
                "must be a positive number of seconds",
            ));
        }
        if self.controls_timeout.is_zero() {
            return Err(ConfigError::invalid(
                "controls_timeout",
                humantime::format_duration(self.controls_timeout),
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML, e.g. to seed a config file.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["clipdeck.toml", "clipdeck.json"];

        let user_dir = dirs::config_dir().map(|dir| dir.join("clipdeck"));

        CANDIDATES
            .iter()
            .map(PathBuf::from)
            .chain(user_dir.into_iter().flat_map(|dir| {
                CANDIDATES.iter().map(move |name| dir.join(name))
            }))
            .find(|path| path.exists())
    }
}
