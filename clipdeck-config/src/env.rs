//! Environment variable names and override parsing.

use clipdeck_model::NegativePolicy;

use crate::{ConfigError, PlayerConfig, util};

pub const CONFIG_PATH: &str = "CLIPDECK_CONFIG";
pub const VOLUME: &str = "CLIPDECK_VOLUME";
pub const SEEK_STEP: &str = "CLIPDECK_SEEK_STEP";
pub const NEGATIVE_DURATIONS: &str = "CLIPDECK_NEGATIVE_DURATIONS";
pub const CONTROLS_TIMEOUT: &str = "CLIPDECK_CONTROLS_TIMEOUT";
pub const SHOW_REMAINING: &str = "CLIPDECK_SHOW_REMAINING";

/// Applies `CLIPDECK_*` overrides read through `lookup`.
///
/// Blank values are ignored; malformed values are reported instead of being
/// skipped so a typo in the environment does not go unnoticed.
pub fn apply_overrides<F>(
    config: &mut PlayerConfig,
    lookup: F,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| util::non_empty(v).is_some());

    if let Some(raw) = get(VOLUME) {
        config.volume = parse_f64(VOLUME, &raw)?;
    }

    if let Some(raw) = get(SEEK_STEP) {
        config.seek_step = parse_f64(SEEK_STEP, &raw)?;
    }

    if let Some(raw) = get(NEGATIVE_DURATIONS) {
        config.negative_durations =
            raw.parse::<NegativePolicy>().map_err(|_| {
                ConfigError::invalid(
                    NEGATIVE_DURATIONS,
                    &raw,
                    "expected `clamp` or `signed`",
                )
            })?;
    }

    if let Some(raw) = get(CONTROLS_TIMEOUT) {
        config.controls_timeout = humantime::parse_duration(raw.trim())
            .map_err(|err| {
                ConfigError::invalid(CONTROLS_TIMEOUT, &raw, err.to_string())
            })?;
    }

    if let Some(raw) = get(SHOW_REMAINING) {
        config.show_remaining = util::parse_bool(&raw).ok_or_else(|| {
            ConfigError::invalid(SHOW_REMAINING, &raw, "expected a boolean")
        })?;
    }

    Ok(())
}

/// Reads overrides from the process environment.
pub fn apply_process_overrides(
    config: &mut PlayerConfig,
) -> Result<(), ConfigError> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn parse_f64(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| ConfigError::invalid(key, raw, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_every_field() {
        let mut config = PlayerConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (VOLUME, "0.25"),
                (SEEK_STEP, "30"),
                (NEGATIVE_DURATIONS, "Signed"),
                (CONTROLS_TIMEOUT, "1500ms"),
                (SHOW_REMAINING, "yes"),
            ]),
        )
        .unwrap();

        assert_eq!(config.volume, 0.25);
        assert_eq!(config.seek_step, 30.0);
        assert_eq!(config.negative_durations, NegativePolicy::Signed);
        assert_eq!(config.controls_timeout, Duration::from_millis(1500));
        assert!(config.show_remaining);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut config = PlayerConfig::default();
        apply_overrides(&mut config, lookup(&[(VOLUME, "  ")])).unwrap();
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let mut config = PlayerConfig::default();
        let err = apply_overrides(
            &mut config,
            lookup(&[(NEGATIVE_DURATIONS, "wrap")]),
        )
        .unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, NEGATIVE_DURATIONS);
                assert_eq!(value, "wrap");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(
            apply_overrides(&mut config, lookup(&[(SHOW_REMAINING, "sure")]))
                .is_err()
        );
        assert!(
            apply_overrides(&mut config, lookup(&[(CONTROLS_TIMEOUT, "soon")]))
                .is_err()
        );
    }
}
