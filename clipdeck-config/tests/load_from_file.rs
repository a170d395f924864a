use std::{fs, time::Duration};

use clipdeck_config::PlayerConfig;
use clipdeck_model::NegativePolicy;
use tempfile::tempdir;

#[test]
fn loads_toml_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("clipdeck.toml");
    fs::write(
        &path,
        "volume = 0.8\nseek_step = 5.0\ncontrols_timeout = \"2s 500ms\"\n",
    )
    .unwrap();

    let config = PlayerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.volume, 0.8);
    assert_eq!(config.seek_step, 5.0);
    assert_eq!(config.controls_timeout, Duration::from_millis(2500));
    assert_eq!(config.negative_durations, NegativePolicy::Clamp);
}

#[test]
fn loads_json_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("clipdeck.json");
    fs::write(
        &path,
        r#"{ "negative_durations": "signed", "show_remaining": true }"#,
    )
    .unwrap();

    let config = PlayerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.negative_durations, NegativePolicy::Signed);
    assert!(config.show_remaining);
    assert_eq!(config.volume, 1.0);
}

#[test]
fn unknown_extension_tries_both_formats() {
    let dir = tempdir().expect("tempdir");

    let toml_path = dir.path().join("player.conf");
    fs::write(&toml_path, "volume_step = 0.05").unwrap();
    let config = PlayerConfig::load_from_file(&toml_path).unwrap();
    assert_eq!(config.volume_step, 0.05);

    let json_path = dir.path().join("player.cfg");
    fs::write(&json_path, r#"{"seek_step": 20.0}"#).unwrap();
    let config = PlayerConfig::load_from_file(&json_path).unwrap();
    assert_eq!(config.seek_step, 20.0);

    let broken = dir.path().join("broken.conf");
    fs::write(&broken, "volume = [").unwrap();
    let err = PlayerConfig::load_from_file(&broken).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("toml error"), "{message}");
    assert!(message.contains("json error"), "{message}");
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = PlayerConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}
