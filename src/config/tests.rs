use crate::config::Config;
use std::{fs, time::Duration};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("pianoroll-gallery-{}-{name}", std::process::id()))
        .join("config.json")
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = serde_json::from_str(r#"{"card_count": 4}"#).unwrap();
    assert_eq!(config.card_count, 4);
    assert_eq!(config.notes_per_card, 60);
    assert_eq!(config.endpoint, "https://pianoroll.ai/random_notes");
}

#[test]
fn test_save_and_load() {
    let path = temp_path("roundtrip");
    let config = Config {
        endpoint: "http://localhost:8080/notes".into(),
        timeout_secs: 3,
        card_count: 5,
        notes_per_card: 12,
    };
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = temp_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();
    assert!(Config::load_from(&path).is_err());
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_load_request_timeout() {
    let config = Config {
        timeout_secs: 0,
        ..Config::default()
    };
    // A zero timeout would fail every request
    assert_eq!(config.load_request().timeout, Duration::from_secs(1));
    assert_eq!(Config::default().load_request().timeout, Duration::from_secs(10));
}
