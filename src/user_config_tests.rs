use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_user_config_default() {
    let cfg = UserConfig::default();
    assert_eq!(cfg.store.orientation, Orientation::TagToFile);
    assert_eq!(cfg.store.database, PathBuf::from("tags.txt"));
    assert_eq!(cfg.store.format, None);
    assert!(!cfg.store.assert_exists);
    assert_eq!(cfg.logging.level, "warn");
    assert_eq!(cfg.logging.rotation, "never");
}

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_store_section() {
    let toml_str = "[store]\norientation = \"file-to-tag\"\ndatabase = \"~/tags.json\"\nformat = \"yml\"\nassert_exists = true\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse [store] section");
    assert_eq!(cfg.store.orientation, Orientation::FileToTag);
    assert_eq!(cfg.store.database, PathBuf::from("~/tags.json"));
    assert_eq!(cfg.store.format, Some(Format::Yaml));
    assert!(cfg.store.assert_exists);
    // Missing [logging] falls back to the serde default
    assert_eq!(cfg.logging, LoggingConfig::default());
}

#[test]
fn test_store_section_rejects_unknown_fields() {
    let result: Result<UserConfig, _> = toml::from_str("[store]\nmapping = \"x\"\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_orientation_is_an_error() {
    let result: Result<UserConfig, _> = toml::from_str("[store]\norientation = \"sideways\"\n");
    assert!(result.is_err());
}

#[test]
fn test_logging_section() {
    let toml_str = "[logging]\nlevel = \"debug\"\njson = true\nrotation = \"daily\"\ndir = \"/tmp/taggart-logs\"\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse [logging] section");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.rotation, "daily");
    assert_eq!(cfg.logging.dir, Some(PathBuf::from("/tmp/taggart-logs")));
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig::default();
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_user_config_path_ends_with_config_toml() {
    if let Some(path) = user_config_path() {
        assert!(path.ends_with(".taggart/config.toml"));
    }
}

#[test]
fn test_load_from_absent_file_gives_defaults() {
    let dir = tempdir().expect("tempdir");
    let cfg = load_user_config_from(&dir.path().join("config.toml")).expect("defaults");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# taggart user config\n\n[store]\norientation = \"file-to-tag\"\n")
        .expect("write config");

    let cfg = load_user_config_from(&config_path).expect("load config");
    assert_eq!(cfg.store.orientation, Orientation::FileToTag);
}

#[test]
fn test_load_from_invalid_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[store\n").expect("write config");

    let err = load_user_config_from(&config_path).unwrap_err();
    assert!(matches!(err, UserConfigError::Toml(_)));
}
