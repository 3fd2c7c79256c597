use hostprobe::core::config::Config;
use hostprobe::platform::RemoteSessionPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(
        config.remote_session_policy,
        RemoteSessionPolicy::AbsentIsRemote
    );
}

#[test]
fn test_config_path_is_under_hostprobe() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("hostprobe/config.json") || path.ends_with("hostprobe\\config.json"));
    }
}

#[test]
fn test_config_empty_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_unknown_fields_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "remote_session_policy": "absent-is-local", "legacy": 1 }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.remote_session_policy,
        RemoteSessionPolicy::AbsentIsLocal
    );
}

#[test]
fn test_config_missing_field_uses_default_policy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(
        Config::load_from(&path).unwrap().remote_session_policy,
        RemoteSessionPolicy::AbsentIsRemote
    );
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hostprobe").join("config.json");

    let config = Config {
        remote_session_policy: RemoteSessionPolicy::AbsentIsLocal,
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
