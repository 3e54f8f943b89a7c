use std::fs;
use std::path::PathBuf;

use cognitoctl_core::config::{Config, Profile};
use tempfile::TempDir;

/// Returns true if running as root (euid == 0). Used to skip permission tests.
#[cfg(unix)]
fn is_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim() == "0")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// 1. Missing config directory / nonexistent path
// ---------------------------------------------------------------------------

#[test]
fn load_from_nonexistent_path_returns_default_config() {
    let path = PathBuf::from("/tmp/cognitoctl-test-nonexistent/does/not/exist/config.toml");
    assert!(!path.exists());

    let config = Config::load_from_path(&path).expect("should not error on missing path");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

// ---------------------------------------------------------------------------
// 2. Empty config file
// ---------------------------------------------------------------------------

#[test]
fn load_empty_config_file_returns_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config = Config::load_from_path(&config_path).expect("empty file should parse as default");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

// ---------------------------------------------------------------------------
// 3. Corrupt / invalid TOML
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_toml_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[[broken").unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("Parse"),
        "error should mention parsing: {msg}"
    );
}

// ---------------------------------------------------------------------------
// 4. Wrongly typed profile field
// ---------------------------------------------------------------------------

#[test]
fn load_profile_with_wrong_field_type_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
[profiles.broken]
region = 42
"#;
    fs::write(&config_path, content).unwrap();

    assert!(Config::load_from_path(&config_path).is_err());
}

// ---------------------------------------------------------------------------
// 5. Config with unknown / extra fields
// ---------------------------------------------------------------------------

#[test]
fn load_config_with_unknown_fields_ignores_them() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
unknown_top_level_key = "hello"

[profiles.local]
region = "us-east-1"
endpoint_url = "http://localhost:9229"
totally_unknown_field = true
"#;
    fs::write(&config_path, content).unwrap();

    let config =
        Config::load_from_path(&config_path).expect("unknown fields should be silently ignored");

    let profile = &config.profiles["local"];
    assert_eq!(profile.endpoint_url.as_deref(), Some("http://localhost:9229"));
}

// ---------------------------------------------------------------------------
// 6. Save then load
// ---------------------------------------------------------------------------

#[test]
fn save_creates_parent_directories_and_reloads() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("cognitoctl").join("config.toml");

    let mut config = Config::default();
    config.set_profile(
        "prod".to_string(),
        Profile {
            region: Some("eu-west-1".to_string()),
            aws_profile: Some("admin".to_string()),
            ..Default::default()
        },
    );
    config.default_profile = Some("prod".to_string());
    config.save_to_path(&config_path).unwrap();

    let loaded = Config::load_from_path(&config_path).unwrap();
    assert_eq!(loaded, config);
}

// ---------------------------------------------------------------------------
// 7. Environment references survive a save
// ---------------------------------------------------------------------------

#[test]
#[serial_test::serial]
fn save_keeps_env_var_references() {
    unsafe {
        std::env::set_var("CFG_EDGE_SECRET_KEY", "topsecret");
        std::env::set_var("CFG_EDGE_ACCESS_KEY", "AKIAEDGE");
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let content = r#"
default_profile = "ci"

[profiles.ci]
region = "us-east-1"
access_key_id = "${CFG_EDGE_ACCESS_KEY}"
secret_access_key = "${CFG_EDGE_SECRET_KEY}"
"#;
    fs::write(&config_path, content).unwrap();

    let mut config = Config::load_from_path(&config_path).unwrap();
    let settings = config.profiles["ci"].connection_settings();
    assert_eq!(settings.access_key_id.as_deref(), Some("AKIAEDGE"));
    assert_eq!(settings.secret_access_key.as_deref(), Some("topsecret"));

    config.set_profile(
        "dev".to_string(),
        Profile {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        },
    );
    config.save_to_path(&config_path).unwrap();

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("${CFG_EDGE_SECRET_KEY}"));
    assert!(saved.contains("${CFG_EDGE_ACCESS_KEY}"));
    assert!(!saved.contains("topsecret"));
    assert!(!saved.contains("AKIAEDGE"));

    unsafe {
        std::env::remove_var("CFG_EDGE_SECRET_KEY");
        std::env::remove_var("CFG_EDGE_ACCESS_KEY");
    }
}

// ---------------------------------------------------------------------------
// 8. Permission errors (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn load_unreadable_file_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# valid toml").unwrap();

    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o000)).unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("load") || msg.contains("Load") || msg.contains("Permission"),
        "error should reference loading or permissions: {msg}"
    );

    // Restore permissions so TempDir cleanup can remove the file
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn save_to_readonly_directory_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let readonly_dir = dir.path().join("readonly");
    fs::create_dir(&readonly_dir).unwrap();
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o444)).unwrap();

    let config_path = readonly_dir.join("config.toml");
    let err = Config::default().save_to_path(&config_path).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("save") || msg.contains("Save") || msg.contains("Permission"),
        "error should reference saving or permissions: {msg}"
    );

    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o755)).unwrap();
}
