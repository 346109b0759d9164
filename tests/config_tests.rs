//! Integration tests for configuration management

use course_advisor::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.catalog.path.is_empty(),
        "Default catalog path should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/advisor.log"
verbose = true

[catalog]
path = "./samples/catalog/courses.csv"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/advisor.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog.path, "./samples/catalog/courses.csv");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.catalog.path, "");
    assert_eq!(config.paths.reports_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_ADVISOR/advisor.log"

[catalog]
path = "$COURSE_ADVISOR/catalog/courses.csv"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("course-advisor"));
    assert!(!config.logging.file.contains("$COURSE_ADVISOR"));
    assert!(config.catalog.path.contains("course-advisor"));
    assert!(config.catalog.path.ends_with("courses.csv"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "sometimes").is_err());

    config
        .set("catalog", "/srv/advising/courses.csv")
        .expect("Failed to set catalog");
    assert_eq!(config.get("catalog-path").unwrap(), "/srv/advising/courses.csv");

    config
        .set("reports-dir", "./out")
        .expect("Failed to set reports dir");
    assert_eq!(config.paths.reports_dir, "./out");

    assert!(config.get("metrics_dir").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("catalog", "./elsewhere.csv").expect("Failed to set catalog");
    assert_eq!(config.catalog.path, "./elsewhere.csv");

    config
        .unset("catalog", &defaults)
        .expect("Failed to unset catalog");
    assert_eq!(config.catalog.path, defaults.catalog.path);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("catalog", "./courses.csv").expect("Failed to set catalog");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded, config);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog_path: Some("./catalog.csv".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog.path, "./catalog.csv");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.catalog, before.catalog);
    assert_eq!(config.paths, before.paths);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[catalog]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("reports_dir"));
    assert!(!display_str.contains("[database]"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.catalog.path, defaults.catalog.path);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[catalog]
path = "/my/catalog.csv"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.catalog.path, "/my/catalog.csv");
}

#[test]
fn test_get_advisor_dir() {
    let dir = Config::get_advisor_dir();

    assert!(dir.to_string_lossy().contains("course-advisor"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
