//! Integration tests for settings file loading and binding

use overrule::config::ConfigLoader;
use overrule::error::BindError;
use std::sync::Mutex;
use tempfile::TempDir;

// Mutex to serialize OVERRULE_ENV access in parallel test execution
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_supplied_widths_replace_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "image_processing": {
        "resize_widths": [50, 75]
    }
}
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.image_processing.resize_widths.as_slice(), &[50, 75]);
    assert!(config.image_processing.resize_widths.is_overridden());
}

#[test]
fn test_absent_section_keeps_compiled_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("appsettings.json"), "{}").unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(
        config.image_processing.resize_widths.as_slice(),
        &[100, 200, 400, 800]
    );
    assert!(!config.image_processing.resize_widths.is_overridden());
}

#[test]
fn test_explicit_empty_array_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "image_processing": {
        "resize_widths": []
    }
}
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(
        config.image_processing.resize_widths.as_slice(),
        &[100, 200, 400, 800]
    );
    assert!(!config.image_processing.resize_widths.is_overridden());
}

#[test]
fn test_missing_base_settings_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = ConfigLoader::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, BindError::SettingsNotFound(_)));
}

#[test]
fn test_load_from_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("custom.json");
    std::fs::write(
        &settings_file,
        r#"
{
    "image_processing": {
        "resize_widths": [320]
    }
}
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&settings_file).unwrap();
    assert_eq!(config.image_processing.resize_widths.as_slice(), &[320]);
}

#[test]
fn test_load_from_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    let err = ConfigLoader::load_from_file(&missing).unwrap_err();
    assert!(matches!(err, BindError::SettingsNotFound(_)));
}

#[test]
fn test_undecodable_width_reports_field() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "image_processing": {
        "resize_widths": [50, "wide"]
    }
}
"#,
    )
    .unwrap();

    let err = ConfigLoader::load(temp_dir.path()).unwrap_err();
    match err {
        BindError::InvalidValue { field, .. } => {
            assert_eq!(field, "image_processing.resize_widths");
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_logging_section_is_bound() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "logging": {
        "level": "debug",
        "format": "json"
    }
}
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_overlay_takes_precedence() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "image_processing": {
        "resize_widths": [10]
    }
}
"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.staging.json"),
        r#"
{
    "image_processing": {
        "resize_widths": [50, 75]
    }
}
"#,
    )
    .unwrap();

    let original_env = std::env::var("OVERRULE_ENV").ok();
    std::env::set_var("OVERRULE_ENV", "staging");

    let result = ConfigLoader::load(temp_dir.path());

    if let Some(env) = original_env {
        std::env::set_var("OVERRULE_ENV", env);
    } else {
        std::env::remove_var("OVERRULE_ENV");
    }

    let config = result.unwrap();
    assert_eq!(config.image_processing.resize_widths.as_slice(), &[50, 75]);
}

#[test]
fn test_env_overlay_missing_falls_back_to_base() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"
{
    "image_processing": {
        "resize_widths": [10]
    }
}
"#,
    )
    .unwrap();

    let original_env = std::env::var("OVERRULE_ENV").ok();
    std::env::set_var("OVERRULE_ENV", "staging");

    let result = ConfigLoader::load(temp_dir.path());

    if let Some(env) = original_env {
        std::env::set_var("OVERRULE_ENV", env);
    } else {
        std::env::remove_var("OVERRULE_ENV");
    }

    let config = result.unwrap();
    assert_eq!(config.image_processing.resize_widths.as_slice(), &[10]);
}
