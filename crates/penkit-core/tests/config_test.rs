use std::fs;

use penkit_core::{ParameterError, PenMode, PenToolConfig, PenToolError};

#[test]
fn test_defaults() {
    let config = PenToolConfig::default();

    assert_eq!(config.mode, PenMode::Classic);
    assert_eq!(config.between_pause_ms, 450);
    assert_eq!(config.length_threshold_mm, 200.0);

    assert_eq!(config.classic.pen_down_z, 5.0);
    assert_eq!(config.classic.pen_up_z, 10.0);
    assert_eq!(config.classic.draw_height_z, 35.0);

    assert!(!config.cleaning.initial_clean);
    assert_eq!(config.cleaning.clean_every_marks, 0);
    assert_eq!(config.cleaning.tray_ys, vec![0.0, 25.0, 55.0, 65.0]);
    assert_eq!(config.cleaning.cycles_per_tray, 2);
}

#[test]
fn test_default_config_validates() {
    assert!(PenToolConfig::default().validate().is_ok());

    let cleaning = PenToolConfig {
        mode: PenMode::Cleaning,
        ..PenToolConfig::default()
    };
    assert!(cleaning.validate().is_ok());
}

#[test]
fn test_validation_rejects_non_finite_values() {
    let mut config = PenToolConfig::default();
    config.classic.draw_height_z = f64::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ParameterError::InvalidValue { .. })
    ));

    // Cleaning-mode fields are ignored while classic is active.
    let mut config = PenToolConfig::default();
    config.cleaning.travel_z = f64::NAN;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_empty_tray_list() {
    let mut config = PenToolConfig {
        mode: PenMode::Cleaning,
        ..PenToolConfig::default()
    };
    config.cleaning.tray_ys.clear();
    assert!(matches!(config.validate(), Err(ParameterError::Missing(_))));
}

#[test]
fn test_validation_rejects_zero_cycles() {
    let mut config = PenToolConfig {
        mode: PenMode::Cleaning,
        ..PenToolConfig::default()
    };
    config.cleaning.cycles_per_tray = 0;
    assert!(matches!(
        config.validate(),
        Err(ParameterError::InvalidValue { .. })
    ));
}

#[test]
fn test_validation_rejects_negative_threshold() {
    let config = PenToolConfig {
        length_threshold_mm: -1.0,
        ..PenToolConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ParameterError::InvalidValue { .. })
    ));
}

#[test]
fn test_load_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pen.json");
    fs::write(
        &path,
        r#"{
            "mode": "cleaning",
            "between_pause_ms": 300,
            "cleaning": { "clean_every_marks": 3, "tray_ys": [0.0, 40.0] }
        }"#,
    )
    .unwrap();

    let config = PenToolConfig::from_file(&path).unwrap();
    assert_eq!(config.mode, PenMode::Cleaning);
    assert_eq!(config.between_pause_ms, 300);
    assert_eq!(config.cleaning.clean_every_marks, 3);
    assert_eq!(config.cleaning.tray_ys, vec![0.0, 40.0]);
    // Unspecified fields fall back to defaults.
    assert_eq!(config.length_threshold_mm, 200.0);
    assert_eq!(config.cleaning.cycles_per_tray, 2);
}

#[test]
fn test_load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pen.toml");
    fs::write(
        &path,
        r#"
mode = "classic"
length_threshold_mm = 150.0

[classic]
press_x = 2.5
press_y = 2.5
"#,
    )
    .unwrap();

    let config = PenToolConfig::from_file(&path).unwrap();
    assert_eq!(config.mode, PenMode::Classic);
    assert_eq!(config.length_threshold_mm, 150.0);
    assert_eq!(config.classic.press_x, 2.5);
    // Unspecified classic fields fall back to defaults.
    assert_eq!(config.classic.draw_height_z, 35.0);
}

#[test]
fn test_unknown_config_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pen.yaml");
    fs::write(&path, "mode: classic").unwrap();

    let result = PenToolConfig::from_file(&path);
    assert!(matches!(result, Err(PenToolError::UnsupportedFormat(_))));
}

#[test]
fn test_mode_display() {
    assert_eq!(PenMode::Classic.to_string(), "classic");
    assert_eq!(PenMode::Cleaning.to_string(), "cleaning");
}
