use std::fs;

use anyhow::Result;
use itinerary_core::FragmentKind;
use itinerary_reconciler::config::Config;
use itinerary_reconciler::{ExtractorPostprocessor, ReconcilerError};
use tempfile::tempdir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("reconciler.toml");
    fs::write(
        &path,
        r#"
        [postprocessor]
        validation_enabled = true
        context_date = "2024-06-01T12:00:00Z"

        [validator]
        accepted_types = ["FlightReservation", "TrainReservation"]
        accept_only_complete = false

        [logging]
        level = "debug"
        json_file = false
        "#,
    )?;

    let config = Config::from_file(&path)?;
    config.validate()?;
    assert!(config.postprocessor.validation_enabled);
    assert_eq!(
        config.validator.accepted_kinds(),
        vec![FragmentKind::FlightReservation, FragmentKind::TrainReservation]
    );
    assert!(!config.validator.accept_only_complete);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.directory, "logs");

    let mut pp = ExtractorPostprocessor::with_config(&config.postprocessor, &config.validator)?;
    assert!(pp.result().is_empty());
    Ok(())
}

#[test]
fn test_missing_file_is_a_config_error() {
    let temp_dir = tempdir().unwrap();
    let result = Config::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ReconcilerError::Config(_))));
}

#[test]
fn test_malformed_toml_is_rejected() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("reconciler.toml");
    fs::write(&path, "[postprocessor\nvalidation_enabled = yes")?;
    assert!(matches!(Config::from_file(&path), Err(ReconcilerError::Toml(_))));
    Ok(())
}

#[test]
fn test_validate_reports_unknown_types() -> Result<()> {
    let config = Config::from_toml_str(
        r#"
        [validator]
        accepted_types = ["FlightReservation", "HovercraftReservation"]
        "#,
    )?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("HovercraftReservation"));
    Ok(())
}
