//! Error scenario and edge case tests
//!
//! Run with: cargo test --test error_scenarios_tests
//! Covers:
//! - Error formatting
//! - Parse errors from each file format

use mappr_config::config::loader::{self, FileFormat};
use mappr_config::error::{Error, ValidationError, ValidationErrors};

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_validation_error_messages_carry_paths() {
    let cases = vec![
        (
            ValidationError::MissingRequiredField {
                path: "snapshots[0].snapName".to_string(),
            },
            "snapshots[0].snapName: missing required field",
        ),
        (
            ValidationError::InvalidEnumValue {
                path: "snapshots[0].layout.plotType".to_string(),
                value: "tree".to_string(),
                allowed: &["original", "scatterplot", "grid", "geo"],
            },
            "snapshots[0].layout.plotType: 'tree' is not one of [original, scatterplot, grid, geo]",
        ),
        (
            ValidationError::InvalidRange {
                path: "x".to_string(),
                value: 1.5,
                min: 0.0,
                max: 1.0,
            },
            "x: 1.5 is outside [0, 1]",
        ),
        (
            ValidationError::DuplicateSnapshotId {
                path: "snapshots[3].id".to_string(),
                id: "a".to_string(),
                first: 1,
                second: 3,
            },
            "snapshots[3].id: snapshot id 'a' is used by snapshots[1] and snapshots[3]",
        ),
        (
            ValidationError::DanglingReference {
                path: "settings.lastViewedSnap".to_string(),
                id: "gone".to_string(),
            },
            "settings.lastViewedSnap: 'gone' does not match any snapshot id",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
        println!("✓ {}", expected);
    }
}

#[test]
fn test_validation_errors_display_lists_all() {
    let errors = ValidationErrors::from_vec(vec![
        ValidationError::UnknownField {
            path: "theme".to_string(),
        },
        ValidationError::InvalidColor {
            path: "snapshots[0].layout.settings.labelColor".to_string(),
            value: "??".to_string(),
        },
    ])
    .unwrap();

    let message = errors.to_string();
    assert!(message.starts_with("2 validation error(s)"));
    assert!(message.contains("theme: unrecognized field"));
    assert!(message.contains("labelColor: '??' is not a valid color"));

    let wrapped: Error = errors.into();
    assert!(wrapped.to_string().contains("2 validation error(s)"));
}

#[test]
fn test_empty_error_list_is_not_an_error() {
    assert!(ValidationErrors::from_vec(Vec::new()).is_none());
}

#[test]
fn test_snapshot_not_found_message() {
    let err = Error::SnapshotNotFound("snap-123456".to_string());
    assert_eq!(err.to_string(), "Snapshot 'snap-123456' not found");
}

// ============================================================================
// Format Parse Errors
// ============================================================================

#[test]
fn test_error_invalid_json() {
    let err = loader::parse_project(r#"{ "projName": "#, FileFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn test_error_invalid_yaml() {
    let err = loader::parse_project(": [invalid", FileFormat::Yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_error_invalid_toml() {
    let err = loader::parse_project("this is [ not valid toml", FileFormat::Toml).unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));
    assert!(err.to_string().contains("TOML"));
}

#[test]
fn test_error_valid_syntax_wrong_shape() {
    let err = loader::parse_project("projName = 3", FileFormat::Toml).unwrap_err();
    match err {
        Error::Validation(errors) => {
            assert!(matches!(
                errors.at("projName"),
                Some(ValidationError::MalformedInput { .. })
            ));
        }
        other => panic!("expected validation error, got {}", other),
    }
}
