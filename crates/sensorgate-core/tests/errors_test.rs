//! Tests for the sensorgate error handling system.

use std::collections::HashSet;

use sensorgate_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let index = IndexError::DuplicateKey {
        key: "foo:src/Foo.java".into(),
    };
    assert_eq!(index.error_code(), "DUPLICATE_KEY");

    let rule = RuleError::InvalidRuleKey { value: "squid".into() };
    assert!(!rule.error_code().is_empty());

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert!(!config.error_code().is_empty());

    let sensor = SensorError::failed("java-sensor", "boom");
    assert_eq!(sensor.error_code(), "SENSOR_ERROR");

    let panicked = SensorError::Panicked {
        sensor: "java-sensor".into(),
    };
    assert_eq!(panicked.error_code(), "SENSOR_ERROR");
}

#[test]
fn test_from_conversions_delegate_codes() {
    let pipeline: PipelineError = IndexError::DuplicateKey { key: "k".into() }.into();
    assert!(matches!(pipeline, PipelineError::Index(IndexError::DuplicateKey { .. })));
    assert_eq!(pipeline.error_code(), "DUPLICATE_KEY");

    let pipeline: PipelineError = SensorError::Panicked { sensor: "s".into() }.into();
    assert_eq!(pipeline.error_code(), "SENSOR_ERROR");

    let pipeline: PipelineError = RuleError::UnknownSeverity { value: "X".into() }.into();
    assert_eq!(pipeline.error_code(), "RULE_ERROR");
}

#[test]
fn test_coded_string_format() {
    let err = IndexError::DuplicateKey {
        key: "foo:src/Foo.java".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[DUPLICATE_KEY] Duplicate input file key: foo:src/Foo.java"
    );
}

#[test]
fn test_error_codes_are_distinct_per_subsystem() {
    let codes: HashSet<&str> = [
        IndexError::DuplicateKey { key: "k".into() }.error_code(),
        RuleError::InvalidRuleKey { value: "v".into() }.error_code(),
        ConfigError::FileNotFound { path: "p".into() }.error_code(),
        SensorError::failed("s", "m").error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn test_pipeline_result_collects_non_fatal_errors() {
    let mut result: PipelineResult<Vec<String>> = PipelineResult::new(vec!["ran".into()]);
    assert!(result.is_clean());

    result.add_error(SensorError::failed("cobol", "no compiler"));
    result.add_error(IndexError::DuplicateKey { key: "k".into() });

    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.data, vec!["ran".to_string()]);
}
