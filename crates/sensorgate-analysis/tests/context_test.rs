//! Tests for building an analysis context from layered configuration.

use std::sync::Mutex;

use sensorgate_analysis::*;
use sensorgate_core::config::{ActiveRuleConfig, CliOverrides, SensorGateConfig};
use sensorgate_core::errors::{PipelineError, RuleError};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const PROJECT_CONFIG: &str = r#"
[analysis]
mode = "full"

[properties]
"sonar.foo.reportPath" = " reports/foo.xml "

[[active_rules]]
repository = "squid"
rule = "S1135"
severity = "minor"
language = "java"

[[active_rules]]
repository = "squid"
rule = "S1135"
severity = "BLOCKER"

[[active_rules]]
repository = "repo1"
rule = "foo"

[active_rules.params]
max = "10"
"#;

fn write_project(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("sensorgate.toml"), contents).unwrap();
    dir
}

#[test]
fn test_context_from_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("SENSORGATE_ANALYSIS_MODE");

    let dir = write_project(PROJECT_CONFIG);
    let context = AnalysisContext::load(dir.path(), None).unwrap();

    assert!(!context.mode.is_preview());
    assert_eq!(
        context.settings.get("sonar.foo.reportPath").as_deref(),
        Some("reports/foo.xml")
    );
    assert_eq!(context.active_rules.len(), 2);
    assert_eq!(context.active_rules.repositories(), vec!["repo1", "squid"]);

    // First activation wins.
    let s1135 = context
        .active_rules
        .find(&RuleKey::of("squid", "S1135"))
        .unwrap();
    assert_eq!(s1135.severity, Severity::Minor);
    assert_eq!(s1135.language.as_deref(), Some("java"));

    let foo = context.active_rules.find(&"repo1:foo".parse().unwrap()).unwrap();
    assert_eq!(foo.param("max"), Some("10"));
    assert!(context.fs.is_empty());
}

#[test]
fn test_env_selects_preview_mode() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::set_var("SENSORGATE_ANALYSIS_MODE", "preview");

    let dir = write_project(PROJECT_CONFIG);
    let result = AnalysisContext::load(dir.path(), None);
    std::env::remove_var("SENSORGATE_ANALYSIS_MODE");

    let context = result.unwrap();
    assert!(context.mode.is_preview());
    let optimizer = SensorOptimizer::from_context(&context);
    assert!(!optimizer.should_execute(&SensorDescriptor::new().disabled_in_preview()));
}

#[test]
fn test_cli_properties_feed_the_configuration_gate() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("SENSORGATE_ANALYSIS_MODE");

    let dir = write_project("");
    let cli = CliOverrides {
        properties: [("sonar.java.binaries".to_string(), "target".to_string())].into(),
        ..Default::default()
    };
    let context = AnalysisContext::load(dir.path(), Some(&cli)).unwrap();

    let optimizer = SensorOptimizer::from_context(&context);
    let descriptor = SensorDescriptor::new().require_property("sonar.java.binaries");
    assert!(optimizer.should_execute(&descriptor));
}

#[test]
fn test_from_config_rejects_unknown_severity() {
    let mut config = SensorGateConfig::default();
    config.active_rules.push(ActiveRuleConfig {
        repository: "squid".into(),
        rule: "S1".into(),
        severity: Some("FATAL".into()),
        ..Default::default()
    });

    let err = AnalysisContext::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Rule(RuleError::UnknownSeverity { ref value }) if value == "FATAL"
    ));
}

#[test]
fn test_invalid_project_file_is_a_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("SENSORGATE_ANALYSIS_MODE");

    let dir = write_project("[analysis]\nmode = \"fast\"\n");
    let err = AnalysisContext::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}
