//! Fluent construction of [`ActiveRules`], as done by the quality-profile
//! resolver.
//!
//! ```
//! use sensorgate_analysis::rules::{ActiveRulesBuilder, RuleKey, Severity};
//!
//! let rules = ActiveRulesBuilder::new()
//!     .create(RuleKey::of("repo1", "foo"))
//!     .activate()
//!     .create(RuleKey::of("squid", "rule"))
//!     .set_severity(Severity::Blocker)
//!     .activate()
//!     .build();
//! assert!(rules.has_any_from_repository(["squid"]));
//! ```

use sensorgate_core::config::ActiveRuleConfig;
use sensorgate_core::errors::RuleError;

use super::active_rules::{ActiveRule, ActiveRules, Severity};
use super::rule_key::RuleKey;

/// Accumulates rule activations, then freezes them into [`ActiveRules`].
#[derive(Debug, Default)]
pub struct ActiveRulesBuilder {
    rules: ActiveRules,
}

impl ActiveRulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation for `key`. Nothing is recorded until
    /// [`NewActiveRule::activate`] is called.
    pub fn create(self, key: RuleKey) -> NewActiveRule {
        NewActiveRule {
            builder: self,
            rule: ActiveRule::new(key),
        }
    }

    /// Builder pre-populated from `[[active_rules]]` configuration entries.
    pub fn from_config(entries: &[ActiveRuleConfig]) -> Result<Self, RuleError> {
        let mut builder = Self::new();
        for entry in entries {
            let severity: Severity = entry.effective_severity().parse()?;
            let mut rule = ActiveRule::new(RuleKey::of(entry.repository.trim(), entry.rule.trim()));
            rule.severity = severity;
            rule.language = entry.language.clone();
            rule.internal_key = entry.internal_key.clone();
            rule.params = entry.params.clone();
            builder.rules.activate_rule(rule);
        }
        Ok(builder)
    }

    pub fn build(self) -> ActiveRules {
        self.rules
    }
}

/// A pending activation; finish it with [`activate`](Self::activate).
#[derive(Debug)]
#[must_use = "a rule is only recorded once `activate` is called"]
pub struct NewActiveRule {
    builder: ActiveRulesBuilder,
    rule: ActiveRule,
}

impl NewActiveRule {
    pub fn set_severity(mut self, severity: Severity) -> Self {
        self.rule.severity = severity;
        self
    }

    pub fn set_language(mut self, language: impl Into<String>) -> Self {
        self.rule.language = Some(language.into());
        self
    }

    pub fn set_internal_key(mut self, internal_key: impl Into<String>) -> Self {
        self.rule.internal_key = Some(internal_key.into());
        self
    }

    pub fn set_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rule.params.insert(key.into(), value.into());
        self
    }

    /// Record the activation and return to the builder.
    pub fn activate(self) -> ActiveRulesBuilder {
        let mut builder = self.builder;
        builder.rules.activate_rule(self.rule);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_activation() {
        let rules = ActiveRulesBuilder::new()
            .create(RuleKey::of("repo1", "foo"))
            .set_language("java")
            .set_internal_key("Foo")
            .set_param("max", "10")
            .activate()
            .build();

        let rule = rules.find(&RuleKey::of("repo1", "foo")).unwrap();
        assert_eq!(rule.language.as_deref(), Some("java"));
        assert_eq!(rule.internal_key.as_deref(), Some("Foo"));
        assert_eq!(rule.param("max"), Some("10"));
        assert_eq!(rule.severity, Severity::Major);
    }

    #[test]
    fn pending_activation_is_not_recorded() {
        let pending = ActiveRulesBuilder::new()
            .create(RuleKey::of("repo1", "foo"))
            .activate()
            .create(RuleKey::of("squid", "rule"));
        let rules = pending.builder.build();
        assert!(rules.has_any_from_repository(["repo1"]));
        assert!(!rules.has_any_from_repository(["squid"]));
    }

    #[test]
    fn from_config_parses_severity() {
        let entries = vec![
            ActiveRuleConfig {
                repository: "squid".into(),
                rule: "S1135".into(),
                severity: Some("minor".into()),
                ..Default::default()
            },
            ActiveRuleConfig {
                repository: "squid".into(),
                rule: "S1135".into(),
                severity: Some("BLOCKER".into()),
                ..Default::default()
            },
        ];
        let rules = ActiveRulesBuilder::from_config(&entries).unwrap().build();
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules.find(&RuleKey::of("squid", "S1135")).unwrap().severity,
            Severity::Minor
        );
    }

    #[test]
    fn from_config_rejects_unknown_severity() {
        let entries = vec![ActiveRuleConfig {
            repository: "squid".into(),
            rule: "S1135".into(),
            severity: Some("urgent".into()),
            ..Default::default()
        }];
        assert!(matches!(
            ActiveRulesBuilder::from_config(&entries),
            Err(RuleError::UnknownSeverity { .. })
        ));
    }
}
