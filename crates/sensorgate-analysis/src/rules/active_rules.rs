//! Registry of rules enabled for the current analysis run.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use sensorgate_core::errors::RuleError;
use sensorgate_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rule_key::RuleKey;

/// Rule severity, lowest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Minor,
    #[default]
    Major,
    Critical,
    Blocker,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Blocker => "BLOCKER",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(Self::Info),
            "MINOR" => Ok(Self::Minor),
            "MAJOR" => Ok(Self::Major),
            "CRITICAL" => Ok(Self::Critical),
            "BLOCKER" => Ok(Self::Blocker),
            _ => Err(RuleError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

/// A rule enabled by the quality profile, with its activation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRule {
    pub rule_key: RuleKey,
    pub severity: Severity,
    pub language: Option<String>,
    pub internal_key: Option<String>,
    pub params: BTreeMap<String, String>,
}

impl ActiveRule {
    /// Activation with default severity and no metadata.
    pub fn new(rule_key: RuleKey) -> Self {
        Self {
            rule_key,
            severity: Severity::default(),
            language: None,
            internal_key: None,
            params: BTreeMap::new(),
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Set of active rules, indexed by repository.
///
/// A rule key appears at most once. Built during setup, then shared
/// read-only (typically behind an `Arc`) while sensors are evaluated.
#[derive(Debug, Clone, Default)]
pub struct ActiveRules {
    by_repository: FxHashMap<String, BTreeMap<String, ActiveRule>>,
    len: usize,
}

impl ActiveRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a rule with default settings. Idempotent: returns false and
    /// keeps the existing activation if the key is already active.
    pub fn activate(&mut self, key: RuleKey) -> bool {
        self.activate_rule(ActiveRule::new(key))
    }

    /// Activate a rule with explicit settings. The first activation of a key
    /// wins; later ones are ignored and return false.
    pub fn activate_rule(&mut self, rule: ActiveRule) -> bool {
        let rules = self
            .by_repository
            .entry(rule.rule_key.repository().to_string())
            .or_default();
        if rules.contains_key(rule.rule_key.rule()) {
            return false;
        }
        rules.insert(rule.rule_key.rule().to_string(), rule);
        self.len += 1;
        true
    }

    /// True iff at least one active rule belongs to one of `repositories`.
    /// An empty input yields false.
    pub fn has_any_from_repository<I, S>(&self, repositories: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        repositories.into_iter().any(|repository| {
            self.by_repository
                .get(repository.as_ref())
                .is_some_and(|rules| !rules.is_empty())
        })
    }

    pub fn find(&self, key: &RuleKey) -> Option<&ActiveRule> {
        self.by_repository
            .get(key.repository())
            .and_then(|rules| rules.get(key.rule()))
    }

    /// Active rules of one repository, sorted by rule key.
    pub fn find_by_repository(&self, repository: &str) -> Vec<&ActiveRule> {
        self.by_repository
            .get(repository)
            .map(|rules| rules.values().collect())
            .unwrap_or_default()
    }

    /// All active rules, sorted by rule key.
    pub fn find_all(&self) -> Vec<&ActiveRule> {
        let mut all: Vec<&ActiveRule> = self
            .by_repository
            .values()
            .flat_map(|rules| rules.values())
            .collect();
        all.sort_by(|a, b| a.rule_key.cmp(&b.rule_key));
        all
    }

    /// Repositories with at least one active rule, sorted.
    pub fn repositories(&self) -> Vec<&str> {
        let mut repositories: Vec<&str> = self
            .by_repository
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(repository, _)| repository.as_str())
            .collect();
        repositories.sort_unstable();
        repositories
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
