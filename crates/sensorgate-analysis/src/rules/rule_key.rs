//! Rule key: a (repository, rule) pair.

use std::fmt;
use std::str::FromStr;

use sensorgate_core::constants::RULE_KEY_SEPARATOR;
use sensorgate_core::errors::RuleError;
use serde::{Deserialize, Serialize};

/// Identifies a rule definition inside a rule repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleKey {
    repository: String,
    rule: String,
}

impl RuleKey {
    pub fn of(repository: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            rule: rule.into(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.repository, RULE_KEY_SEPARATOR, self.rule)
    }
}

impl FromStr for RuleKey {
    type Err = RuleError;

    /// Parses `repository:rule`. The rule part may itself contain `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(RULE_KEY_SEPARATOR) {
            Some((repository, rule)) if !repository.is_empty() && !rule.is_empty() => {
                Ok(Self::of(repository, rule))
            }
            _ => Err(RuleError::InvalidRuleKey {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let key = RuleKey::of("squid", "S1135");
        assert_eq!(key.to_string(), "squid:S1135");
        assert_eq!("squid:S1135".parse::<RuleKey>().unwrap(), key);
    }

    #[test]
    fn rule_part_may_contain_separator() {
        let key: RuleKey = "common-java:Insufficient:Coverage".parse().unwrap();
        assert_eq!(key.repository(), "common-java");
        assert_eq!(key.rule(), "Insufficient:Coverage");
    }

    #[test]
    fn malformed_keys_rejected() {
        for value in ["squid", ":S1135", "squid:", ""] {
            assert!(
                matches!(value.parse::<RuleKey>(), Err(RuleError::InvalidRuleKey { .. })),
                "{value:?} should be rejected"
            );
        }
    }
}
