//! Active rules of the current analysis run, grouped by rule repository.

pub mod active_rules;
pub mod builder;
pub mod rule_key;

pub use active_rules::{ActiveRule, ActiveRules, Severity};
pub use builder::{ActiveRulesBuilder, NewActiveRule};
pub use rule_key::RuleKey;
