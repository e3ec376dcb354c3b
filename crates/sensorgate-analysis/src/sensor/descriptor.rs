//! Sensor requirement descriptor.
//!
//! Every restriction is a set; an empty set means "no restriction", which is
//! not the same as a non-empty set that matches nothing.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::fs::InputFileType;

/// Declarative preconditions of a sensor, built once at registration.
///
/// ```
/// use sensorgate_analysis::{InputFileType, SensorDescriptor};
///
/// let descriptor = SensorDescriptor::new()
///     .named("Java Squid")
///     .only_on_languages(["java", "jsp"])
///     .only_on_file_type(InputFileType::Main)
///     .create_issues_for_rule_repositories(["squid"]);
/// assert!(!descriptor.is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    name: String,
    languages: BTreeSet<String>,
    file_types: BTreeSet<InputFileType>,
    rule_repositories: BTreeSet<String>,
    required_properties: BTreeSet<String>,
    disabled_in_preview: bool,
}

impl SensorDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name used in logs and events.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Only run when at least one file has one of these languages.
    pub fn only_on_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    /// Only run when at least one file has this type. Repeatable.
    pub fn only_on_file_type(mut self, file_type: InputFileType) -> Self {
        self.file_types.insert(file_type);
        self
    }

    /// Only run when one of these repositories has an active rule.
    pub fn create_issues_for_rule_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule_repositories
            .extend(repositories.into_iter().map(Into::into));
        self
    }

    /// Only run when this configuration key is set. Repeatable; all
    /// required keys must be set.
    pub fn require_property(mut self, key: impl Into<String>) -> Self {
        self.required_properties.insert(key.into());
        self
    }

    /// Never run in preview mode.
    pub fn disabled_in_preview(mut self) -> Self {
        self.disabled_in_preview = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn file_types(&self) -> &BTreeSet<InputFileType> {
        &self.file_types
    }

    pub fn rule_repositories(&self) -> &BTreeSet<String> {
        &self.rule_repositories
    }

    pub fn required_properties(&self) -> &BTreeSet<String> {
        &self.required_properties
    }

    pub fn is_disabled_in_preview(&self) -> bool {
        self.disabled_in_preview
    }

    /// True when no gate applies: the sensor always runs.
    pub fn is_unrestricted(&self) -> bool {
        self.languages.is_empty()
            && self.file_types.is_empty()
            && self.rule_repositories.is_empty()
            && self.required_properties.is_empty()
            && !self.disabled_in_preview
    }
}
