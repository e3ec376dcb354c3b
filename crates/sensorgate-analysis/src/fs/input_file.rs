//! Input file metadata as reported by file discovery.

use std::fmt;

use sensorgate_core::constants::FILE_KEY_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Whether a file is production code or test code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputFileType {
    #[default]
    Main,
    Test,
}

impl InputFileType {
    /// Number of file types; sizes the per-type counters of the index.
    pub const COUNT: usize = 2;

    pub fn all() -> &'static [InputFileType] {
        &[Self::Main, Self::Test]
    }

    /// Dense slot used by per-type counters.
    pub fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Test => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Test => "TEST",
        }
    }
}

impl fmt::Display for InputFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A discovered source file.
///
/// The key is `"{module}:{relative_path}"` with the path normalized, so the
/// same file reported with `\` or `/` separators collides in the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFile {
    key: String,
    module_key: String,
    relative_path: String,
    language: Option<String>,
    file_type: InputFileType,
}

impl InputFile {
    /// Create a `MAIN` file with no language.
    pub fn new(module_key: impl Into<String>, relative_path: &str) -> Self {
        let module_key = module_key.into();
        let relative_path = normalize_path(relative_path);
        let key = format!("{module_key}{FILE_KEY_SEPARATOR}{relative_path}");
        Self {
            key,
            module_key,
            relative_path,
            language: None,
            file_type: InputFileType::Main,
        }
    }

    /// Set the language tag, trimmed. A blank tag leaves the language
    /// undetermined.
    pub fn with_language(mut self, language: impl AsRef<str>) -> Self {
        let language = language.as_ref().trim();
        self.language = (!language.is_empty()).then(|| language.to_string());
        self
    }

    pub fn with_type(mut self, file_type: InputFileType) -> Self {
        self.file_type = file_type;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn module_key(&self) -> &str {
        &self.module_key
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn file_type(&self) -> InputFileType {
        self.file_type
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Convert backslashes to forward slashes, collapse `//`, and drop a
/// trailing slash (unless the path is the root "/").
fn normalize_path(path: &str) -> String {
    let mut result = path.replace('\\', "/");
    while result.contains("//") {
        result = result.replace("//", "/");
    }
    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_combines_module_and_path() {
        let file = InputFile::new("foo", "src/Foo.java");
        assert_eq!(file.key(), "foo:src/Foo.java");
        assert_eq!(file.module_key(), "foo");
        assert_eq!(file.relative_path(), "src/Foo.java");
    }

    #[test]
    fn defaults_to_main_without_language() {
        let file = InputFile::new("foo", "src/Foo.java");
        assert_eq!(file.file_type(), InputFileType::Main);
        assert_eq!(file.language(), None);
    }

    #[test]
    fn windows_separators_normalized() {
        let a = InputFile::new("foo", "src\\main\\Foo.java");
        let b = InputFile::new("foo", "src//main/Foo.java/");
        assert_eq!(a.key(), "foo:src/main/Foo.java");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn blank_language_is_undetermined() {
        let file = InputFile::new("foo", "README").with_language("  ");
        assert_eq!(file.language(), None);
    }

    #[test]
    fn language_tag_is_trimmed() {
        let file = InputFile::new("foo", "src/Foo.java").with_language(" java ");
        assert_eq!(file.language(), Some("java"));
    }

    #[test]
    fn type_slots_are_dense() {
        let slots: Vec<usize> = InputFileType::all().iter().map(|t| t.index()).collect();
        assert_eq!(slots, (0..InputFileType::COUNT).collect::<Vec<_>>());
    }
}
