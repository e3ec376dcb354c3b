//! Language tag interning.
//!
//! The file index keys its buckets by [`LanguageId`] rather than by owned
//! strings. Interning happens on `add` (single writer); queries only look up
//! existing tags, so an unknown language never allocates.

use lasso::Rodeo;

use super::identifiers::LanguageId;

/// Interner for language tags such as `java` or `php`.
///
/// Tags are interned verbatim: language keys are case-sensitive.
#[derive(Default)]
pub struct LanguageInterner {
    inner: Rodeo,
}

impl LanguageInterner {
    /// Create a new, empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a language tag, returning its stable id.
    pub fn intern(&mut self, language: &str) -> LanguageId {
        LanguageId::new(self.inner.get_or_intern(language))
    }

    /// Look up a previously interned tag without inserting.
    pub fn get(&self, language: &str) -> Option<LanguageId> {
        self.inner.get(language).map(LanguageId::new)
    }

    /// Resolve an id back to its tag.
    pub fn resolve(&self, id: LanguageId) -> &str {
        self.inner.resolve(&id.inner())
    }

    /// Number of distinct tags interned so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for LanguageInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageInterner")
            .field("len", &self.inner.len())
            .finish()
    }
}
