//! Project file index.
//!
//! Holds every input file of the analysis unit and maintains, as files are
//! added, per-language and per-type counters so that "does any file match
//! languages L and types T?" is answered without rescanning the files.
//!
//! Single writer, many readers: `add` takes the write lock, queries take the
//! read lock. A query sees exactly the files whose `add` returned before it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sensorgate_core::errors::IndexError;
use sensorgate_core::types::{FxHashMap, LanguageId, LanguageInterner};
use serde::Serialize;

use super::input_file::{InputFile, InputFileType};

/// File counts per [`InputFileType`] slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TypeCounts([usize; InputFileType::COUNT]);

impl TypeCounts {
    fn increment(&mut self, file_type: InputFileType) {
        self.0[file_type.index()] += 1;
    }

    fn get(&self, file_type: InputFileType) -> usize {
        self.0[file_type.index()]
    }

    fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// True if any counted file has a type in `types`; an empty set is
    /// unrestricted and only requires at least one file.
    fn any_of(&self, types: &BTreeSet<InputFileType>) -> bool {
        if types.is_empty() {
            self.total() > 0
        } else {
            types.iter().any(|t| self.get(*t) > 0)
        }
    }
}

#[derive(Debug, Default)]
struct IndexState {
    files: FxHashMap<String, InputFile>,
    languages: LanguageInterner,
    /// language → type → count. Files without a language are absent here.
    by_language: FxHashMap<LanguageId, TypeCounts>,
    /// type → count over every file, language or not.
    by_type: TypeCounts,
}

/// Snapshot of the index counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub total_files: usize,
    pub main_files: usize,
    pub test_files: usize,
    /// Files with no language tag.
    pub unknown_language_files: usize,
    pub files_per_language: BTreeMap<String, usize>,
}

/// Index over the input files of one analysis unit.
#[derive(Debug, Default)]
pub struct ProjectFileIndex {
    state: RwLock<IndexState>,
}

impl ProjectFileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, updating the language/type counters.
    ///
    /// Fails with [`IndexError::DuplicateKey`] if a file with the same key is
    /// already indexed; the index is left untouched in that case.
    pub fn add(&self, file: InputFile) -> Result<(), IndexError> {
        let mut state = self.write();
        if state.files.contains_key(file.key()) {
            return Err(IndexError::DuplicateKey {
                key: file.key().to_string(),
            });
        }

        let file_type = file.file_type();
        if let Some(language) = file.language() {
            let id = state.languages.intern(language);
            state.by_language.entry(id).or_default().increment(file_type);
        }
        state.by_type.increment(file_type);
        state.files.insert(file.key().to_string(), file);
        Ok(())
    }

    /// Returns true iff one indexed file has a language in `languages` AND a
    /// type in `types`. An empty set leaves its dimension unrestricted.
    ///
    /// Files with no language never satisfy a non-empty language set.
    pub fn has_match(
        &self,
        languages: &BTreeSet<String>,
        types: &BTreeSet<InputFileType>,
    ) -> bool {
        let state = self.read();
        if languages.is_empty() {
            return state.by_type.any_of(types);
        }
        languages
            .iter()
            .filter_map(|language| state.languages.get(language))
            .filter_map(|id| state.by_language.get(&id))
            .any(|counts| counts.any_of(types))
    }

    /// Files matching the same predicate as [`has_match`](Self::has_match),
    /// sorted by key. Linear in the number of indexed files.
    pub fn files_matching(
        &self,
        languages: &BTreeSet<String>,
        types: &BTreeSet<InputFileType>,
    ) -> Vec<InputFile> {
        let state = self.read();
        let mut files: Vec<InputFile> = state
            .files
            .values()
            .filter(|f| {
                languages.is_empty() || f.language().is_some_and(|l| languages.contains(l))
            })
            .filter(|f| types.is_empty() || types.contains(&f.file_type()))
            .cloned()
            .collect();
        files.sort_by(|a, b| a.key().cmp(b.key()));
        files
    }

    pub fn get(&self, key: &str) -> Option<InputFile> {
        self.read().files.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().files.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct languages of the indexed files, sorted.
    pub fn languages(&self) -> BTreeSet<String> {
        let state = self.read();
        state
            .by_language
            .keys()
            .map(|id| state.languages.resolve(*id).to_string())
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        let state = self.read();
        let files_per_language: BTreeMap<String, usize> = state
            .by_language
            .iter()
            .map(|(id, counts)| (state.languages.resolve(*id).to_string(), counts.total()))
            .collect();
        let with_language: usize = files_per_language.values().sum();
        IndexStats {
            total_files: state.by_type.total(),
            main_files: state.by_type.get(InputFileType::Main),
            test_files: state.by_type.get(InputFileType::Test),
            unknown_language_files: state.by_type.total() - with_language,
            files_per_language,
        }
    }

    // The state is only mutated after all checks pass, so a poisoned lock
    // still guards consistent counters.
    fn read(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
