//! Shared data structures and string interning for sensorgate.
//! FxHashMap, lasso-based interning, Spur-based ID types.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::FxHashMap;
pub use identifiers::LanguageId;
pub use interning::LanguageInterner;
