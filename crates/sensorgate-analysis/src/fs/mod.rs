//! File system view of the analysis unit: discovered input files and the
//! index answering "is there any file with language L and type T?".

pub mod index;
pub mod input_file;

pub use index::{IndexStats, ProjectFileIndex};
pub use input_file::{InputFile, InputFileType};
