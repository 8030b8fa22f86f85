// Corpus handling: turning raw document text into word-frequency vectors.

pub mod frequency;
pub mod loader;
pub mod tokenize;

pub use frequency::{aggregate, Document, DocumentStats, FrequencyMap};
pub use loader::{DocumentError, DocumentLoader, FileLoader};
