//! Corpus index storage

pub mod cache;
pub mod index;

pub use cache::CacheArtifact;
pub use index::{BuildReport, CorpusIndex, FailurePolicy, IndexBuilder, IndexEntry};
