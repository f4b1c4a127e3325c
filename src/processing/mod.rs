//! Feature extraction and ranking

pub mod histogram;
pub mod image;
pub mod query;
pub mod rank;

pub use histogram::{extract, extract_labeled};
pub use query::{query, query_as};
pub use rank::{rank, RankedResult};
