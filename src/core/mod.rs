//! Core domain types

pub mod category;
pub mod feature;

pub use category::{category_of, Category, ColorSpace};
pub use feature::{score, FeatureVector};
