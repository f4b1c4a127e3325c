//! # Command Implementations
//!
//! Each submodule handles one CLI command (index, search, random, clean).

pub mod clean;
pub mod index;
pub mod random;
pub mod search;
