//! # huefind
//!
//! Color-histogram image similarity search. Indexes a corpus of scene
//! photos into per-channel histograms and ranks it against a query image
//! by Pearson correlation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
