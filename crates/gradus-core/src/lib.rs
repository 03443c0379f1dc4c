//! Gradus Core Library
//!
//! Graph loading and step-traced algorithm runs for the Gradus CLI.

pub mod algos;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
