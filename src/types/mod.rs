//! Core types for meteobot.

pub mod report;

pub use report::*;
