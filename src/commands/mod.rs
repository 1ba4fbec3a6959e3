//! Command handlers for the chatcloud binary.

pub mod analyze;
