//! Runtime module
//!
//! Application startup and execution modes.

pub mod modes;
