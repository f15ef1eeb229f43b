//! Mode routing
//!
//! The only execution mode is the command-line interface, gated behind the
//! `cli` feature so the library can be embedded without clap dispatch.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{run_cli, run_parsed};
