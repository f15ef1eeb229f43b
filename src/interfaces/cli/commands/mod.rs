//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod analytics;
mod config_management;
mod export;
pub(crate) mod link_management;
mod template_management;

pub use analytics::*;
pub use config_management::*;
pub use export::*;
pub use link_management::*;
pub use template_management::*;
