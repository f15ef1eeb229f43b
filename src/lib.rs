//! utm-command - A local campaign URL manager
//!
//! This library builds UTM-tagged campaign URLs, keeps a newest-first history
//! of created links and reusable parameter templates in a local key-value
//! store, and derives click statistics and CSV exports from that history.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **clipboard**: System clipboard support for `--copy`
//! - **full**: All features enabled
//!
//! # Architecture
//! - `utm`: UTM parameter model and URL composition
//! - `storage`: Record models and key-value persistence backends
//! - `analytics`: Summary statistics and grouped aggregations
//! - `services`: The workspace that owns links and templates
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `runtime`: Application startup and execution modes
//! - `system`: Logging and clipboard access

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
pub mod utm;
