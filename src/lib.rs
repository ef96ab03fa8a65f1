//! mappr-config - Project settings for graph player documents
//!
//! Validates raw project documents, fills in render-setting defaults and
//! provides value-returning snapshot edits.

pub mod cli;
pub mod config;
pub mod error;

pub use config::{merge_defaults, parse_project_config, ProjectConfig, RenderSettings, Snapshot};
pub use error::{Error, ValidationError, ValidationErrors};
