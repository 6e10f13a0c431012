//! Core application functionality
//!
//! This module contains the application shell around the conversion:
//! - CLI handling
//! - User configuration and resolved settings
//! - Error types
//! - The one-shot runner

pub mod cli;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, OrderArg, UsageError};
pub use config::{ConfigFile, ConvertSettings};
pub use errors::{ConvertError, ConvertResult, DocumentKind};
pub use runner::{convert_files, convert_text, run_app, Conversion, ConversionReport};
