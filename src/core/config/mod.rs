//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - User configuration files
//! - Settings resolved from CLI arguments and the config file

pub mod settings;
pub mod user_config;

pub use settings::{
    ConvertSettings, PackSettings, DEFAULT_HEADER_FILENAME, DEFAULT_OUTPUT_FILENAME,
    DEFAULT_TEXTURE_FORMAT,
};
pub use user_config::ConfigFile;
