//! User configuration file handling
//!
//! Manages settings from ~/.config/spritefont-bridge/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::settings::{DEFAULT_HEADER_FILENAME, DEFAULT_OUTPUT_FILENAME, DEFAULT_TEXTURE_FORMAT};
use crate::transcode::{CharacterOrder, MissingGlyphs};

pub const APP_DIR_NAME: &str = "spritefont-bridge";

/// User configuration from ~/.config/spritefont-bridge/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Directory holding the header, source font and output
    pub working_dir: Option<PathBuf>,
    /// Header document name inside the working directory
    pub header_filename: Option<String>,
    /// Output document name inside the working directory
    pub output_filename: Option<String>,
    pub texture_format: Option<i32>,
    pub character_order: Option<CharacterOrder>,
    pub missing_glyphs: Option<MissingGlyphs>,
    /// xnbcli executable; packing is skipped when unset
    pub xnbcli_path: Option<PathBuf>,
    /// Where xnbcli deploys the packed XNB file
    pub pack_output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the spritefont-bridge config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_DIR_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing or broken file yields `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings file content written by `--new-config`
    pub fn with_defaults() -> Self {
        Self {
            working_dir: None,
            header_filename: Some(DEFAULT_HEADER_FILENAME.to_string()),
            output_filename: Some(DEFAULT_OUTPUT_FILENAME.to_string()),
            texture_format: Some(DEFAULT_TEXTURE_FORMAT),
            character_order: Some(CharacterOrder::default()),
            missing_glyphs: Some(MissingGlyphs::default()),
            xnbcli_path: None,
            pack_output_dir: None,
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/spritefont-bridge directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file`
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Set 'xnbcli_path' and 'pack_output_dir' to pack after converting");
        println!("  - View logs written with --log-file in: {:?}", logs_dir);

        Ok(())
    }
}
