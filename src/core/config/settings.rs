//! Resolved conversion settings
//!
//! [`ConvertSettings`] is built once from the CLI arguments and the user
//! config file and then passed explicitly to each stage of a run.

use std::path::{Path, PathBuf};

use super::user_config::ConfigFile;
use crate::core::cli::CliArgs;
use crate::document::Texture;
use crate::transcode::{CharacterOrder, MissingGlyphs, TranscodeOptions};

pub const DEFAULT_HEADER_FILENAME: &str = "header.json";
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.json";
pub const DEFAULT_TEXTURE_FORMAT: i32 = 0;

/// Where and how to run xnbcli after converting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSettings {
    pub xnbcli: PathBuf,
    /// Directory xnbcli packs: the one holding the output document
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub working_dir: PathBuf,
    /// Explicit source font; discovered in `working_dir` when `None`
    pub font_path: Option<PathBuf>,
    pub header_path: PathBuf,
    pub output_path: PathBuf,
    pub texture_format: i32,
    pub transcode: TranscodeOptions,
    /// `None` when packing is disabled or no xnbcli is configured
    pub pack: Option<PackSettings>,
}

impl ConvertSettings {
    /// Combine CLI arguments with the user config file.
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/spritefont-bridge/settings.json)
    /// 3. Built-in default
    pub fn resolve(cli: &CliArgs, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        let working_dir = cli
            .working_dir
            .clone()
            .or(config.working_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let header_path = cli.header.clone().unwrap_or_else(|| {
            working_dir.join(
                config
                    .header_filename
                    .as_deref()
                    .unwrap_or(DEFAULT_HEADER_FILENAME),
            )
        });

        let output_path = cli.output.clone().unwrap_or_else(|| {
            working_dir.join(
                config
                    .output_filename
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTPUT_FILENAME),
            )
        });

        let missing = if cli.strict {
            MissingGlyphs::Error
        } else {
            config.missing_glyphs.unwrap_or_default()
        };

        let transcode = TranscodeOptions {
            order: cli
                .order
                .map(CharacterOrder::from)
                .or(config.character_order)
                .unwrap_or_default(),
            missing,
        };

        let pack = if cli.no_pack {
            None
        } else {
            cli.xnbcli
                .clone()
                .or(config.xnbcli_path)
                .map(|xnbcli| PackSettings {
                    xnbcli,
                    input_dir: output_dir_of(&output_path, &working_dir),
                    output_dir: cli
                        .pack_dir
                        .clone()
                        .or(config.pack_output_dir)
                        .unwrap_or_else(|| working_dir.clone()),
                })
        };

        Self {
            font_path: cli.font.clone(),
            header_path,
            output_path,
            texture_format: cli
                .texture_format
                .or(config.texture_format)
                .unwrap_or(DEFAULT_TEXTURE_FORMAT),
            transcode,
            pack,
            working_dir,
        }
    }

    /// Output file name without its extension
    pub fn output_stem(&self) -> String {
        output_stem(&self.output_path)
    }

    /// The `texture` entry the output document will carry
    pub fn texture(&self) -> Texture {
        Texture::for_output(self.texture_format, &self.output_stem())
    }
}

/// Directory containing `output`; a bare file name lives in `working_dir`
fn output_dir_of(output: &Path, working_dir: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => working_dir.to_path_buf(),
    }
}

/// File name of `path` without its extension, or `output` if it has none
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
