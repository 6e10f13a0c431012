//! Command line interface for spritefont-bridge
//!
//! Every option here overrides the matching entry of the user config file
//! (~/.config/spritefont-bridge/settings.json), which in turn overrides the
//! built-in defaults.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

use crate::transcode::CharacterOrder;

/// Invalid value or combination of command line arguments
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// `--order` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Glyph keys sorted by code point
    Sorted,
    /// The font's own Characters list, verbatim
    Listed,
}

impl From<OrderArg> for CharacterOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Sorted => CharacterOrder::Sorted,
            OrderArg::Listed => CharacterOrder::Listed,
        }
    }
}

/// spritefont-bridge CLI arguments
///
/// Examples:
///   spritefont-bridge                              # Convert the font in the current directory
///   spritefont-bridge --dir ~/Fonts/SmallFont      # Convert the font in another directory
///   spritefont-bridge --font SmallFont.json        # Skip discovery and use this font
///   spritefont-bridge --output SmallFont.json      # Expect SmallFont.png next to the output
///   spritefont-bridge --order listed --strict      # Legacy export with a Characters list
///   spritefont-bridge --xnbcli ~/xnbcli/xnbcli --pack-dir ~/Mods/MyMod/assets
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "spritefont-bridge",
    version,
    about = "Convert StardewXNBHack sprite fonts into xnbcli-packable documents",
    long_about = "spritefont-bridge reads a sprite font definition exported by StardewXNBHack (MonoGame layout), merges it into an xnbcli header document and writes a SpriteFont document that xnbcli can pack into an XNB file."
)]
pub struct CliArgs {
    /// Directory holding the header, the source font and the output
    #[clap(
        long = "dir",
        short = 'd',
        help = "Working directory (defaults to the current directory)",
        long_help = "Directory holding the header document, the source font and the output. The source font is the alphabetically first .json file in it that is neither the header nor the output."
    )]
    pub working_dir: Option<PathBuf>,

    /// Source font to convert, bypassing discovery
    #[clap(long = "font", short = 'f', help = "Source font definition (StardewXNBHack JSON)")]
    pub font: Option<PathBuf>,

    /// Header document with the xnbcli `header` and `readers` sections
    #[clap(
        long = "header",
        help = "xnbcli header document",
        long_help = "xnbcli header document: an unpacked game SpriteFont with its 'content' section removed. Defaults to header.json in the working directory."
    )]
    pub header: Option<PathBuf>,

    /// Where to write the converted document
    #[clap(
        long = "output",
        short = 'o',
        help = "Output document",
        long_help = "Output document. Its file name without extension is also the name of the PNG sprite sheet the document refers to. Defaults to output.json in the working directory."
    )]
    pub output: Option<PathBuf>,

    /// Texture surface format code written to `content.texture.format`
    #[clap(long = "texture-format", help = "Texture format code (default 0)")]
    pub texture_format: Option<i32>,

    /// Character emission order
    #[clap(
        long = "order",
        value_enum,
        help = "Character order: sorted (default) or listed",
        long_help = "Character order. 'sorted' emits glyphs by code point. 'listed' follows the font's own Characters list, as older exports required."
    )]
    pub order: Option<OrderArg>,

    /// Fail when a listed character has no glyph
    #[clap(
        long = "strict",
        help = "Fail on listed characters without a glyph",
        long_help = "With --order listed, fail when a character in the Characters list has no glyph instead of leaving it out of the metric arrays."
    )]
    pub strict: bool,

    /// xnbcli executable used to pack the result
    #[clap(long = "xnbcli", help = "Path to the xnbcli executable")]
    pub xnbcli: Option<PathBuf>,

    /// Directory xnbcli writes the packed XNB file to
    #[clap(long = "pack-dir", help = "Directory for the packed XNB file")]
    pub pack_dir: Option<PathBuf>,

    /// Convert only, even when xnbcli is configured
    #[clap(long = "no-pack", help = "Do not run xnbcli after converting")]
    pub no_pack: bool,

    /// Initialize the user configuration directory
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with a settings file",
        long_help = "Initialize the ~/.config/spritefont-bridge directory with a settings.json file holding the default settings, then exit."
    )]
    pub new_config: bool,

    /// Also write logs to ~/.config/spritefont-bridge/logs
    #[clap(long = "log-file", help = "Also write logs to the user log directory")]
    pub log_file: bool,

    #[clap(long = "verbose", short = 'v', help = "Show debug output", conflicts_with = "quiet")]
    pub verbose: bool,

    #[clap(long = "quiet", short = 'q', help = "Only show warnings and errors")]
    pub quiet: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Paths that must already exist are checked here so mistakes are
    /// reported before anything is read.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.working_dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Working directory does not exist: {}\nMake sure the path is correct.",
                    dir.display()
                ));
            }
        }

        for (flag, path) in [("--font", &self.font), ("--header", &self.header)] {
            if let Some(path) = path {
                if !path.is_file() {
                    return Err(format!(
                        "{flag} file does not exist: {}\nMake sure the path is correct and the file exists.",
                        path.display()
                    ));
                }
            }
        }

        if let Some(output) = &self.output {
            if output.file_stem().is_none() {
                return Err(format!(
                    "Output path has no file name: {}",
                    output.display()
                ));
            }
        }

        if self.strict && self.order == Some(OrderArg::Sorted) {
            return Err(
                "--strict only applies to --order listed; sorted order cannot miss glyphs"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Log filter directive chosen by -v / -q
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
