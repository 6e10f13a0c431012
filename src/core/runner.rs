//! Application runner logic
//!
//! A run converts exactly one font: locate inputs, parse both documents,
//! transcode, assemble, serialise, then write. The output file is only
//! touched once everything before it has succeeded.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::cli::{CliArgs, UsageError};
use crate::core::config::{ConfigFile, ConvertSettings};
use crate::core::errors::ConvertResult;
use crate::document::{assemble, parse_header, to_json, Texture, TEXTURE_EXTENSION};
use crate::font_source::parse_source_font;
use crate::io::{find_source_font, read_document, write_document};
use crate::logging;
use crate::pack::pack_if_configured;
use crate::transcode::{transcode, TranscodeOptions};

/// An in-memory conversion result
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The serialised output document
    pub json: String,
    pub glyph_count: usize,
    pub character_count: usize,
    /// Listed characters that had no glyph
    pub skipped: Vec<char>,
}

/// A finished file-to-file conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub font_path: PathBuf,
    pub output_path: PathBuf,
    pub conversion: Conversion,
}

/// Convert document text to output text without touching the disk.
pub fn convert_text(
    header_text: &str,
    font_text: &str,
    options: &TranscodeOptions,
    texture: Texture,
) -> ConvertResult<Conversion> {
    let header = parse_header(header_text)?;
    let font = parse_source_font(font_text)?;
    let transcoded = transcode(&font, options)?;

    let glyph_count = transcoded.glyphs.len();
    let character_count = transcoded.character_map.len();
    let skipped = transcoded.skipped.clone();

    let document = assemble(header, transcoded, texture);
    let json = to_json(&document)?;

    Ok(Conversion {
        json,
        glyph_count,
        character_count,
        skipped,
    })
}

/// Convert the font described by `settings` and write the output document.
pub fn convert_files(settings: &ConvertSettings) -> ConvertResult<ConversionReport> {
    let font_path = match &settings.font_path {
        Some(path) => path.clone(),
        None => find_source_font(
            &settings.working_dir,
            &[&settings.header_path, &settings.output_path],
        )?,
    };
    info!("Converting {:?} with header {:?}", font_path, settings.header_path);

    let header_text = read_document(&settings.header_path)?;
    let font_text = read_document(&font_path)?;
    let conversion = convert_text(
        &header_text,
        &font_text,
        &settings.transcode,
        settings.texture(),
    )?;

    write_document(&settings.output_path, &conversion.json)?;
    info!(
        "Wrote {:?}: {} glyph(s), {} character(s)",
        settings.output_path, conversion.glyph_count, conversion.character_count
    );

    let sprite_sheet = settings
        .output_path
        .with_extension(TEXTURE_EXTENSION);
    if !sprite_sheet.exists() {
        warn!(
            "{:?} does not exist yet; xnbcli needs the sprite sheet next to the output document",
            sprite_sheet
        );
    }

    Ok(ConversionReport {
        font_path,
        output_path: settings.output_path.clone(),
        conversion,
    })
}

/// Run the application with the given CLI arguments.
/// Handles special CLI flags, then converts and optionally packs.
pub async fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(UsageError)?;
    let _log_guard = logging::init(cli_args.log_level(), cli_args.log_file)
        .context("Failed to set up logging")?;

    let settings = ConvertSettings::resolve(&cli_args, ConfigFile::load());
    convert_files(&settings).context("Conversion failed")?;

    pack_if_configured(settings.pack.as_ref(), &settings.output_stem())
        .await
        .context("Packing failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ConvertError;
    use std::fs;

    const HEADER: &str = r#"{"header": {"target": "w"}, "readers": []}"#;
    const FONT: &str = r#"{"LineSpacing": 26, "Spacing": 0, "DefaultCharacter": "~", "Glyphs": {
        "A": {"BoundsInTexture": "{X:24 Y:0 Width:12 Height:20}",
              "Cropping": "{X:0 Y:0 Width:12 Height:26}",
              "LeftSideBearing": 0.0, "Width": 12.0, "RightSideBearing": 0.0}}}"#;

    fn settings_for(dir: &std::path::Path) -> ConvertSettings {
        let cli = CliArgs {
            working_dir: Some(dir.to_path_buf()),
            ..Default::default()
        };
        ConvertSettings::resolve(&cli, None)
    }

    #[test]
    fn converts_discovered_font_into_output_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("header.json"), HEADER).unwrap();
        fs::write(dir.path().join("SmallFont.json"), FONT).unwrap();

        let report = convert_files(&settings_for(dir.path())).unwrap();
        assert_eq!(report.font_path, dir.path().join("SmallFont.json"));
        assert_eq!(report.conversion.glyph_count, 1);

        let written = fs::read_to_string(dir.path().join("output.json")).unwrap();
        assert_eq!(written, report.conversion.json);
        assert!(written.contains("\"export\": \"output.png\""));
    }

    #[test]
    fn rerunning_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("header.json"), HEADER).unwrap();
        fs::write(dir.path().join("font.json"), FONT).unwrap();
        let settings = settings_for(dir.path());

        convert_files(&settings).unwrap();
        let first = fs::read(dir.path().join("output.json")).unwrap();
        // The previous output must not be picked up as the source font
        convert_files(&settings).unwrap();
        let second = fs::read(dir.path().join("output.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn failed_conversion_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("header.json"), HEADER).unwrap();
        fs::write(
            dir.path().join("font.json"),
            FONT.replace("Width:12 Height:20", "Width:12"),
        )
        .unwrap();

        let err = convert_files(&settings_for(dir.path())).unwrap_err();
        assert!(matches!(err, ConvertError::Format { character: 'A', .. }));
        assert!(!dir.path().join("output.json").exists());
    }

    #[test]
    fn skipped_characters_are_reported_to_the_caller() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("header.json"), HEADER).unwrap();
        fs::write(
            dir.path().join("font.json"),
            FONT.replace("\"Glyphs\"", "\"Characters\": [\"A\", \"B\"], \"Glyphs\""),
        )
        .unwrap();

        let cli = CliArgs {
            working_dir: Some(dir.path().to_path_buf()),
            order: Some(crate::core::cli::OrderArg::Listed),
            ..Default::default()
        };
        let report = convert_files(&ConvertSettings::resolve(&cli, None)).unwrap();
        assert_eq!(report.conversion.skipped, vec!['B']);
        assert_eq!(report.conversion.character_count, 2);
        assert_eq!(report.conversion.glyph_count, 1);
    }

    #[test]
    fn missing_header_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("font.json"), FONT).unwrap();
        assert!(matches!(
            convert_files(&settings_for(dir.path())),
            Err(ConvertError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_arguments_fail_as_usage_errors() {
        let cli = CliArgs {
            font: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        let err = run_app(cli).await.unwrap_err();
        assert!(err.downcast_ref::<UsageError>().is_some());
    }
}
