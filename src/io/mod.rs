//! File-system boundary
//!
//! Locating the source font in a working directory and reading/writing
//! whole documents. Nothing in the conversion core touches the disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::errors::{ConvertError, ConvertResult};

/// Extension of every document this tool reads or writes
pub const DOCUMENT_EXTENSION: &str = "json";

/// Find the source font in `dir`.
///
/// The source font is the alphabetically first `*.json` file whose name
/// differs from every path in `exclude` (the header and the output).
pub fn find_source_font(dir: &Path, exclude: &[&Path]) -> ConvertResult<PathBuf> {
    let excluded: Vec<_> = exclude.iter().filter_map(|path| path.file_name()).collect();

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| ConvertError::io(dir, err))? {
        let path = entry.map_err(|err| ConvertError::io(dir, err))?.path();
        if !path.is_file() {
            continue;
        }
        let is_document = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        let is_excluded = path
            .file_name()
            .is_some_and(|name| excluded.contains(&name));
        if is_document && !is_excluded {
            candidates.push(path);
        }
    }

    candidates.sort();
    if candidates.len() > 1 {
        debug!(
            "{} candidate fonts in {:?}; using the first alphabetically",
            candidates.len(),
            dir
        );
    }

    candidates.into_iter().next().ok_or_else(|| {
        ConvertError::io(
            dir,
            std::io::Error::new(
                ErrorKind::NotFound,
                "no source font (*.json other than the header and output) in this directory",
            ),
        )
    })
}

pub fn read_document(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))
}

pub fn write_document(path: &Path, text: &str) -> ConvertResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| ConvertError::io(parent, err))?;
    }
    fs::write(path, text).map_err(|err| ConvertError::io(path, err))
}
