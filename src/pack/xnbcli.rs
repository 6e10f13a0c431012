use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::process::Command;
use tracing::{info, warn};

use crate::core::errors::{ConvertError, ConvertResult};

/// A packed XNB smaller than this is xnbcli's failure signature
pub const MIN_XNB_SIZE: u64 = 64;

/// What was found in the pack output directory after xnbcli ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackedStatus {
    Packed { path: PathBuf, size: u64 },
    Missing(PathBuf),
    Truncated { path: PathBuf, size: u64 },
}

pub struct XnbcliPacker {
    executable: PathBuf,
}

impl XnbcliPacker {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.executable.is_file()
    }

    /// Run `xnbcli pack <input_dir> <output_dir>`
    pub async fn pack(&self, input_dir: &Path, output_dir: &Path) -> ConvertResult<()> {
        fs::create_dir_all(output_dir)
            .await
            .map_err(|err| ConvertError::io(output_dir, err))?;

        let output = Command::new(&self.executable)
            .arg("pack")
            .arg(input_dir)
            .arg(output_dir)
            .output()
            .await
            .map_err(|err| {
                ConvertError::Pack(format!(
                    "failed to execute {}: {err}",
                    self.executable.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::Pack(format!(
                "xnbcli exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    /// Look for `<output_dir>/<stem>.xnb` after packing.
    pub async fn check_packed(&self, output_dir: &Path, stem: &str) -> PackedStatus {
        let path = output_dir.join(format!("{stem}.xnb"));
        match fs::metadata(&path).await {
            Ok(meta) if meta.len() < MIN_XNB_SIZE => PackedStatus::Truncated {
                path,
                size: meta.len(),
            },
            Ok(meta) => PackedStatus::Packed {
                size: meta.len(),
                path,
            },
            Err(_) => PackedStatus::Missing(path),
        }
    }

    /// Pack and report the result in the log.
    pub async fn pack_and_check(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        stem: &str,
    ) -> ConvertResult<PackedStatus> {
        self.pack(input_dir, output_dir).await?;

        let status = self.check_packed(output_dir, stem).await;
        match &status {
            PackedStatus::Packed { path, size } => {
                info!("Packed {:?} ({} bytes)", path, size)
            }
            PackedStatus::Missing(path) => {
                warn!("xnbcli reported success but {:?} was not written", path)
            }
            PackedStatus::Truncated { path, size } => warn!(
                "{:?} is only {} bytes; xnbcli most likely failed to read the font",
                path, size
            ),
        }

        Ok(status)
    }
}
