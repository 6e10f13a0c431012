//! Packing converted fonts into XNB files with xnbcli
//!
//! Optional last step of a run. xnbcli packs every document in the
//! working directory, so the output document and its PNG sprite sheet
//! must already be there.

pub mod xnbcli;

use tracing::{debug, warn};

use crate::core::config::PackSettings;
use crate::core::errors::ConvertResult;

pub use xnbcli::{PackedStatus, XnbcliPacker, MIN_XNB_SIZE};

/// Run xnbcli if it is configured and present.
///
/// Returns `None` when packing was skipped.
pub async fn pack_if_configured(
    settings: Option<&PackSettings>,
    stem: &str,
) -> ConvertResult<Option<PackedStatus>> {
    let Some(settings) = settings else {
        debug!("No xnbcli configured; skipping pack");
        return Ok(None);
    };

    let packer = XnbcliPacker::new(&settings.xnbcli);
    if !packer.is_available() {
        warn!("xnbcli not found at {:?}; skipping pack", settings.xnbcli);
        return Ok(None);
    }

    packer
        .pack_and_check(&settings.input_dir, &settings.output_dir, stem)
        .await
        .map(Some)
}
