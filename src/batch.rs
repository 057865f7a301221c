//! The thin per-folder loop: pair sidecars with media files, dispatch each
//! pair, log one line per file, and keep going on every per-file failure.

use crate::error::RestoreError;
use crate::remux::Remuxer;
use crate::restore::restore_file;
use crate::time::DateParser;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// The naming suffix the export appends to each media file's descriptor.
pub const SIDECAR_SUFFIX: &str = ".supplemental-metadata.json";

/// Restored files land in `<folder>/restored/<original filename>`.
pub const OUTPUT_SUBDIR: &str = "restored";

/// Per-folder outcome tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderSummary {
    pub restored: usize,
    pub skipped: usize,
    pub failed: usize,
}

fn restore_pair(
    media_path: &Path,
    out_path: &Path,
    sidecar_path: &Path,
    parser: &dyn DateParser,
    remuxer: &dyn Remuxer,
) -> Result<Vec<String>, RestoreError> {
    if !media_path.exists() {
        return Err(RestoreError::MissingMediaFile(media_path.to_path_buf()));
    }
    let sidecar: Value = serde_json::from_str(&fs::read_to_string(sidecar_path)?)?;
    let outcome = restore_file(media_path, out_path, &sidecar, parser, remuxer)?;
    Ok(outcome.warnings)
}

/// Processes one input folder sequentially.
///
/// Creates the output directory (idempotent; its failure is the only fatal
/// error), then walks the folder's entries once. Every file ending in
/// [`SIDECAR_SUFFIX`] whose base name has a supported media extension is
/// dispatched; everything else is ignored. Media files without a sidecar
/// never reach the core by construction.
pub fn process_folder(
    folder: &Path,
    parser: &dyn DateParser,
    remuxer: &dyn Remuxer,
) -> Result<FolderSummary, RestoreError> {
    let out_dir = folder.join(OUTPUT_SUBDIR);
    fs::create_dir_all(&out_dir)?;

    let mut summary = FolderSummary::default();
    for entry in fs::read_dir(folder)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(folder = %folder.display(), "unreadable directory entry: {e}");
                continue;
            }
        };
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(media_name) = name.strip_suffix(SIDECAR_SUFFIX) else {
            continue;
        };

        let media_path = folder.join(media_name);
        let out_path = out_dir.join(media_name);
        match restore_pair(&media_path, &out_path, &entry.path(), parser, remuxer) {
            Ok(warnings) => {
                summary.restored += 1;
                for warning in &warnings {
                    warn!(file = media_name, "{warning}");
                }
                info!(file = media_name, "restored");
            }
            Err(e @ (RestoreError::MissingMediaFile(_) | RestoreError::UnsupportedMedia(_))) => {
                summary.skipped += 1;
                warn!(file = media_name, "skipped: {e}");
            }
            Err(e) => {
                summary.failed += 1;
                error!(file = media_name, "failed: {e}");
            }
        }
    }

    Ok(summary)
}
