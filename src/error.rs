use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the media-restorer crate.
///
/// Every variant is recoverable at the per-file boundary: the batch loop
/// converts it to a logged outcome and moves on to the next file. Only
/// output-directory creation failure aborts a folder.
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sidecar is not valid JSON: {0}")]
    Sidecar(#[from] serde_json::Error),

    #[error("Image metadata write failed: {0}")]
    Image(#[from] crate::exif_writer::ImageWriteError),

    #[error("Video remux failed: {0}")]
    Remux(#[from] crate::remux::RemuxError),

    #[error("Sidecar has no matching media file: {}", .0.display())]
    MissingMediaFile(PathBuf),

    #[error("Unsupported media extension: {}", .0.display())]
    UnsupportedMedia(PathBuf),
}
