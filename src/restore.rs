//! Per-file restoration: classify the media kind and run the matching writer.

use crate::builder::build_record;
use crate::error::RestoreError;
use crate::exif_writer::write_image_metadata;
use crate::remux::{Remuxer, rewrite_video_metadata};
use crate::time::DateParser;
use serde_json::Value;
use std::path::Path;

/// Video containers the remux path accepts.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "avi"];

/// Still-image formats the EXIF path accepts.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Picks the metadata-embedding strategy from the file extension.
pub fn classify(path: &Path) -> Option<MediaKind> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// The per-file success report: the file was written, possibly with some
/// sidecar fields skipped.
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub warnings: Vec<String>,
}

/// Restores one media file from its parsed sidecar, writing to `out_path`.
///
/// Builds the metadata record best-effort, then dispatches to the image or
/// video writer. Field-level problems surface as warnings in the outcome;
/// only a failed write is an error.
pub fn restore_file(
    media_path: &Path,
    out_path: &Path,
    sidecar: &Value,
    parser: &dyn DateParser,
    remuxer: &dyn Remuxer,
) -> Result<FileOutcome, RestoreError> {
    let kind = classify(media_path)
        .ok_or_else(|| RestoreError::UnsupportedMedia(media_path.to_path_buf()))?;

    let report = build_record(sidecar, parser);
    match kind {
        MediaKind::Image => write_image_metadata(media_path, out_path, &report.record)?,
        MediaKind::Video => rewrite_video_metadata(remuxer, media_path, out_path, &report.record)?,
    }

    Ok(FileOutcome { warnings: report.warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify(Path::new("a.jpg")), Some(MediaKind::Image));
        assert_eq!(classify(Path::new("a.JPG")), Some(MediaKind::Image));
        assert_eq!(classify(Path::new("a.jpeg")), Some(MediaKind::Image));
        assert_eq!(classify(Path::new("a.mp4")), Some(MediaKind::Video));
        assert_eq!(classify(Path::new("a.MOV")), Some(MediaKind::Video));
        assert_eq!(classify(Path::new("a.avi")), Some(MediaKind::Video));
        assert_eq!(classify(Path::new("a.png")), None);
        assert_eq!(classify(Path::new("noextension")), None);
    }
}
