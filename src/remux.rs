//! Container-level metadata restoration for video files.
//!
//! Videos cannot take an EXIF block; instead the audio/video streams are
//! copied bit-for-bit into a fresh container carrying `creation_time` and
//! `location` tags. The external remux tool sits behind the narrow
//! [`Remuxer`] trait so the per-file logic can be exercised without spawning
//! a real binary.

use crate::builder::MetadataRecord;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemuxError {
    #[error("Failed to spawn remux process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Remux process exited with {status}: {stderr}")]
    Process { status: String, stderr: String },
}

/// Stream-copies a container while attaching the given metadata tags.
pub trait Remuxer {
    fn remux(
        &self,
        input: &Path,
        output: &Path,
        metadata: &[(String, String)],
    ) -> Result<(), RemuxError>;
}

/// Builds the container tag assignments for a record. Only present fields
/// produce tags, so an empty record remuxes to a plain copy.
pub fn metadata_tags(record: &MetadataRecord) -> Vec<(String, String)> {
    let mut tags = Vec::new();
    if let Some(timestamp) = &record.timestamp {
        tags.push(("creation_time".to_string(), timestamp.iso8601()));
    }
    if let Some(location) = &record.location {
        tags.push(("location".to_string(), location.location_tag()));
    }
    tags
}

/// Remuxes `video_path` into `out_path` with the record's metadata attached.
pub fn rewrite_video_metadata(
    remuxer: &dyn Remuxer,
    video_path: &Path,
    out_path: &Path,
    record: &MetadataRecord,
) -> Result<(), RemuxError> {
    remuxer.remux(video_path, out_path, &metadata_tags(record))
}

/// The default remuxer, invoking `ffmpeg -y -i IN -c copy [-metadata k=v]… OUT`.
/// Blocks until the process exits; a non-zero exit becomes a [`RemuxError`]
/// carrying the captured stderr.
pub struct FfmpegRemuxer {
    executable: PathBuf,
}

impl FfmpegRemuxer {
    pub fn new() -> Self {
        Self { executable: PathBuf::from("ffmpeg") }
    }

    pub fn with_executable(path: impl Into<PathBuf>) -> Self {
        Self { executable: path.into() }
    }
}

impl Default for FfmpegRemuxer {
    fn default() -> Self {
        Self::new()
    }
}

impl Remuxer for FfmpegRemuxer {
    fn remux(
        &self,
        input: &Path,
        output: &Path,
        metadata: &[(String, String)],
    ) -> Result<(), RemuxError> {
        let mut command = Command::new(&self.executable);
        command.arg("-y").arg("-i").arg(input).args(["-c", "copy"]);
        for (key, value) in metadata {
            command.arg("-metadata").arg(format!("{key}={value}"));
        }
        command.arg(output);

        let result = command.output()?;
        if !result.status.success() {
            return Err(RemuxError::Process {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::GeoCoordinate;
    use crate::time::normalize;
    use std::cell::RefCell;

    /// Records remux invocations instead of spawning anything.
    struct RecordingRemuxer {
        calls: RefCell<Vec<(PathBuf, PathBuf, Vec<(String, String)>)>>,
    }

    impl RecordingRemuxer {
        fn new() -> Self {
            Self { calls: RefCell::new(Vec::new()) }
        }
    }

    impl Remuxer for RecordingRemuxer {
        fn remux(
            &self,
            input: &Path,
            output: &Path,
            metadata: &[(String, String)],
        ) -> Result<(), RemuxError> {
            self.calls.borrow_mut().push((
                input.to_path_buf(),
                output.to_path_buf(),
                metadata.to_vec(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_tags_for_full_record() {
        let record = MetadataRecord {
            timestamp: Some(normalize("15 июл. 2021 г., 14:30:00").unwrap()),
            location: GeoCoordinate::from_sidecar(-33.8688, 151.2093, 0.0),
            ..MetadataRecord::default()
        };

        let tags = metadata_tags(&record);
        assert_eq!(
            tags,
            vec![
                ("creation_time".to_string(), "2021-07-15T14:30:00".to_string()),
                ("location".to_string(), "-33.868800+151.209300/".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_record_produces_no_tags() {
        assert!(metadata_tags(&MetadataRecord::default()).is_empty());
    }

    #[test]
    fn test_timestamp_only() {
        let record = MetadataRecord {
            timestamp: Some(normalize("2021:07:15 14:30:00").unwrap()),
            ..MetadataRecord::default()
        };
        let tags = metadata_tags(&record);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].0, "creation_time");
    }

    #[test]
    fn test_rewrite_passes_paths_and_tags_through() {
        let remuxer = RecordingRemuxer::new();
        let record = MetadataRecord {
            location: GeoCoordinate::from_sidecar(-33.8688, 151.2093, 0.0),
            ..MetadataRecord::default()
        };

        rewrite_video_metadata(
            &remuxer,
            Path::new("in.mp4"),
            Path::new("restored/in.mp4"),
            &record,
        )
        .unwrap();

        let calls = remuxer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (input, output, metadata) = &calls[0];
        assert_eq!(input, Path::new("in.mp4"));
        assert_eq!(output, Path::new("restored/in.mp4"));
        assert_eq!(metadata[0].1, "-33.868800+151.209300/");
    }
}
