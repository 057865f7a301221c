//! # Media Restorer
//!
//! Restore embedded timestamp and GPS metadata on photo and video files
//! exported from a photo-backup service, using the sidecar JSON descriptors
//! that accompany each media file but are not embedded in it.
//!
//! ## Key Features
//!
//! - **Date Normalization**: Parses the export's locale-formatted capture
//!   times (e.g. `15 июл. 2021 г., 14:30:00`) into canonical timestamps.
//! - **EXIF Restoration**: Rebuilds the datetime, camera, and GPS tag groups
//!   inside JPEG files without re-encoding the image data.
//! - **Video Remuxing**: Stream-copies video containers through an external
//!   remux tool while attaching `creation_time` and `location` tags.
//! - **Best-Effort Batches**: A malformed field skips that field, a broken
//!   file skips that file; the batch always runs to completion.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use media_restorer::batch::process_folder;
//! use media_restorer::remux::FfmpegRemuxer;
//! use media_restorer::time::RussianDateParser;
//! use std::path::Path;
//!
//! fn main() -> Result<(), media_restorer::RestoreError> {
//!     let summary = process_folder(
//!         Path::new("Photos from 2021"),
//!         &RussianDateParser,
//!         &FfmpegRemuxer::new(),
//!     )?;
//!     println!(
//!         "restored {}, skipped {}, failed {}",
//!         summary.restored, summary.skipped, summary.failed
//!     );
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod exif_writer;
pub mod gps;
pub mod remux;
pub mod restore;
pub mod sidecar;
pub mod time;

pub use builder::{BuildReport, MetadataRecord};
pub use error::RestoreError;
pub use gps::{DmsRational, GeoCoordinate};
pub use time::NormalizedTimestamp;
