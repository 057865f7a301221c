use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A capture timestamp at second resolution, normalized from the sidecar's
/// locale-formatted string.
///
/// The source provides no timezone, so the value is deliberately naive. Two
/// renderings exist: the EXIF convention (`YYYY:MM:DD HH:MM:SS`) for image
/// tags and ISO 8601 for container-level `creation_time` tags.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedTimestamp(NaiveDateTime);

impl NormalizedTimestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Renders in the EXIF datetime convention, e.g. `2021:07:15 14:30:00`.
    pub fn exif(&self) -> String {
        self.0.format("%Y:%m:%d %H:%M:%S").to_string()
    }

    /// Renders as ISO 8601 without a timezone suffix, e.g. `2021-07-15T14:30:00`.
    pub fn iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

impl fmt::Display for NormalizedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exif())
    }
}
