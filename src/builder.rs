//! Best-effort assembly of a [`MetadataRecord`] from a sidecar descriptor.

use crate::gps::GeoCoordinate;
use crate::sidecar::SidecarDescriptor;
use crate::time::{DateParser, NormalizedTimestamp, normalize_with};
use serde_json::Value;

/// The unified metadata for one media file, consumed by exactly one writer.
/// Every field is optional; a record with nothing populated is still valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    pub timestamp: Option<NormalizedTimestamp>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    pub location: Option<GeoCoordinate>,
}

impl MetadataRecord {
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none()
            && self.camera_make.is_none()
            && self.camera_model.is_none()
            && self.location.is_none()
    }
}

/// A possibly-partial record plus the warnings accumulated while building it.
///
/// Partial success is an explicit return value here: one unparseable field
/// must not prevent the remaining metadata from being restored, and must not
/// abort the batch.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub record: MetadataRecord,
    pub warnings: Vec<String>,
}

/// Builds a metadata record from a parsed sidecar. Never fails: fields that
/// cannot be used are skipped with a recorded warning.
pub fn build_record(sidecar: &Value, parser: &dyn DateParser) -> BuildReport {
    let descriptor = SidecarDescriptor::from_value(sidecar);
    let mut warnings = Vec::new();

    let timestamp = descriptor.taken_time.as_deref().and_then(|raw| {
        match normalize_with(parser, raw) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warnings.push(format!("capture time skipped: {e}"));
                None
            }
        }
    });

    let location = GeoCoordinate::from_sidecar(
        descriptor.latitude,
        descriptor.longitude,
        descriptor.altitude,
    );

    BuildReport {
        record: MetadataRecord {
            timestamp,
            camera_make: descriptor.camera_make,
            camera_model: descriptor.camera_model,
            location,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::RussianDateParser;
    use serde_json::json;

    fn build(sidecar: &Value) -> BuildReport {
        build_record(sidecar, &RussianDateParser)
    }

    #[test]
    fn test_full_sidecar_builds_full_record() {
        let report = build(&json!({
            "photoTakenTime": { "formatted": "15 июл. 2021 г., 14:30:00" },
            "cameraMake": "Google",
            "cameraModel": "Pixel 6",
            "geoData": { "latitude": 55.7558, "longitude": 37.6173, "altitude": 150.0 }
        }));

        assert!(report.warnings.is_empty());
        let record = report.record;
        assert_eq!(record.timestamp.unwrap().exif(), "2021:07:15 14:30:00");
        assert_eq!(record.camera_make.as_deref(), Some("Google"));
        assert_eq!(record.camera_model.as_deref(), Some("Pixel 6"));
        let location = record.location.unwrap();
        assert_eq!(location.latitude, 55.7558);
        assert_eq!(location.altitude, Some(150.0));
    }

    #[test]
    fn test_empty_sidecar_builds_empty_record() {
        let report = build(&json!({}));
        assert!(report.record.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_never_fails_on_malformed_geo_data() {
        let report = build(&json!({ "geoData": { "latitude": "north a bit" } }));
        assert!(report.record.location.is_none());
    }

    #[test]
    fn test_bad_date_keeps_location_and_records_warning() {
        let report = build(&json!({
            "photoTakenTime": { "formatted": "когда-то давно" },
            "geoData": { "latitude": 55.7558, "longitude": 37.6173 }
        }));

        assert!(report.record.timestamp.is_none());
        assert!(report.record.location.is_some(), "location must survive a bad date");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("capture time skipped"));
    }

    #[test]
    fn test_zero_latitude_is_treated_as_absent() {
        let report = build(&json!({ "geoData": { "latitude": 0.0, "longitude": 10.0 } }));
        assert!(report.record.location.is_none());

        let report = build(&json!({ "geoData": { "latitude": 0.0, "longitude": 0.0 } }));
        assert!(report.record.location.is_none());
    }
}
