//! Lenient view over the sidecar JSON descriptor.
//!
//! The export's sidecars are loosely shaped: every field is optional and the
//! same key can be missing, null, or carry the wrong type from one file to the
//! next. Extraction therefore probes the raw [`Value`] field by field instead
//! of deserializing against a schema, so one malformed field never takes the
//! rest of the descriptor down with it.

use serde_json::Value;

/// The sidecar fields this tool consumes. Read once per media file and
/// discarded after the metadata record is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidecarDescriptor {
    /// The human-readable, locale-formatted capture time.
    pub taken_time: Option<String>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    /// Raw decimal coordinates; the export writes `0` for "absent".
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

fn get_string(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(Value::as_str).map(str::to_owned)
}

fn get_f64_or_zero(value: &Value, pointer: &str) -> f64 {
    value.pointer(pointer).and_then(Value::as_f64).unwrap_or(0.0)
}

impl SidecarDescriptor {
    /// Extracts the consumed fields from a parsed sidecar. Never fails;
    /// missing or mistyped fields fall back to absent/zero.
    pub fn from_value(sidecar: &Value) -> Self {
        Self {
            taken_time: get_string(sidecar, "/photoTakenTime/formatted"),
            camera_make: get_string(sidecar, "/cameraMake"),
            camera_model: get_string(sidecar, "/cameraModel"),
            latitude: get_f64_or_zero(sidecar, "/geoData/latitude"),
            longitude: get_f64_or_zero(sidecar, "/geoData/longitude"),
            altitude: get_f64_or_zero(sidecar, "/geoData/altitude"),
        }
    }
}
