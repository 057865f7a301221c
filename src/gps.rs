//! Geographic coordinate types and the sexagesimal conversion required by
//! the EXIF GPS tag group.

use serde::{Deserialize, Serialize};

/// Denominator used for the seconds component of a [`DmsRational`], giving
/// 1/10000 of an arc second of precision.
pub const SECONDS_DENOMINATOR: u32 = 10_000;

/// A location in decimal degrees, with altitude in meters when known.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

impl GeoCoordinate {
    /// Builds a coordinate from raw sidecar values.
    ///
    /// The export uses `0` for "no location data", so a coordinate is present
    /// only when both latitude and longitude are nonzero. A genuine equator or
    /// prime-meridian location is therefore indistinguishable from an absent
    /// one; this mirrors the sidecar convention and is a known limitation.
    /// Altitude is kept only when nonzero for the same reason.
    pub fn from_sidecar(latitude: f64, longitude: f64, altitude: f64) -> Option<Self> {
        if latitude == 0.0 || longitude == 0.0 {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            altitude: (altitude != 0.0).then_some(altitude),
        })
    }

    /// Renders the container-level `location` tag value: signed decimal
    /// degrees at fixed 6-decimal precision with the trailing `/` sentinel,
    /// e.g. `-33.868800+151.209300/`.
    pub fn location_tag(&self) -> String {
        format!("{:.6}+{:.6}/", self.latitude, self.longitude)
    }
}

/// A degrees/minutes/seconds coordinate as the EXIF GPS tags encode it:
/// integer degrees and minutes over 1, seconds as a rational over
/// [`SECONDS_DENOMINATOR`], plus the hemisphere reference character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsRational {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds_numerator: u32,
    pub reference: char,
}

/// Converts one decimal-degree axis into its sexagesimal rational form.
///
/// Only called for coordinates already validated as present; zero is handled
/// upstream by [`GeoCoordinate::from_sidecar`].
pub fn to_dms(decimal_degrees: f64, is_latitude: bool) -> DmsRational {
    let reference = match (is_latitude, decimal_degrees >= 0.0) {
        (true, true) => 'N',
        (true, false) => 'S',
        (false, true) => 'E',
        (false, false) => 'W',
    };

    let absolute = decimal_degrees.abs();
    let degrees = absolute.trunc();
    let minutes_float = (absolute - degrees) * 60.0;
    let minutes = minutes_float.trunc();
    let seconds_numerator =
        ((minutes_float - minutes) * 60.0 * f64::from(SECONDS_DENOMINATOR)).round();

    DmsRational {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds_numerator: seconds_numerator as u32,
        reference,
    }
}

/// Encodes an altitude in meters as the EXIF rational over 100 (centimeter
/// precision, truncated). Negative altitudes clamp to zero; the EXIF rational
/// is unsigned.
pub fn altitude_rational(meters: f64) -> (u32, u32) {
    ((meters * 100.0) as u32, 100)
}
