//! Serializes a [`MetadataRecord`] into an EXIF block and splices it into a
//! JPEG container without touching the image data.

use crate::builder::MetadataRecord;
use crate::gps::{DmsRational, SECONDS_DENOMINATOR, altitude_rational, to_dms};
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use img_parts::jpeg::Jpeg;
use img_parts::{Bytes, ImageEXIF};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source is not a decodable JPEG container: {0}")]
    Container(#[from] img_parts::Error),

    #[error("EXIF block encoding failed: {0}")]
    Encode(#[from] exif::Error),
}

fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

fn dms(tag: Tag, value: &DmsRational) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational { num: value.degrees, denom: 1 },
            Rational { num: value.minutes, denom: 1 },
            Rational {
                num: value.seconds_numerator,
                denom: SECONDS_DENOMINATOR,
            },
        ]),
    }
}

/// Builds the EXIF fields for a record: the redundant datetime triple, the
/// camera group, and the GPS group. Absent record fields omit their group.
fn build_fields(record: &MetadataRecord) -> Vec<Field> {
    let mut fields = Vec::new();

    if let Some(timestamp) = &record.timestamp {
        let datetime = timestamp.exif();
        // EXIF convention keeps three copies of the capture time in sync.
        fields.push(ascii(Tag::DateTime, &datetime));
        fields.push(ascii(Tag::DateTimeOriginal, &datetime));
        fields.push(ascii(Tag::DateTimeDigitized, &datetime));
    }

    if let Some(make) = &record.camera_make {
        fields.push(ascii(Tag::Make, make));
    }
    if let Some(model) = &record.camera_model {
        fields.push(ascii(Tag::Model, model));
    }

    if let Some(location) = &record.location {
        let latitude = to_dms(location.latitude, true);
        let longitude = to_dms(location.longitude, false);
        fields.push(ascii(Tag::GPSLatitudeRef, &latitude.reference.to_string()));
        fields.push(dms(Tag::GPSLatitude, &latitude));
        fields.push(ascii(Tag::GPSLongitudeRef, &longitude.reference.to_string()));
        fields.push(dms(Tag::GPSLongitude, &longitude));

        if let Some(meters) = location.altitude {
            let (num, denom) = altitude_rational(meters);
            fields.push(Field {
                tag: Tag::GPSAltitude,
                ifd_num: In::PRIMARY,
                value: Value::Rational(vec![Rational { num, denom }]),
            });
        }
    }

    fields
}

/// Reads the source JPEG, replaces its EXIF segment with one built from the
/// record, and writes the result to `out_path`. The encoded image data passes
/// through untouched. A record with nothing populated still produces a valid,
/// metadata-free copy.
pub fn write_image_metadata(
    image_path: &Path,
    out_path: &Path,
    record: &MetadataRecord,
) -> Result<(), ImageWriteError> {
    let image_bytes = fs::read(image_path)?;
    let mut jpeg = Jpeg::from_bytes(image_bytes.into())?;

    let fields = build_fields(record);
    if !fields.is_empty() {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new();
        for field in &fields {
            writer.push_field(field);
        }
        // Big-endian TIFF, the common EXIF byte order.
        writer.write(&mut buffer, false)?;
        jpeg.set_exif(Some(Bytes::from(buffer.into_inner())));
    }

    fs::write(out_path, jpeg.encoder().bytes())?;
    Ok(())
}
