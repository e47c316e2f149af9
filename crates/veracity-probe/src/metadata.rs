//! Capture-metadata probe backed by the `exif` library

use exif::{Exif, In, Reader, Tag, Value};
use std::io::Cursor;
use tracing::debug;
use veracity_domain::{CaptureMetadata, MetadataOutcome, MetadataProbe};

/// Reads EXIF fields from JPEG, TIFF, PNG, WebP or HEIF bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifProbe;

impl MetadataProbe for ExifProbe {
    fn read_metadata(&self, bytes: &[u8]) -> MetadataOutcome {
        let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
            Ok(exif) => exif,
            Err(e) => {
                debug!("No EXIF metadata: {}", e);
                return MetadataOutcome::Absent;
            }
        };

        let field_count = exif.fields().count();
        if field_count == 0 {
            debug!("EXIF container holds no fields");
            return MetadataOutcome::Absent;
        }

        MetadataOutcome::Present(CaptureMetadata {
            exif_version: field_text(&exif, Tag::ExifVersion),
            make: field_text(&exif, Tag::Make),
            model: field_text(&exif, Tag::Model),
            software: field_text(&exif, Tag::Software),
            datetime_original: field_text(&exif, Tag::DateTimeOriginal),
            gps_latitude: field_text(&exif, Tag::GPSLatitude),
            gps_longitude: field_text(&exif, Tag::GPSLongitude),
            field_count,
        })
    }
}

/// Render a primary-image field as plain text
fn field_text(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;

    let text = match &field.value {
        // Strings without the quoting `display_value` adds
        Value::Ascii(parts) => parts
            .iter()
            .map(|part| String::from_utf8_lossy(part).trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => field.display_value().with_unit(exif).to_string(),
    };

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Little-endian TIFF with one IFD entry: Make = "Cam"
    fn tiff_with_make() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"II");
        bytes.extend_from_slice(&42u16.to_le_bytes());
        bytes.extend_from_slice(&8u32.to_le_bytes());
        // IFD0
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0x010Fu16.to_le_bytes()); // Make
        bytes.extend_from_slice(&2u16.to_le_bytes()); // ASCII
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(b"Cam\0");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes
    }

    #[test]
    fn test_reads_make_from_tiff() {
        let outcome = ExifProbe.read_metadata(&tiff_with_make());
        let metadata = outcome.metadata().expect("metadata should be present");
        assert_eq!(metadata.make.as_deref(), Some("Cam"));
        assert_eq!(metadata.model, None);
        assert_eq!(metadata.gps_latitude, None);
        assert_eq!(metadata.field_count, 1);
    }

    #[test]
    fn test_garbage_bytes_are_absent() {
        assert_eq!(
            ExifProbe.read_metadata(b"definitely not an image"),
            MetadataOutcome::Absent
        );
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert_eq!(ExifProbe.read_metadata(&[]), MetadataOutcome::Absent);
    }

    #[test]
    fn test_jpeg_without_exif_is_absent() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xD9];
        assert_eq!(ExifProbe.read_metadata(&jpeg), MetadataOutcome::Absent);
    }
}
