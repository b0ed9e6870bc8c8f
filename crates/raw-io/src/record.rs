//! Single-record sequential binary files.
//!
//! The external solver exchanges arrays as unformatted sequential files
//! holding exactly one record:
//!
//! ```text
//! +----------------+---------------------------+----------------+
//! | u32 byte count | n x f64 (little endian)   | u32 byte count |
//! +----------------+---------------------------+----------------+
//! ```
//!
//! Values are written in the array's logical (row-major) order, so a field of
//! shape `(layers, rows, cols)` is stored with columns varying fastest.

use crate::error::{RawIoError, RawIoResult};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use ndarray::{ArrayBase, Data, Dimension};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Size of the leading and trailing record markers.
pub const MARKER_BYTES: usize = 4;

const VALUE_BYTES: usize = std::mem::size_of::<f64>();

/// Encode values as one framed record.
pub fn encode_record(values: &[f64]) -> RawIoResult<Bytes> {
    let payload = values.len() * VALUE_BYTES;
    let marker = u32::try_from(payload).map_err(|_| RawIoError::RecordTooLarge { bytes: payload })?;

    let mut buf = BytesMut::with_capacity(payload + 2 * MARKER_BYTES);
    buf.put_u32_le(marker);
    for &value in values {
        buf.put_f64_le(value);
    }
    buf.put_u32_le(marker);
    Ok(buf.freeze())
}

/// Decode one framed record. `file` is used for error context only.
pub fn decode_record(file: &Path, mut data: Bytes) -> RawIoResult<Vec<f64>> {
    if data.len() < 2 * MARKER_BYTES {
        return Err(RawIoError::corrupt(
            file,
            format!("{} bytes is too short to hold a record", data.len()),
        ));
    }

    let marker = data.get_u32_le() as usize;
    if marker % VALUE_BYTES != 0 {
        return Err(RawIoError::corrupt(
            file,
            format!("record length {} is not a multiple of {}", marker, VALUE_BYTES),
        ));
    }
    if data.remaining() < marker + MARKER_BYTES {
        return Err(RawIoError::corrupt(
            file,
            format!(
                "record declares {} bytes but only {} remain",
                marker,
                data.remaining().saturating_sub(MARKER_BYTES)
            ),
        ));
    }

    let values: Vec<f64> = (0..marker / VALUE_BYTES).map(|_| data.get_f64_le()).collect();

    let trailer = data.get_u32_le() as usize;
    if trailer != marker {
        return Err(RawIoError::corrupt(
            file,
            format!("leading marker {} does not match trailing marker {}", marker, trailer),
        ));
    }
    if data.has_remaining() {
        return Err(RawIoError::corrupt(
            file,
            format!("{} unexpected bytes after the first record", data.remaining()),
        ));
    }

    Ok(values)
}

/// Write values to `path` as a single record, replacing any existing file.
pub fn write_record<P: AsRef<Path>>(path: P, values: &[f64]) -> RawIoResult<()> {
    let path = path.as_ref();
    let encoded = encode_record(values)?;

    let mut file = fs::File::create(path).map_err(|e| RawIoError::from_io(path, e))?;
    file.write_all(&encoded)
        .and_then(|_| file.flush())
        .map_err(|e| RawIoError::from_io(path, e))?;

    debug!(file = %path.display(), values = values.len(), "Wrote record");
    Ok(())
}

/// Write an array in its logical element order as a single record.
///
/// Callers pass arrays already arranged the way the solver expects, with
/// layers outermost and the x-like axis varying fastest.
pub fn write_array<P, S, D>(path: P, array: &ArrayBase<S, D>) -> RawIoResult<()>
where
    P: AsRef<Path>,
    S: Data<Elem = f64>,
    D: Dimension,
{
    let values: Vec<f64> = array.iter().copied().collect();
    write_record(path, &values)
}

/// Read the single record stored in `path`.
pub fn read_record<P: AsRef<Path>>(path: P) -> RawIoResult<Vec<f64>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| RawIoError::from_io(path, e))?;
    let values = decode_record(path, Bytes::from(data))?;

    debug!(file = %path.display(), values = values.len(), "Read record");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_encode_layout() {
        let encoded = encode_record(&[1.0, -2.5]).unwrap();
        assert_eq!(encoded.len(), 4 + 16 + 4);
        assert_eq!(&encoded[..4], &16u32.to_le_bytes());
        assert_eq!(&encoded[4..12], &1.0f64.to_le_bytes());
        assert_eq!(&encoded[12..20], &(-2.5f64).to_le_bytes());
        assert_eq!(&encoded[20..], &16u32.to_le_bytes());
    }

    #[test]
    fn test_empty_record() {
        let encoded = encode_record(&[]).unwrap();
        assert_eq!(encoded.len(), 8);
        let decoded = decode_record(&PathBuf::from("empty"), encoded).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_rejects_mismatched_trailer() {
        let mut raw = encode_record(&[3.0]).unwrap().to_vec();
        let n = raw.len();
        raw[n - 4..].copy_from_slice(&9u32.to_le_bytes());
        let err = decode_record(&PathBuf::from("bad"), Bytes::from(raw)).unwrap_err();
        assert!(matches!(err, RawIoError::CorruptRecord { .. }));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let raw = encode_record(&[3.0, 4.0]).unwrap();
        let truncated = raw.slice(..raw.len() - 6);
        assert!(matches!(
            decode_record(&PathBuf::from("short"), truncated),
            Err(RawIoError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut raw = encode_record(&[3.0]).unwrap().to_vec();
        raw.extend_from_slice(&[0, 0, 0, 0]);
        assert!(matches!(
            decode_record(&PathBuf::from("long"), Bytes::from(raw)),
            Err(RawIoError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_partial_value() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&5u32.to_le_bytes());
        raw.extend_from_slice(&[1, 2, 3, 4, 5]);
        raw.extend_from_slice(&5u32.to_le_bytes());
        assert!(matches!(
            decode_record(&PathBuf::from("odd"), Bytes::from(raw)),
            Err(RawIoError::CorruptRecord { .. })
        ));
    }
}
