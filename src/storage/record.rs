//! On-disk school record format
//!
//! ```text
//! +------------------+
//! | Record Length    | (u32 LE, whole record including this field)
//! +------------------+
//! | School ID        | (u64 LE)
//! +------------------+
//! | Name             | (length-prefixed UTF-8)
//! +------------------+
//! | Address          | (length-prefixed UTF-8)
//! +------------------+
//! | Latitude         | (f64 LE)
//! +------------------+
//! | Longitude        | (f64 LE)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 of all preceding bytes)
//! +------------------+
//! ```

use std::io::{self, Cursor, Read};

use super::checksum::compute_checksum;
use crate::school::School;

/// Smallest possible record: two empty strings.
pub const MIN_RECORD_SIZE: usize = 4 + 8 + 4 + 4 + 8 + 8 + 4;

/// Serialize a school into a framed, checksummed record.
pub fn encode(school: &School) -> Vec<u8> {
    let mut body = Vec::with_capacity(32 + school.name.len() + school.address.len());
    body.extend_from_slice(&school.id.to_le_bytes());
    write_string(&mut body, &school.name);
    write_string(&mut body, &school.address);
    body.extend_from_slice(&school.latitude.to_le_bytes());
    body.extend_from_slice(&school.longitude.to_le_bytes());

    let record_length = (4 + body.len() + 4) as u32;

    let mut record = Vec::with_capacity(record_length as usize);
    record.extend_from_slice(&record_length.to_le_bytes());
    record.extend_from_slice(&body);
    let checksum = compute_checksum(&record);
    record.extend_from_slice(&checksum.to_le_bytes());

    record
}

/// Decode one record from the front of `data`, verifying its checksum.
///
/// Returns the school and the number of bytes consumed.
pub fn decode(data: &[u8]) -> io::Result<(School, usize)> {
    if data.len() < MIN_RECORD_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("Record truncated: {} bytes remaining", data.len()),
        ));
    }

    let record_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    if record_length < MIN_RECORD_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid record length: {}", record_length),
        ));
    }

    if data.len() < record_length {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "Record truncated: expected {} bytes, got {}",
                record_length,
                data.len()
            ),
        ));
    }

    let checksum_offset = record_length - 4;
    let stored = u32::from_le_bytes([
        data[checksum_offset],
        data[checksum_offset + 1],
        data[checksum_offset + 2],
        data[checksum_offset + 3],
    ]);
    let computed = compute_checksum(&data[..checksum_offset]);

    if computed != stored {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Checksum mismatch: computed {:08x}, stored {:08x}",
                computed, stored
            ),
        ));
    }

    let mut cursor = Cursor::new(&data[4..checksum_offset]);
    let id = u64::from_le_bytes(read_array(&mut cursor)?);
    let name = read_string(&mut cursor)?;
    let address = read_string(&mut cursor)?;
    let latitude = f64::from_le_bytes(read_array(&mut cursor)?);
    let longitude = f64::from_le_bytes(read_array(&mut cursor)?);

    Ok((
        School {
            id,
            name,
            address,
            latitude,
            longitude,
        },
        record_length,
    ))
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn read_array<R: Read, const N: usize>(reader: &mut R) -> io::Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

fn read_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let len = u32::from_le_bytes(read_array(reader)?) as usize;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> School {
        School {
            id: 17,
            name: "Green Valley".to_string(),
            address: "42 Hill Road".to_string(),
            latitude: 28.6139,
            longitude: -77.209,
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let encoded = encode(&sample());
        let (decoded, consumed) = decode(&encoded).unwrap();
        assert_eq!(decoded, sample());
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn test_decode_consumes_only_first_record() {
        let mut bytes = encode(&sample());
        let first_len = bytes.len();
        bytes.extend_from_slice(&encode(&School { id: 18, ..sample() }));

        let (_, consumed) = decode(&bytes).unwrap();
        assert_eq!(consumed, first_len);
        let (second, _) = decode(&bytes[consumed..]).unwrap();
        assert_eq!(second.id, 18);
    }

    #[test]
    fn test_checksum_detects_corruption() {
        let mut encoded = encode(&sample());
        let mid = encoded.len() / 2;
        encoded[mid] ^= 0xFF;

        let err = decode(&encoded).unwrap_err();
        assert!(err.to_string().contains("Checksum mismatch"));
    }

    #[test]
    fn test_truncated_record() {
        let encoded = encode(&sample());
        let err = decode(&encoded[..encoded.len() - 3]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
