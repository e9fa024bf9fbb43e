//! Body table records (§3, §6.1): `{ id: i32, name: utf8[<=23]+NUL, data_offset: u64 }`.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::error::ContainerError;
use crate::header::BODY_RECORD_BYTES;

/// Fixed width of the name field, including its terminating NUL.
const NAME_FIELD_BYTES: usize = 24;

/// A single body table entry, as read from or written to a container.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub id: i32,
    pub name: String,
    pub data_offset: u64,
}

/// Truncate `name` to fit in `NAME_FIELD_BYTES - 1` bytes (reserving the NUL)
/// and NUL-pad the remainder (§4.3 edge case).
fn encode_name(name: &str) -> [u8; NAME_FIELD_BYTES] {
    let mut buf = [0u8; NAME_FIELD_BYTES];
    let bytes = name.as_bytes();
    let copy_len = bytes.len().min(NAME_FIELD_BYTES - 1);
    buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
    buf
}

fn decode_name(buf: &[u8; NAME_FIELD_BYTES]) -> String {
    let nul_pos = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..nul_pos]).into_owned()
}

pub fn write_body_record<W: Write>(w: &mut W, record: &BodyRecord) -> Result<(), ContainerError> {
    w.write_i32::<LittleEndian>(record.id)?;
    w.write_all(&encode_name(&record.name))?;
    w.write_u64::<LittleEndian>(record.data_offset)?;
    Ok(())
}

pub fn read_body_record<R: Read>(r: &mut R) -> Result<BodyRecord, ContainerError> {
    let id = r.read_i32::<LittleEndian>()?;
    let mut name_buf = [0u8; NAME_FIELD_BYTES];
    r.read_exact(&mut name_buf)?;
    let data_offset = r.read_u64::<LittleEndian>()?;
    Ok(BodyRecord {
        id,
        name: decode_name(&name_buf),
        data_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_record_roundtrip() {
        let record = BodyRecord {
            id: 399,
            name: "Earth".to_string(),
            data_offset: 4096,
        };
        let mut buf = Vec::new();
        write_body_record(&mut buf, &record).unwrap();
        assert_eq!(buf.len(), BODY_RECORD_BYTES);

        let mut cursor = std::io::Cursor::new(buf);
        let decoded = read_body_record(&mut cursor).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn long_name_is_truncated_and_nul_padded() {
        let record = BodyRecord {
            id: 1,
            name: "a-name-that-is-far-too-long-for-the-field".to_string(),
            data_offset: 0,
        };
        let mut buf = Vec::new();
        write_body_record(&mut buf, &record).unwrap();

        let mut cursor = std::io::Cursor::new(buf);
        let decoded = read_body_record(&mut cursor).unwrap();
        assert_eq!(decoded.name.len(), NAME_FIELD_BYTES - 1);
        assert!(record.name.starts_with(&decoded.name));
    }
}
