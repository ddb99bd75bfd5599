//! HAF header serialization and layout arithmetic.
//!
//! An archive starts with the three-byte magic `HAF`, a u32 LE file count,
//! and one serialized [`ArchiveEntry`] per file in payload order:
//! `(u16 LE name_len, name bytes, u64 LE original_size, u64 LE encoded_size,
//! u64 LE offset)`. No alignment, no padding. Encoded payloads follow the
//! header back to back.

use haf_core::entry::ArchiveEntry;
use haf_core::error::{HafError, Result};
use std::io::{Read, Write};

/// HAF magic bytes.
pub const MAGIC: [u8; 3] = *b"HAF";

/// Fixed header bytes before the entry records: magic plus file count.
pub const FIXED_HEADER_LEN: u64 = 3 + 4;

/// Serialized header size for the given entries.
pub fn header_size(entries: &[ArchiveEntry]) -> u64 {
    FIXED_HEADER_LEN + entries.iter().map(ArchiveEntry::header_len).sum::<u64>()
}

/// Assign contiguous payload offsets: the first entry starts right after the
/// header, each subsequent entry right after its predecessor.
pub fn assign_offsets(entries: &mut [ArchiveEntry]) {
    let mut offset = header_size(entries);
    for entry in entries {
        entry.offset = offset;
        offset += entry.encoded_size;
    }
}

/// Write the archive header.
pub fn write_header<W: Write>(writer: &mut W, entries: &[ArchiveEntry]) -> Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&(entries.len() as u32).to_le_bytes())?;

    for entry in entries {
        let name_len = u16::try_from(entry.name.len()).map_err(|_| {
            HafError::invalid_header(format!("entry name too long: {} bytes", entry.name.len()))
        })?;

        writer.write_all(&name_len.to_le_bytes())?;
        writer.write_all(&entry.name)?;
        writer.write_all(&entry.original_size.to_le_bytes())?;
        writer.write_all(&entry.encoded_size.to_le_bytes())?;
        writer.write_all(&entry.offset.to_le_bytes())?;
    }

    Ok(())
}

/// Read and validate the archive header, returning the entries in stored
/// order. Any short read is an error.
pub fn read_header<R: Read>(reader: &mut R) -> Result<Vec<ArchiveEntry>> {
    let mut magic = [0u8; 3];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(HafError::invalid_magic(MAGIC.to_vec(), magic.to_vec()));
    }

    let file_count = read_u32(reader)?;
    let mut entries = Vec::with_capacity(file_count.min(1024) as usize);

    for _ in 0..file_count {
        let name_len = read_u16(reader)? as usize;
        // Names are raw bytes; they round-trip without charset validation.
        let mut name = vec![0u8; name_len];
        reader.read_exact(&mut name)?;

        let original_size = read_u64(reader)?;
        let encoded_size = read_u64(reader)?;
        let offset = read_u64(reader)?;

        entries.push(ArchiveEntry {
            name,
            original_size,
            encoded_size,
            offset,
        });
    }

    Ok(entries)
}

fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_entries() -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry::new("alpha.bin", 100, 150),
            ArchiveEntry::new("beta.txt", 0, 0),
            ArchiveEntry::new("gamma", 65536, 98304),
        ]
    }

    #[test]
    fn test_header_size_arithmetic() {
        let entries = sample_entries();
        // 7 fixed + (2 + 9 + 24) + (2 + 8 + 24) + (2 + 5 + 24)
        assert_eq!(header_size(&entries), 7 + 35 + 34 + 31);
        assert_eq!(header_size(&[]), FIXED_HEADER_LEN);
    }

    #[test]
    fn test_assign_offsets_is_contiguous() {
        let mut entries = sample_entries();
        assign_offsets(&mut entries);

        assert_eq!(entries[0].offset, header_size(&entries));
        assert_eq!(entries[1].offset, entries[0].offset + entries[0].encoded_size);
        assert_eq!(entries[2].offset, entries[1].offset + entries[1].encoded_size);
    }

    #[test]
    fn test_header_roundtrip() {
        let mut entries = sample_entries();
        assign_offsets(&mut entries);

        let mut buf = Vec::new();
        write_header(&mut buf, &entries).unwrap();
        assert_eq!(buf.len() as u64, header_size(&entries));

        let parsed = read_header(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_empty_archive_header() {
        let mut buf = Vec::new();
        write_header(&mut buf, &[]).unwrap();

        let parsed = read_header(&mut Cursor::new(&buf)).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_non_utf8_names_roundtrip_untouched() {
        let mut entries = vec![
            ArchiveEntry::new(&b"caf\xE9.bin"[..], 10, 15),
            ArchiveEntry::new(&b"\xFF\xFE"[..], 1, 2),
        ];
        assign_offsets(&mut entries);

        let mut buf = Vec::new();
        write_header(&mut buf, &entries).unwrap();

        let parsed = read_header(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(parsed, entries);
        assert_eq!(parsed[0].name, b"caf\xE9.bin");
        assert_eq!(parsed[1].name, b"\xFF\xFE");
    }

    #[test]
    fn test_bad_magic_is_rejected() {
        let mut buf = Vec::new();
        write_header(&mut buf, &sample_entries()).unwrap();
        buf[0] ^= 0x01;

        let err = read_header(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, HafError::InvalidMagic { .. }));
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let mut entries = sample_entries();
        assign_offsets(&mut entries);

        let mut buf = Vec::new();
        write_header(&mut buf, &entries).unwrap();

        for len in [2, 5, 9, buf.len() - 1] {
            assert!(read_header(&mut Cursor::new(&buf[..len])).is_err());
        }
    }

    #[test]
    fn test_name_length_beyond_input_is_an_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&500u16.to_le_bytes());
        buf.extend_from_slice(b"short");

        assert!(read_header(&mut Cursor::new(&buf)).is_err());
    }
}
