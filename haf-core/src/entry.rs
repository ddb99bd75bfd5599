//! Archive entry metadata.
//!
//! An [`ArchiveEntry`] is one file's record inside a HAF header: its basename,
//! the exact size of the unencoded input, the exact size of its encoded
//! payload, and the absolute offset of that payload within the archive.

use std::borrow::Cow;

/// One file's metadata inside an archive.
///
/// Entries carry basenames only; the format cannot represent directory
/// structure. The name is a raw byte string exactly as stored in the header —
/// no charset validation, no path components — and round-trips untouched.
/// `offset` is assigned when the header is laid out and is meaningless
/// before that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Basename of the file within the archive, as raw bytes.
    pub name: Vec<u8>,
    /// Exact byte length of the unencoded input.
    pub original_size: u64,
    /// Exact byte length of the encoded payload inside the archive.
    pub encoded_size: u64,
    /// Absolute byte offset of the encoded payload from the archive start.
    pub offset: u64,
}

impl ArchiveEntry {
    /// Create an entry with a zero offset.
    pub fn new(name: impl Into<Vec<u8>>, original_size: u64, encoded_size: u64) -> Self {
        Self {
            name: name.into(),
            original_size,
            encoded_size,
            offset: 0,
        }
    }

    /// The name decoded for display. Non-UTF-8 bytes render as U+FFFD; the
    /// stored [`ArchiveEntry::name`] bytes are never altered.
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Number of bytes this entry occupies inside the serialized header:
    /// a u16 name length, the name bytes, and three u64 fields.
    pub fn header_len(&self) -> u64 {
        2 + self.name.len() as u64 + 8 + 8 + 8
    }
}

impl std::fmt::Display for ArchiveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} bytes)", self.display_name(), self.original_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = ArchiveEntry::new("report.txt", 1024, 1536);
        assert_eq!(entry.to_string(), "report.txt (1024 bytes)");
    }

    #[test]
    fn test_display_is_lossy_but_name_bytes_are_not() {
        let entry = ArchiveEntry::new(&b"caf\xE9.bin"[..], 10, 15);
        assert_eq!(entry.name, b"caf\xE9.bin");
        assert_eq!(entry.display_name(), "caf\u{FFFD}.bin");
    }

    #[test]
    fn test_header_len() {
        let entry = ArchiveEntry::new("abc", 0, 0);
        assert_eq!(entry.header_len(), 2 + 3 + 24);

        let entry = ArchiveEntry::new("", 0, 0);
        assert_eq!(entry.header_len(), 26);
    }
}
