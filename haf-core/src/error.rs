//! Error types for HAF operations.
//!
//! A single error enum covers every failure class of the archiver: argument
//! validation, filesystem access, archive format violations, codec failures,
//! and plain I/O. The codec and container crates all return this type.

use std::io;
use thiserror::Error;

/// The main error type for HAF operations.
#[derive(Debug, Error)]
pub enum HafError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in the archive header.
    #[error("invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// Malformed archive header.
    #[error("invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input: expected {expected} more byte(s)")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Invalid parameter supplied by the caller.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected parameter.
        message: String,
    },

    /// A codeword could not be corrected during decoding.
    #[error("uncorrectable corruption in codeword {block_index}")]
    Uncorrectable {
        /// Zero-based index of the failing codeword within its payload.
        block_index: u64,
    },

    /// A requested entry does not exist in the archive.
    #[error("file not found in archive: {name}")]
    EntryNotFound {
        /// Name of the missing entry.
        name: String,
    },

    /// An input file does not exist or is not a regular file.
    #[error("input file not found: {path}")]
    InputNotFound {
        /// The offending path.
        path: String,
    },

    /// A delete request matched no entries.
    #[error("no specified files were deleted")]
    NothingDeleted,
}

/// Result type alias for HAF operations.
pub type Result<T> = std::result::Result<T, HafError>;

impl HafError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an uncorrectable codeword error.
    pub fn uncorrectable(block_index: u64) -> Self {
        Self::Uncorrectable { block_index }
    }

    /// Create an entry not found error.
    pub fn entry_not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound { name: name.into() }
    }

    /// Create an input not found error.
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }
}
