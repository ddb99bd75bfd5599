//! # HAF Core
//!
//! Core components for the HAF (Hamming Archive Format) archiver.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and container layers:
//!
//! - [`bitstream`]: bit-level I/O (LSB-first within each byte)
//! - [`entry`]: archive entry metadata
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! HAF is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ L4: CLI                                     │
//! │     haf binary, mode dispatch               │
//! ├─────────────────────────────────────────────┤
//! │ L3: Container                               │
//! │     HAF header, Archiver mutation engine    │
//! ├─────────────────────────────────────────────┤
//! │ L2: Codec                                   │
//! │     Hamming block + stream encode/decode    │
//! ├─────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                  │
//! │     BitReader/BitWriter, entries, errors    │
//! └─────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod entry;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use entry::ArchiveEntry;
pub use error::{HafError, Result};
