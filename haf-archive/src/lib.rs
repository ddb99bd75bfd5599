//! # HAF Archive
//!
//! Container format and mutation engine for the HAF (Hamming Archive
//! Format) archiver.
//!
//! - [`format`]: header serialization and layout arithmetic
//! - [`archive`]: the [`Archiver`] engine — create / list / extract /
//!   append / delete / concatenate
//!
//! Payloads are protected per file by the parametric Hamming codec from
//! `haf-hamming`; mutations copy already-encoded payload bytes verbatim
//! rather than re-encoding them.
//!
//! ## Example
//!
//! ```no_run
//! use haf_archive::Archiver;
//! use haf_hamming::HammingOptions;
//!
//! let archiver = Archiver::new("backup.haf", HammingOptions::DEFAULT);
//! archiver.create(&["notes.txt".into(), "data.bin".into()]).unwrap();
//! for entry in archiver.list().unwrap() {
//!     println!("{entry}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod format;

// Re-exports
pub use archive::Archiver;
pub use haf_core::entry::ArchiveEntry;
pub use haf_core::error::{HafError, Result};
