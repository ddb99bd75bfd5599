//! # HAF Hamming
//!
//! Parametric Hamming single-error-correcting codec for the HAF archiver.
//!
//! The codec is configured with k data bits and r parity bits per block
//! ([`HammingOptions`]); every k-bit slice of the input becomes an n = k + r
//! bit codeword. A single flipped bit inside a codeword is silently repaired
//! on decode; corruption the code cannot repair fails the decode.
//!
//! [`HammingCodec`] offers both block-level operations and streaming
//! wrappers that pack codewords into byte streams LSB-first.
//!
//! ## Example
//!
//! ```
//! use haf_hamming::{HammingCodec, HammingOptions};
//! use std::io::Cursor;
//!
//! let codec = HammingCodec::new(HammingOptions::DEFAULT);
//!
//! let mut encoded = Vec::new();
//! codec.encode_stream(&b"hello"[..], &mut encoded).unwrap();
//!
//! // Flip one bit anywhere in the payload; the decoder repairs it.
//! encoded[3] ^= 0x10;
//!
//! let mut decoded = Vec::new();
//! codec
//!     .decode_stream(Cursor::new(&encoded), &mut decoded, 5)
//!     .unwrap();
//! assert_eq!(decoded, b"hello");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod options;

mod decode;
mod encode;

// Re-exports for convenience
pub use codec::HammingCodec;
pub use options::{HammingOptions, MAX_DATA_BITS, MAX_PARITY_BITS};
