//! Hamming code parameters.

use haf_core::error::{HafError, Result};

/// Maximum number of data bits per block.
pub const MAX_DATA_BITS: u8 = 16;

/// Maximum number of parity bits per block.
pub const MAX_PARITY_BITS: u8 = 8;

/// Hamming code parameters: `data_bits` (k) and `parity_bits` (r) per block.
///
/// A codeword carries `k + r` bits, so with the maxima above a codeword never
/// exceeds 24 bits and fits a `u32`.
///
/// # Caveat
///
/// [`HammingOptions::new`] only enforces the ranges `1..=16` and `1..=8`. It
/// does **not** require `2^r >= k + r + 1`, the condition under which the
/// code can place every data bit and correct every single-bit error.
/// Parameters violating it are accepted and produce undetected
/// miscorrection; use [`HammingOptions::is_single_error_correcting`] to
/// check before committing data to such a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingOptions {
    /// Data bits per block (k), in `1..=16`.
    pub data_bits: u8,
    /// Parity bits per block (r), in `1..=8`.
    pub parity_bits: u8,
}

impl HammingOptions {
    /// The default parameters: 8 data bits, 4 parity bits (a 12-bit codeword).
    pub const DEFAULT: Self = Self {
        data_bits: 8,
        parity_bits: 4,
    };

    /// Create validated parameters.
    ///
    /// Only the ranges are checked; see the type-level caveat.
    pub fn new(data_bits: u8, parity_bits: u8) -> Result<Self> {
        if data_bits == 0 || data_bits > MAX_DATA_BITS {
            return Err(HafError::invalid_parameter(format!(
                "data bits must be in 1..={MAX_DATA_BITS}, got {data_bits}"
            )));
        }
        if parity_bits == 0 || parity_bits > MAX_PARITY_BITS {
            return Err(HafError::invalid_parameter(format!(
                "parity bits must be in 1..={MAX_PARITY_BITS}, got {parity_bits}"
            )));
        }
        Ok(Self {
            data_bits,
            parity_bits,
        })
    }

    /// Total bits per codeword (n = k + r).
    pub fn total_bits(&self) -> u8 {
        self.data_bits + self.parity_bits
    }

    /// Whether these parameters satisfy `2^r >= k + r + 1`, i.e. whether the
    /// code can hold k data bits and name every codeword position in its
    /// syndrome. Parameters failing this check still encode and decode, but
    /// single-bit errors may be miscorrected and some data bits are dropped.
    pub fn is_single_error_correcting(&self) -> bool {
        let k = u32::from(self.data_bits);
        let r = u32::from(self.parity_bits);
        (1u32 << r) >= k + r + 1
    }
}

impl Default for HammingOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
