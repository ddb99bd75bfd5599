//! Block-level Hamming encoding and decoding.
//!
//! Positions are 1-indexed within a codeword of n = k + r bits. Power-of-two
//! positions carry parity; the remaining positions carry data bits in order.
//! Position `p` occupies bit `p - 1` of the codeword integer. The parity bit
//! at position `2^j` covers every position `q` with `q & 2^j != 0`.

use crate::options::HammingOptions;

/// A parametric Hamming codec for fixed-size data blocks.
///
/// Constructed from [`HammingOptions`]; see the caveat there about parameter
/// combinations that cannot correct every single-bit error.
#[derive(Debug, Clone, Copy)]
pub struct HammingCodec {
    data_bits: u8,
    parity_bits: u8,
    total_bits: u8,
}

/// Whether a 1-indexed codeword position is a parity slot.
fn is_parity_position(position: u32) -> bool {
    position & (position - 1) == 0
}

impl HammingCodec {
    /// Create a codec from validated options.
    pub fn new(options: HammingOptions) -> Self {
        Self {
            data_bits: options.data_bits,
            parity_bits: options.parity_bits,
            total_bits: options.total_bits(),
        }
    }

    /// Data bits per block (k).
    pub fn data_bits(&self) -> u8 {
        self.data_bits
    }

    /// Parity bits per block (r).
    pub fn parity_bits(&self) -> u8 {
        self.parity_bits
    }

    /// Total bits per codeword (n).
    pub fn total_bits(&self) -> u8 {
        self.total_bits
    }

    /// Encoded payload length in bytes for an input of `original_size` bytes.
    ///
    /// Every k-bit slice of the input (the last one zero-extended) becomes an
    /// n-bit codeword; the codeword stream is packed into bytes with the
    /// final byte zero-padded.
    pub fn encoded_len(&self, original_size: u64) -> u64 {
        let original_bits = original_size * 8;
        let codeword_count = original_bits.div_ceil(u64::from(self.data_bits));
        (codeword_count * u64::from(self.total_bits)).div_ceil(8)
    }

    /// Encode a data block in `[0, 2^k)` into a codeword in `[0, 2^n)`.
    pub fn encode_block(&self, data: u32) -> u32 {
        let mut codeword = self.scatter_data(data);

        // Parity slots are still zero here, so the syndrome of the scattered
        // data is exactly the parity pattern to store.
        let checks = self.syndrome(codeword);
        let mut parity_position = 1u32;
        while parity_position <= u32::from(self.total_bits) {
            if checks & parity_position != 0 {
                codeword |= 1 << (parity_position - 1);
            }
            parity_position <<= 1;
        }

        codeword
    }

    /// Decode a codeword, repairing at most one flipped bit.
    ///
    /// Returns the data block, or `None` if the corruption is uncorrectable:
    /// the syndrome names a position beyond the codeword, or the repaired
    /// codeword still fails a parity check.
    pub fn decode_block(&self, codeword: u32) -> Option<u32> {
        let syndrome = self.syndrome(codeword);
        if syndrome == 0 {
            return Some(self.extract_data(codeword));
        }
        if syndrome > u32::from(self.total_bits) {
            return None;
        }

        let repaired = codeword ^ (1 << (syndrome - 1));
        if self.syndrome(repaired) != 0 {
            return None;
        }
        Some(self.extract_data(repaired))
    }

    /// Place the low k bits of `data` into the non-parity positions, in order.
    fn scatter_data(&self, data: u32) -> u32 {
        let mut codeword = 0u32;
        let mut data_index = 0u32;
        for position in 1..=u32::from(self.total_bits) {
            if is_parity_position(position) {
                continue;
            }
            if (data >> data_index) & 1 == 1 {
                codeword |= 1 << (position - 1);
            }
            data_index += 1;
        }
        codeword
    }

    /// Collect the data bits back out of the non-parity positions.
    fn extract_data(&self, codeword: u32) -> u32 {
        let mut data = 0u32;
        let mut data_index = 0u32;
        for position in 1..=u32::from(self.total_bits) {
            if is_parity_position(position) {
                continue;
            }
            if (codeword >> (position - 1)) & 1 == 1 {
                data |= 1 << data_index;
            }
            data_index += 1;
        }
        data
    }

    /// XOR of the failing parity positions, parity bits included. Zero means
    /// every check passed; a value in `1..=n` names the flipped position.
    fn syndrome(&self, codeword: u32) -> u32 {
        let total = u32::from(self.total_bits);
        let mut syndrome = 0u32;

        let mut parity_position = 1u32;
        while parity_position <= total {
            let mut parity = 0u32;
            for position in 1..=total {
                if position & parity_position != 0 {
                    parity ^= (codeword >> (position - 1)) & 1;
                }
            }
            if parity != 0 {
                syndrome |= parity_position;
            }
            parity_position <<= 1;
        }

        syndrome
    }
}
