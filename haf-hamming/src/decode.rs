//! Streaming Hamming decoding.

use crate::codec::HammingCodec;
use haf_core::bitstream::{BitReader, BitWriter};
use haf_core::error::{HafError, Result};
use std::io::{Read, Write};

impl HammingCodec {
    /// Decode an encoded stream back into the original bytes.
    ///
    /// The caller supplies `original_size`, the exact byte length of the
    /// unencoded input; the decoder pulls exactly
    /// `ceil(original_size * 8 / k) * n` bits from `input` and is never
    /// driven by EOF. The final block is trimmed to the original bit count,
    /// discarding the encoder's zero padding.
    ///
    /// A block whose corruption cannot be repaired fails the whole operation
    /// with [`HafError::Uncorrectable`].
    pub fn decode_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        original_size: u64,
    ) -> Result<()> {
        if original_size == 0 {
            return Ok(());
        }

        let data_bits = u64::from(self.data_bits());
        let original_bits = original_size * 8;
        let codeword_count = original_bits.div_ceil(data_bits);

        let mut reader = BitReader::new(input);
        let mut writer = BitWriter::new(output);
        let mut bits_emitted = 0u64;

        for block_index in 0..codeword_count {
            let codeword = reader.read_bits(self.total_bits())?;
            let data = self
                .decode_block(codeword)
                .ok_or_else(|| HafError::uncorrectable(block_index))?;

            // The final block may carry padding past the original bit count.
            let take = data_bits.min(original_bits - bits_emitted) as u8;
            writer.write_bits(data, take)?;
            bits_emitted += u64::from(take);
        }

        writer.flush()?;
        Ok(())
    }
}
