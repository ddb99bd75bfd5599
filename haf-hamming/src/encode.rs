//! Streaming Hamming encoding.

use crate::codec::HammingCodec;
use haf_core::bitstream::BitWriter;
use haf_core::error::Result;
use std::io::{ErrorKind, Read, Write};

impl HammingCodec {
    /// Encode a whole byte stream.
    ///
    /// Input bytes are unpacked LSB-first into k-bit data blocks; each block
    /// becomes an n-bit codeword pushed LSB-first into the output. A nonempty
    /// partial final block is zero-extended to k bits before encoding. The
    /// output is flushed with the final byte zero-padded.
    ///
    /// Returns the number of encoded bytes written.
    pub fn encode_stream<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<u64> {
        let mut writer = BitWriter::new(output);

        let mut block = 0u32;
        let mut block_bits = 0u8;
        let mut byte = [0u8; 1];

        loop {
            match input.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    for bit_index in 0..8 {
                        if (byte[0] >> bit_index) & 1 == 1 {
                            block |= 1 << block_bits;
                        }
                        block_bits += 1;

                        if block_bits == self.data_bits() {
                            writer.write_bits(self.encode_block(block), self.total_bits())?;
                            block = 0;
                            block_bits = 0;
                        }
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if block_bits > 0 {
            writer.write_bits(self.encode_block(block), self.total_bits())?;
        }

        writer.flush()?;
        Ok(writer.bits_written() / 8)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::HammingCodec;
    use crate::options::HammingOptions;

    fn encode_to_vec(codec: &HammingCodec, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::new();
        let written = codec.encode_stream(input, &mut output).unwrap();
        assert_eq!(written, output.len() as u64);
        output
    }

    #[test]
    fn test_empty_input_produces_no_output() {
        let codec = HammingCodec::new(HammingOptions::DEFAULT);
        assert!(encode_to_vec(&codec, &[]).is_empty());
    }

    #[test]
    fn test_output_matches_size_formula() {
        let codec = HammingCodec::new(HammingOptions::new(4, 3).unwrap());
        for len in [1usize, 2, 3, 7, 8, 64, 255] {
            let input: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let encoded = encode_to_vec(&codec, &input);
            assert_eq!(encoded.len() as u64, codec.encoded_len(len as u64));
        }
    }

    #[test]
    fn test_single_byte_default_parameters() {
        // k = 8: one input byte is exactly one data block, so the first
        // 12 output bits are its codeword followed by 4 padding zeros.
        let codec = HammingCodec::new(HammingOptions::DEFAULT);
        let encoded = encode_to_vec(&codec, &[0xA7]);
        assert_eq!(encoded.len(), 2);

        let codeword = codec.encode_block(0xA7);
        assert_eq!(u32::from(encoded[0]), codeword & 0xFF);
        assert_eq!(u32::from(encoded[1]), codeword >> 8);
    }
}
