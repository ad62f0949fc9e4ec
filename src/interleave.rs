use crate::bits::BitBuffer;
use crate::ecc::Block;
use crate::version::Version;

/// Builds the final bit stream: data codewords column by column across blocks, then the
/// error correction codewords the same way, then the version's remainder bits.
pub fn interleave(blocks: &[Block], version: Version) -> BitBuffer {
    let layout = version.block_layout();
    let total_bits = layout.total_codewords() * 8 + usize::from(version.remainder_bits());
    let mut bb = BitBuffer::with_capacity(total_bits);

    for i in 0..layout.max_block_words() {
        for block in blocks {
            if let Some(&codeword) = block.data.get(i) {
                bb.append_codeword(codeword);
            }
        }
    }
    for i in 0..usize::from(layout.ecc_per_block) {
        for block in blocks {
            if let Some(&codeword) = block.ecc.get(i) {
                bb.append_codeword(codeword);
            }
        }
    }
    bb.append_bits(0, version.remainder_bits());
    bb
}
