//! Fixed per-version lookup tables for the quartile (~25%) error correction level.
//!
//! Every table is indexed by `version - 1`. Access goes through [`Version`](crate::version::Version)
//! rather than raw indexing.

/// Byte-mode capacity of each version, in input bytes.
///
/// Version `v` is the smallest one that can hold `n` bytes when `CAPACITY[v - 1] >= n`.
pub static CAPACITY: [u16; 40] = [
    11, 20, 32, 46, 60, 74, 86, 108, 130, 151, 177, 203, 241, 258, 292, 322, 364, 394, 442, 482,
    509, 565, 611, 661, 715, 751, 805, 868, 908, 982, 1030, 1112, 1168, 1228, 1283, 1351, 1423,
    1499, 1579, 1663,
];

/// A run of equally sized error correction blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockGroup {
    pub blocks: u8,
    pub words: u8,
}

/// How the data codewords of one version are split into blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockLayout {
    pub total_data_codewords: u16,
    pub ecc_per_block: u8,
    pub group1: BlockGroup,
    pub group2: BlockGroup,
}

impl BlockLayout {
    const fn new(total: u16, ecc: u8, group1: (u8, u8), group2: (u8, u8)) -> Self {
        Self {
            total_data_codewords: total,
            ecc_per_block: ecc,
            group1: BlockGroup { blocks: group1.0, words: group1.1 },
            group2: BlockGroup { blocks: group2.0, words: group2.1 },
        }
    }

    /// Total number of blocks across both groups.
    pub fn num_blocks(&self) -> usize {
        usize::from(self.group1.blocks) + usize::from(self.group2.blocks)
    }

    /// Data codewords per block, group 1 blocks first.
    pub fn block_lengths(&self) -> impl Iterator<Item = usize> {
        let g1 = std::iter::repeat(usize::from(self.group1.words)).take(self.group1.blocks.into());
        let g2 = std::iter::repeat(usize::from(self.group2.words)).take(self.group2.blocks.into());
        g1.chain(g2)
    }

    /// The longest block's data codeword count.
    pub fn max_block_words(&self) -> usize {
        usize::from(self.group1.words.max(self.group2.words))
    }

    /// Sum of `blocks * words` over both groups.
    pub fn grouped_data_codewords(&self) -> usize {
        usize::from(self.group1.blocks) * usize::from(self.group1.words)
            + usize::from(self.group2.blocks) * usize::from(self.group2.words)
    }

    /// Data plus error correction codewords in the whole symbol.
    pub fn total_codewords(&self) -> usize {
        usize::from(self.total_data_codewords) + self.num_blocks() * usize::from(self.ecc_per_block)
    }
}

/// Block structure per version at the quartile level.
pub static BLOCK_LAYOUTS: [BlockLayout; 40] = [
    BlockLayout::new(  13, 13, ( 1, 13), ( 0,  0)), // 1
    BlockLayout::new(  22, 22, ( 1, 22), ( 0,  0)), // 2
    BlockLayout::new(  34, 18, ( 2, 17), ( 0,  0)), // 3
    BlockLayout::new(  48, 26, ( 2, 24), ( 0,  0)), // 4
    BlockLayout::new(  62, 18, ( 2, 15), ( 2, 16)), // 5
    BlockLayout::new(  76, 24, ( 4, 19), ( 0,  0)), // 6
    BlockLayout::new(  88, 18, ( 2, 14), ( 4, 15)), // 7
    BlockLayout::new( 110, 22, ( 4, 18), ( 2, 19)), // 8
    BlockLayout::new( 132, 20, ( 4, 16), ( 4, 17)), // 9
    BlockLayout::new( 154, 24, ( 6, 19), ( 2, 20)), // 10
    BlockLayout::new( 180, 28, ( 4, 22), ( 4, 23)), // 11
    BlockLayout::new( 206, 26, ( 4, 20), ( 6, 21)), // 12
    BlockLayout::new( 244, 24, ( 8, 20), ( 4, 21)), // 13
    BlockLayout::new( 261, 20, (11, 16), ( 5, 17)), // 14
    BlockLayout::new( 295, 30, ( 5, 24), ( 7, 25)), // 15
    BlockLayout::new( 325, 24, (15, 19), ( 2, 20)), // 16
    BlockLayout::new( 367, 28, ( 1, 22), (15, 23)), // 17
    BlockLayout::new( 397, 28, (17, 22), ( 1, 23)), // 18
    BlockLayout::new( 445, 26, (17, 21), ( 4, 22)), // 19
    BlockLayout::new( 485, 30, (15, 24), ( 5, 25)), // 20
    BlockLayout::new( 512, 28, (17, 22), ( 6, 23)), // 21
    BlockLayout::new( 568, 30, ( 7, 24), (16, 25)), // 22
    BlockLayout::new( 614, 30, (11, 24), (14, 25)), // 23
    BlockLayout::new( 664, 30, (11, 24), (16, 25)), // 24
    BlockLayout::new( 718, 30, ( 7, 24), (22, 25)), // 25
    BlockLayout::new( 754, 28, (28, 22), ( 6, 23)), // 26
    BlockLayout::new( 808, 30, ( 8, 23), (26, 24)), // 27
    BlockLayout::new( 871, 30, ( 4, 24), (31, 25)), // 28
    BlockLayout::new( 911, 30, ( 1, 23), (37, 24)), // 29
    BlockLayout::new( 985, 30, (15, 24), (25, 25)), // 30
    BlockLayout::new(1033, 30, (42, 24), ( 1, 25)), // 31
    BlockLayout::new(1115, 30, (10, 24), (35, 25)), // 32
    BlockLayout::new(1171, 30, (29, 24), (19, 25)), // 33
    BlockLayout::new(1231, 30, (44, 24), ( 7, 25)), // 34
    BlockLayout::new(1286, 30, (39, 24), (14, 25)), // 35
    BlockLayout::new(1354, 30, (46, 24), (10, 25)), // 36
    BlockLayout::new(1426, 30, (49, 24), (10, 25)), // 37
    BlockLayout::new(1502, 30, (48, 24), (14, 25)), // 38
    BlockLayout::new(1582, 30, (43, 24), (22, 25)), // 39
    BlockLayout::new(1666, 30, (34, 24), (34, 25)), // 40
];

/// Alignment pattern center coordinates per version. Every pair is a candidate center.
pub static ALIGNMENT_POSITIONS: [&[u8]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Zero bits appended after the interleaved codewords so the stream fills every data module.
pub static REMAINDER_BITS: [u8; 40] = [
    0, 7, 7, 7, 7, 7, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3,
    3, 3, 0, 0, 0, 0, 0, 0,
];
