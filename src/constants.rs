//! RFC 1951 constant tables.

/// Number of symbols in the code-length (precode) alphabet.
pub const NUM_PRECODE_SYMS: usize = 19;

/// Number of symbols in the literal/length alphabet (0-255 literals, 256
/// end-of-block, 257-287 length codes; 286 and 287 are reserved).
pub const NUM_LITLEN_SYMS: usize = 288;

/// Number of symbols in the distance alphabet (0-29 used, 30-31 reserved).
pub const NUM_DISTANCE_SYMS: usize = 32;

/// Longest codeword length any of the three alphabets may use.
pub const MAX_CODEWORD_LENGTH: usize = 15;

/// Order in which the code-length alphabet's codeword lengths are stored in
/// a dynamic Huffman block header.
pub static PRECODE_LENS_PERMUTATION: [usize; NUM_PRECODE_SYMS] = [
    16, 17, 18, 0, 8, 7, 9, 6, 10, 5, 11, 4, 12, 3, 13, 2, 14, 1, 15,
];

/// Base length (in bytes) for each length symbol 257..=285 (index = symbol - 257).
pub static LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258,
];

/// Number of extra bits following each length symbol.
pub static LENGTH_EXTRA_BITS: [u32; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Base distance (in bytes) for each distance symbol 0..=29.
pub static DIST_BASE: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// Number of extra bits following each distance symbol.
pub static DIST_EXTRA_BITS: [u32; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

/// End-of-block symbol in the literal/length alphabet.
pub const END_OF_BLOCK_SYMBOL: u16 = 256;

/// Maximum back-reference distance (the sliding window size).
pub const MAX_DISTANCE: usize = 32768;

/// Maximum back-reference length (`LENGTH_BASE[28]`).
pub const MAX_MATCH_LENGTH: usize = 258;

/// Largest `LEN` a stored block's 16-bit length field can hold.
pub const MAX_STORED_BLOCK_LEN: usize = u16::MAX as usize;

pub const DEFLATE_BLOCKTYPE_UNCOMPRESSED: u64 = 0;
pub const DEFLATE_BLOCKTYPE_STATIC: u64 = 1;
pub const DEFLATE_BLOCKTYPE_DYNAMIC_HUFFMAN: u64 = 2;
pub const DEFLATE_BLOCKTYPE_RESERVED: u64 = 3;
