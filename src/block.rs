//! Block header parsing: dispatch on `BTYPE`, and the dynamic Huffman
//! code-length alphabet used to build the literal/length and distance
//! tables for `BTYPE == 2` blocks.
use std::sync::OnceLock;

use crate::bitstream::BitStreamReader;
use crate::constants::{
    NUM_LITLEN_SYMS, NUM_PRECODE_SYMS, PRECODE_LENS_PERMUTATION
};
use crate::errors::{Error, Result};
use crate::huffman::HuffmanTable;

/// Lengths for RFC 1951's fixed (static) literal/length code: 8 bits for
/// symbols 0-143 and 280-287, 9 bits for 144-255, 7 bits for 256-279.
fn fixed_litlen_lengths() -> [u8; NUM_LITLEN_SYMS]
{
    let mut lens = [0u8; NUM_LITLEN_SYMS];
    lens[0..144].fill(8);
    lens[144..256].fill(9);
    lens[256..280].fill(7);
    lens[280..288].fill(8);
    lens
}

/// Lengths for RFC 1951's fixed distance code: all 30 used symbols get 5 bits.
fn fixed_dist_lengths() -> [u8; 30]
{
    [5u8; 30]
}

/// The two fixed-Huffman tables are process-wide immutable values, built
/// once on first use rather than per decode.
pub fn fixed_tables() -> (&'static HuffmanTable, &'static HuffmanTable)
{
    static LITLEN: OnceLock<HuffmanTable> = OnceLock::new();
    static DIST: OnceLock<HuffmanTable> = OnceLock::new();

    let litlen = LITLEN.get_or_init(|| {
        HuffmanTable::build(&fixed_litlen_lengths()).expect("fixed litlen lengths are valid")
    });
    let dist = DIST.get_or_init(|| {
        HuffmanTable::build(&fixed_dist_lengths()).expect("fixed distance lengths are valid")
    });

    (litlen, dist)
}

/// Read a dynamic Huffman block's header and build its litlen/distance
/// tables, per RFC 1951 §3.2.7.
pub fn build_dynamic_tables(reader: &mut BitStreamReader) -> Result<(HuffmanTable, HuffmanTable)>
{
    let hlit = reader.read_bits(5)? as usize + 257;
    let hdist = reader.read_bits(5)? as usize + 1;
    let hclen = reader.read_bits(4)? as usize + 4;

    let mut cl_lengths = [0u8; NUM_PRECODE_SYMS];

    for &position in PRECODE_LENS_PERMUTATION.iter().take(hclen)
    {
        cl_lengths[position] = reader.read_bits(3)? as u8;
    }

    let cl_table = HuffmanTable::build(&cl_lengths)?;

    let total = hlit + hdist;
    let mut lengths = Vec::with_capacity(total);

    while lengths.len() < total
    {
        let symbol = cl_table.decode_symbol(reader)?;

        match symbol
        {
            0..=15 => lengths.push(symbol as u8),
            16 =>
            {
                let &prev = lengths.last().ok_or(Error::InvalidHuffmanCode)?;
                let repeat = 3 + reader.read_bits(2)?;

                for _ in 0..repeat
                {
                    lengths.push(prev);
                }
            }
            17 =>
            {
                let repeat = 3 + reader.read_bits(3)?;

                for _ in 0..repeat
                {
                    lengths.push(0);
                }
            }
            18 =>
            {
                let repeat = 11 + reader.read_bits(7)?;

                for _ in 0..repeat
                {
                    lengths.push(0);
                }
            }
            _ => return Err(Error::InvalidHuffmanCode)
        }
    }

    lengths.truncate(total);

    let litlen_table = HuffmanTable::build(&lengths[..hlit])?;
    let dist_table = HuffmanTable::build(&lengths[hlit..])?;

    Ok((litlen_table, dist_table))
}
