//! LZ77 back-reference expansion: turns a stream of literal/length and
//! distance symbols into output bytes.
use crate::bitstream::BitStreamReader;
use crate::constants::{DIST_BASE, DIST_EXTRA_BITS, END_OF_BLOCK_SYMBOL, LENGTH_BASE, LENGTH_EXTRA_BITS};
use crate::errors::{Error, Result};
use crate::huffman::HuffmanTable;
use crate::output::OutputSink;

/// Decode literal/length and distance symbols from `reader` through
/// `litlen_table`/`dist_table`, writing through `sink`, until an
/// end-of-block symbol (256) is seen.
pub fn expand_block<S: OutputSink>(
    reader: &mut BitStreamReader, litlen_table: &HuffmanTable, dist_table: &HuffmanTable,
    sink: &mut S
) -> Result<()>
{
    loop
    {
        let symbol = litlen_table.decode_symbol(reader)?;

        if symbol == END_OF_BLOCK_SYMBOL
        {
            return Ok(());
        }

        if symbol < 256
        {
            sink.reserve(1);
            sink.push_literal(symbol as u8);
            continue;
        }

        let li = (symbol - 257) as usize;

        let Some(&base_len) = LENGTH_BASE.get(li) else {
            return Err(Error::InvalidHuffmanCode);
        };
        let extra_len = LENGTH_EXTRA_BITS[li];

        let length = base_len as usize + reader.read_bits(extra_len)? as usize;

        let dsym = dist_table.decode_symbol(reader)?;

        let Some(&base_dist) = DIST_BASE.get(dsym as usize) else {
            return Err(Error::InvalidHuffmanCode);
        };
        let extra_dist = DIST_EXTRA_BITS[dsym as usize];

        let distance = base_dist as usize + reader.read_bits(extra_dist)? as usize;

        if distance > sink.total_produced()
        {
            return Err(Error::InvalidDistance);
        }

        sink.reserve(length);
        sink.copy_backref(distance, length);
    }
}
