//! `BitStreamReader` API
//!
//! This module provides an interface to read and write bits (and bytes) for
//! huffman decoding. Unlike a fixed-window refill that assumes the source
//! buffer is over-allocated with trailing pad bytes, every refill here is
//! bounds-checked: callers may hand us an arbitrary, unpadded byte slice and
//! a read past the end of it surfaces as [`Error::TruncatedInput`] instead of
//! reading out of bounds.
use crate::errors::{Error, Result};

/// Little-endian, LSB-first bit reader over an input byte slice.
pub struct BitStreamReader<'src>
{
    // buffer from which we are pulling in bits from
    // used in decompression.
    src:      &'src [u8],
    // position of the next unread byte in `src`.
    position: usize,

    bits_left: u32,
    buffer:    u64
}

impl<'src> BitStreamReader<'src>
{
    /// Create a new `BitStreamReader` instance over `in_buffer`.
    pub fn new(in_buffer: &'src [u8]) -> BitStreamReader<'src>
    {
        BitStreamReader {
            bits_left: 0,
            buffer:    0,
            src:       in_buffer,
            position:  0
        }
    }

    /// Pull bytes from `src` into `buffer` until it holds at least `n` bits
    /// or the input is exhausted.
    #[inline(always)]
    fn refill(&mut self, n: u32)
    {
        while self.bits_left < n
        {
            let Some(&byte) = self.src.get(self.position) else { break };

            self.buffer |= u64::from(byte) << self.bits_left;
            self.bits_left += 8;
            self.position += 1;
        }
    }

    /// Return the next `n` bits (0 <= n <= 16) without consuming them.
    ///
    /// Fails with [`Error::TruncatedInput`] if fewer than `n` bits remain in
    /// the combined buffer + input.
    #[inline(always)]
    pub fn peek_bits(&mut self, n: u32) -> Result<u64>
    {
        debug_assert!(n <= 16);

        if self.bits_left < n
        {
            self.refill(n);

            if self.bits_left < n
            {
                return Err(Error::TruncatedInput);
            }
        }

        Ok(self.buffer & ((1_u64 << n) - 1))
    }

    /// Consume `n` bits previously returned by [`peek_bits`](Self::peek_bits).
    #[inline(always)]
    pub fn discard_bits(&mut self, n: u32)
    {
        debug_assert!(self.bits_left >= n);
        self.buffer >>= n;
        self.bits_left -= n;
    }

    /// Return the next `n` bits (0 <= n <= 16) as an unsigned integer and
    /// consume them.
    #[inline(always)]
    pub fn read_bits(&mut self, n: u32) -> Result<u64>
    {
        let value = self.peek_bits(n)?;
        self.discard_bits(n);
        Ok(value)
    }

    /// Drop any pending bits so the next read starts on a byte boundary.
    pub fn align_to_byte(&mut self)
    {
        let drop = self.bits_left % 8;
        self.buffer >>= drop;
        self.bits_left -= drop;
    }

    /// Number of bits currently buffered (not yet consumed).
    pub const fn bits_available(&self) -> u32
    {
        self.bits_left
    }

    /// Read `n` raw bytes straight from the input, bypassing the bit buffer.
    ///
    /// Must be called right after [`align_to_byte`](Self::align_to_byte),
    /// i.e. with no partial byte pending. Used for stored-block bodies and
    /// the trailing Adler-32, neither of which go through Huffman decoding.
    pub fn read_aligned_bytes(&mut self, n: usize) -> Result<&'src [u8]>
    {
        debug_assert_eq!(self.bits_left % 8, 0);

        let start = self.position - (self.bits_left as usize / 8);
        let end = start.checked_add(n).ok_or(Error::TruncatedInput)?;

        let bytes = self.src.get(start..end).ok_or(Error::TruncatedInput)?;

        self.position = end;
        self.buffer = 0;
        self.bits_left = 0;

        Ok(bytes)
    }
}
