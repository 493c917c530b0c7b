//! Output-buffer growth strategies.
//!
//! DEFLATE back-references can reach up to 32 KiB behind the current write
//! position, so the output buffer must always keep at least that much
//! already-produced data resident. Two strategies satisfy this; which one a
//! [`Decoder`](crate::zlib::Decoder) uses is chosen once at construction and
//! monomorphized through the [`OutputSink`] trait so the literal/backref hot
//! loop never pays for dynamic dispatch.
use crate::constants::{MAX_DISTANCE, MAX_MATCH_LENGTH, MAX_STORED_BLOCK_LEN};

/// Capability surface the LZ77 expander writes through.
pub trait OutputSink
{
    /// Total number of bytes produced so far across the whole stream. Used
    /// to validate that a back-reference distance doesn't reach further back
    /// than anything has actually been written.
    fn total_produced(&self) -> usize;

    /// Make sure at least `additional` more bytes can be written before the
    /// next call that needs room.
    fn reserve(&mut self, additional: usize);

    /// Write a single literal byte. Caller must have reserved room for it.
    fn push_literal(&mut self, byte: u8);

    /// Copy `length` bytes from `distance` bytes behind the write cursor,
    /// byte by byte so that overlapping back-references (distance < length)
    /// repeat correctly rather than reading stale pre-overlap bytes. Caller
    /// must have reserved room and validated `distance <= total_produced()`.
    fn copy_backref(&mut self, distance: usize, length: usize);

    /// Consume the sink, returning the fully decoded output.
    fn finalize(self) -> Vec<u8>;

    /// Write a run of literal bytes copied straight from the input, as a
    /// stored block does. Caller must have reserved room for all of them.
    fn write_literals(&mut self, bytes: &[u8])
    {
        for &byte in bytes
        {
            self.push_literal(byte);
        }
    }
}

/// Amortized-doubling single-buffer growth.
///
/// The working buffer is one contiguous `Vec<u8>`; growth piggybacks on
/// `Vec`'s own amortized-doubling `resize`, which already gives the
/// exponential-growth behaviour `spec.md` describes without hand-rolling the
/// remaining-input estimate the original reference uses (that estimate only
/// tunes allocation count, not output correctness).
pub struct AdaptiveBuffer
{
    buffer: Vec<u8>,
    op:     usize,
    resize: bool
}

impl AdaptiveBuffer
{
    pub fn new(initial_capacity: usize, resize: bool) -> AdaptiveBuffer
    {
        AdaptiveBuffer {
            buffer: vec![0; initial_capacity],
            op: 0,
            resize
        }
    }
}

impl OutputSink for AdaptiveBuffer
{
    fn total_produced(&self) -> usize
    {
        self.op
    }

    fn reserve(&mut self, additional: usize)
    {
        let needed = self.op + additional;

        if needed > self.buffer.len()
        {
            let doubled = self.buffer.len().saturating_mul(2);
            let new_len = doubled.max(needed);
            self.buffer.resize(new_len, 0);
        }
    }

    #[inline(always)]
    fn push_literal(&mut self, byte: u8)
    {
        self.buffer[self.op] = byte;
        self.op += 1;
    }

    #[inline(always)]
    fn copy_backref(&mut self, distance: usize, length: usize)
    {
        for k in 0..length
        {
            self.buffer[self.op + k] = self.buffer[self.op + k - distance];
        }
        self.op += length;
    }

    fn finalize(mut self) -> Vec<u8>
    {
        self.buffer.truncate(self.op);

        if self.resize
        {
            self.buffer.shrink_to_fit();
        }

        self.buffer
    }
}

/// Fixed-size working window, constant memory per completed chunk.
///
/// The working buffer holds `32768 + max(block_size, 65535) + 258` bytes --
/// the 65535 floor guarantees room for a single stored block's `LEN`, which
/// is a 16-bit field independent of `block_size`. The write cursor starts at
/// byte 32768 so the preceding 32 KiB always holds whatever window a
/// back-reference might need. When the cursor would run past the buffer's
/// end, the region written since the last flush is snapshotted into
/// `chunks`, the trailing 32 KiB window is copied to the buffer's start, and
/// the cursor resets to 32768.
pub struct WindowedBuffer
{
    buffer:        Vec<u8>,
    op:            usize,
    chunks:        Vec<Vec<u8>>,
    bytes_flushed: usize
}

impl WindowedBuffer
{
    pub fn new(block_size: usize) -> WindowedBuffer
    {
        // A stored block's LEN can be as large as `MAX_STORED_BLOCK_LEN`
        // regardless of `block_size`, and a single reservation must always
        // fit after at most one flush, so the headroom past the window is
        // sized for whichever of the two is larger.
        let headroom = block_size.max(MAX_STORED_BLOCK_LEN) + MAX_MATCH_LENGTH;

        WindowedBuffer {
            buffer: vec![0; MAX_DISTANCE + headroom],
            op: MAX_DISTANCE,
            chunks: Vec::new(),
            bytes_flushed: 0
        }
    }

    fn flush(&mut self)
    {
        let chunk = self.buffer[MAX_DISTANCE..self.op].to_vec();
        self.bytes_flushed += chunk.len();
        self.chunks.push(chunk);

        self.buffer.copy_within(self.op - MAX_DISTANCE..self.op, 0);
        self.op = MAX_DISTANCE;
    }
}

impl OutputSink for WindowedBuffer
{
    fn total_produced(&self) -> usize
    {
        self.bytes_flushed + (self.op - MAX_DISTANCE)
    }

    fn reserve(&mut self, additional: usize)
    {
        while self.op + additional > self.buffer.len()
        {
            let before = self.op;
            self.flush();
            assert!(
                self.op < before,
                "a single reservation must fit after one flush; got additional={additional}"
            );
        }
    }

    #[inline(always)]
    fn push_literal(&mut self, byte: u8)
    {
        self.buffer[self.op] = byte;
        self.op += 1;
    }

    #[inline(always)]
    fn copy_backref(&mut self, distance: usize, length: usize)
    {
        for k in 0..length
        {
            self.buffer[self.op + k] = self.buffer[self.op + k - distance];
        }
        self.op += length;
    }

    fn finalize(mut self) -> Vec<u8>
    {
        let tail_len = self.op - MAX_DISTANCE;
        let total = self.bytes_flushed + tail_len;
        let mut out = Vec::with_capacity(total);

        for chunk in self.chunks.drain(..)
        {
            out.extend_from_slice(&chunk);
        }

        out.extend_from_slice(&self.buffer[MAX_DISTANCE..self.op]);

        out
    }
}
