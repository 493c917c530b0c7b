//! RFC 1950 zlib stream wrapper: header validation, the block loop, and
//! Adler-32 verification.
use simd_adler32::adler32;

use crate::bitstream::BitStreamReader;
use crate::block::{build_dynamic_tables, fixed_tables};
use crate::constants::{
    DEFLATE_BLOCKTYPE_DYNAMIC_HUFFMAN, DEFLATE_BLOCKTYPE_RESERVED, DEFLATE_BLOCKTYPE_STATIC,
    DEFLATE_BLOCKTYPE_UNCOMPRESSED
};
use crate::errors::{Error, Result};
use crate::lz77::expand_block;
use crate::output::{AdaptiveBuffer, OutputSink, WindowedBuffer};

/// Output buffer growth strategy. See `output` module docs for the tradeoffs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode
{
    /// Fixed `32768 + block_size + 258`-byte working buffer; bounds peak
    /// memory at the cost of a final chunk concatenation.
    Windowed,
    /// Single contiguous buffer that grows by amortized doubling; avoids
    /// concatenation but may over-allocate.
    Adaptive
}

/// Construction options for [`Decoder`].
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions
{
    /// Chunk size used by [`Mode::Windowed`]. Ignored in adaptive mode.
    pub block_size: usize,
    /// Whether to validate the trailing Adler-32 checksum.
    pub verify: bool,
    /// Which output-buffer growth strategy to use.
    pub mode: Mode,
    /// In adaptive mode, whether finalization allocates exactly as many
    /// bytes as were produced rather than aliasing the working buffer's
    /// spare capacity.
    pub resize: bool
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        DecoderOptions {
            block_size: 32768,
            verify: false,
            mode: Mode::Adaptive,
            resize: false
        }
    }
}

impl DecoderOptions
{
    pub fn with_block_size(mut self, block_size: usize) -> Self
    {
        self.block_size = block_size;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self
    {
        self.verify = verify;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self
    {
        self.mode = mode;
        self
    }

    pub fn with_resize(mut self, resize: bool) -> Self
    {
        self.resize = resize;
        self
    }
}

/// A zlib-wrapped DEFLATE decoder over a single, complete input byte slice.
pub struct Decoder<'a>
{
    data:    &'a [u8],
    options: DecoderOptions
}

impl<'a> Decoder<'a>
{
    /// Construct a decoder with default options (adaptive mode, no checksum
    /// verification).
    pub fn new(data: &'a [u8]) -> Decoder<'a>
    {
        Decoder::with_options(data, DecoderOptions::default())
    }

    /// Construct a decoder with explicit options.
    pub fn with_options(data: &'a [u8], options: DecoderOptions) -> Decoder<'a>
    {
        Decoder { data, options }
    }

    /// Decode the zlib stream, returning the uncompressed bytes.
    pub fn inflate(&mut self) -> Result<Vec<u8>>
    {
        let payload = self.validate_header()?;

        match self.options.mode
        {
            Mode::Adaptive =>
            {
                let sink = AdaptiveBuffer::new(
                    self.data.len().saturating_mul(3).max(64),
                    self.options.resize
                );
                self.run(payload, sink)
            }
            Mode::Windowed =>
            {
                let sink = WindowedBuffer::new(self.options.block_size);
                self.run(payload, sink)
            }
        }
    }

    /// Validate the two-byte zlib header and return the remaining bytes
    /// (the raw DEFLATE stream plus trailing Adler-32).
    fn validate_header(&self) -> Result<&'a [u8]>
    {
        let &[cmf, flg, ..] = self.data else {
            return Err(Error::TruncatedInput);
        };

        let cm = cmf & 0x0F;

        if cm != 8
        {
            return Err(Error::UnsupportedMethod(cm));
        }

        let check = (u16::from(cmf) << 8) | u16::from(flg);

        if check % 31 != 0
        {
            return Err(Error::InvalidHeaderCheck);
        }

        if flg & 0x20 != 0
        {
            return Err(Error::PresetDictionaryUnsupported);
        }

        log::trace!("zlib header ok: cmf={cmf:#04x} flg={flg:#04x}");

        Ok(&self.data[2..])
    }

    fn run<S: OutputSink>(&mut self, payload: &'a [u8], mut sink: S) -> Result<Vec<u8>>
    {
        let mut reader = BitStreamReader::new(payload);

        loop
        {
            let is_final = reader.read_bits(1)? == 1;
            let block_type = reader.read_bits(2)?;

            match block_type
            {
                DEFLATE_BLOCKTYPE_UNCOMPRESSED =>
                {
                    reader.align_to_byte();
                    let header = reader.read_aligned_bytes(4)?;
                    let len = u16::from_le_bytes([header[0], header[1]]);
                    let nlen = u16::from_le_bytes([header[2], header[3]]);

                    if nlen != !len
                    {
                        return Err(Error::InvalidStoredLength);
                    }

                    let body = reader.read_aligned_bytes(len as usize)?;

                    log::trace!("stored block: {len} bytes");

                    sink.reserve(body.len());
                    sink.write_literals(body);
                }
                DEFLATE_BLOCKTYPE_STATIC =>
                {
                    let (litlen, dist) = fixed_tables();
                    expand_block(&mut reader, litlen, dist, &mut sink)?;
                }
                DEFLATE_BLOCKTYPE_DYNAMIC_HUFFMAN =>
                {
                    log::trace!("dynamic huffman block");
                    let (litlen, dist) = build_dynamic_tables(&mut reader)?;
                    expand_block(&mut reader, &litlen, &dist, &mut sink)?;
                }
                DEFLATE_BLOCKTYPE_RESERVED => return Err(Error::InvalidBlockType),
                _ => unreachable!("read_bits(2) cannot return a value outside 0..=3")
            }

            if is_final
            {
                break;
            }
        }

        let out = sink.finalize();

        if self.options.verify
        {
            reader.align_to_byte();
            let trailer = reader.read_aligned_bytes(4)?;
            let expected = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
            let computed = adler32(&out);

            if expected != computed
            {
                return Err(Error::ChecksumMismatch { expected, computed });
            }
        }

        Ok(out)
    }
}
