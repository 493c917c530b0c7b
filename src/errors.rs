//! Error types returned by the decoder.
use std::fmt::{Debug, Display, Formatter};

/// Everything that can go wrong while inflating a zlib stream.
///
/// Every variant is fatal: there is no local recovery, and the decoder
/// discards whatever partial output it had produced before returning one of
/// these to the caller.
pub enum Error
{
    /// `CMF & 0x0F` was not 8 (DEFLATE).
    UnsupportedMethod(u8),
    /// `(CMF << 8 | FLG) % 31 != 0`.
    InvalidHeaderCheck,
    /// The FDICT bit was set in FLG; preset dictionaries are not supported.
    PresetDictionaryUnsupported,
    /// `BTYPE == 3`.
    InvalidBlockType,
    /// A stored block's `LEN` and `NLEN` fields were not ones-complement.
    InvalidStoredLength,
    /// The bit reader or a stored-block copy ran past the end of the input.
    TruncatedInput,
    /// A Huffman decode landed on a table slot that no codeword maps to.
    InvalidHuffmanCode,
    /// A back-reference's distance exceeded the number of bytes produced so far.
    InvalidDistance,
    /// The trailing Adler-32 did not match the decoded bytes.
    ChecksumMismatch
    {
        expected: u32, computed: u32
    }
}

impl Display for Error
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::UnsupportedMethod(cm) => writeln!(
                f,
                "unsupported zlib compression method {cm}, expected 8 (DEFLATE)"
            ),
            Self::InvalidHeaderCheck => writeln!(f, "zlib header check (FCHECK) failed"),
            Self::PresetDictionaryUnsupported => writeln!(
                f,
                "stream requires a preset dictionary (FDICT), which is unsupported"
            ),
            Self::InvalidBlockType => writeln!(f, "reserved DEFLATE block type (BTYPE=3)"),
            Self::InvalidStoredLength =>
            {
                writeln!(f, "stored block LEN and NLEN are not ones-complement")
            }
            Self::TruncatedInput => writeln!(f, "input ended before the stream was complete"),
            Self::InvalidHuffmanCode => writeln!(f, "bit pattern does not match any Huffman code"),
            Self::InvalidDistance =>
            {
                writeln!(f, "back-reference distance exceeds bytes produced so far")
            }
            Self::ChecksumMismatch { expected, computed } => writeln!(
                f,
                "Adler-32 mismatch: expected {expected:#010x}, computed {computed:#010x}"
            )
        }
    }
}

impl Debug for Error
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
