//! A zlib-wrapped DEFLATE (RFC 1950 / RFC 1951) decompressor.
//!
//! ```
//! use zlib_inflate::Decoder;
//!
//! // `78 9C 03 00 00 00 00 01` is the zlib encoding of an empty input.
//! let data = [0x78, 0x9C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01];
//! let out = Decoder::new(&data).inflate().unwrap();
//! assert!(out.is_empty());
//! ```
mod bitstream;
mod block;
mod constants;
pub mod errors;
mod huffman;
mod lz77;
mod output;
mod zlib;

pub use errors::{Error, Result};
pub use output::{AdaptiveBuffer, OutputSink, WindowedBuffer};
pub use zlib::{Decoder, DecoderOptions, Mode};

/// Convert a string into bytes by truncating each character's code point to
/// its low 8 bits, mirroring callers that model binary data as JS-style
/// "binary strings". Not part of the core decoder state machine.
pub fn from_string(s: &str) -> Vec<u8>
{
    s.encode_utf16().map(|unit| (unit & 0xff) as u8).collect()
}
