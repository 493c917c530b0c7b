#![no_main]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use libfuzzer_sys::fuzz_target;
use zlib_inflate::{Decoder, DecoderOptions};

fuzz_target!(|data: &[u8]| {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    let compressed = encoder.finish().unwrap();

    let options = DecoderOptions::default().with_verify(true);
    let decoded = Decoder::with_options(&compressed, options)
        .inflate()
        .expect("failed to decompress a stream we just compressed");

    assert_eq!(data, decoded.as_slice(), "round-trip mismatch");
});
