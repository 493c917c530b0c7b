#![no_main]

use libfuzzer_sys::fuzz_target;
use zlib_inflate::{Decoder, DecoderOptions, Mode};

fuzz_target!(|data: &[u8]| {
    // Exercise the windowed growth strategy with checksum verification on,
    // since decode_zlib.rs already covers the adaptive default.
    let options = DecoderOptions::default()
        .with_mode(Mode::Windowed)
        .with_block_size(4096)
        .with_verify(true);

    let _ = Decoder::with_options(data, options).inflate();
});
