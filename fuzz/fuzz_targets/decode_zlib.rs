#![no_main]

use libfuzzer_sys::fuzz_target;
use zlib_inflate::Decoder;

fuzz_target!(|data: &[u8]| {
    let _result = Decoder::new(data).inflate();
});
