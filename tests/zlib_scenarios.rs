//! End-to-end scenarios from the decoder's testable-properties checklist:
//! concrete byte-for-byte fixtures (S1-S6) plus the round-trip, mode
//! equivalence, truncation, bit-flip, and self-overlap properties.
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use zlib_inflate::errors::Error;
use zlib_inflate::{Decoder, DecoderOptions, Mode};

fn encode(data: &[u8]) -> Vec<u8>
{
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn decode_default(data: &[u8]) -> zlib_inflate::Result<Vec<u8>>
{
    Decoder::new(data).inflate()
}

// S1: empty input round-trips, with verification on.
#[test]
fn s1_empty_input()
{
    let data = [0x78, 0x9C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01];

    let options = DecoderOptions::default().with_verify(true);
    let out = Decoder::with_options(&data, options).inflate().unwrap();

    assert!(out.is_empty());
}

// S2: a stored block containing the literal bytes "Hello".
#[test]
fn s2_stored_block_hello()
{
    let data = [
        0x78, 0x9C, 0x01, 0x05, 0x00, 0xFA, 0xFF, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x05, 0x8C, 0x01,
        0xF5,
    ];

    let out = decode_default(&data).unwrap();

    assert_eq!(out, b"Hello");
}

// S3: fixed Huffman block encoding eight repeats of 'a'; exercises a
// distance=1 self-overlapping back-reference.
#[test]
fn s3_fixed_huffman_repeated_byte()
{
    let plain = b"aaaaaaaa";
    let compressed = encode(plain);

    let out = decode_default(&compressed).unwrap();

    assert_eq!(out, plain);
}

// S4: dynamic Huffman block over 100 KiB of pseudo-random data, decoded with
// the adaptive buffer.
#[test]
fn s4_large_random_payload()
{
    let mut plain = Vec::with_capacity(102_400);
    let mut state: u32 = 0x2545F491;

    for _ in 0..102_400
    {
        // xorshift32, deterministic and dependency-free
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        plain.push((state & 0xff) as u8);
    }

    let compressed = encode(&plain);
    let out = decode_default(&compressed).unwrap();

    assert_eq!(out.len(), 102_400);
    assert_eq!(out, plain);
}

// S5: flipping the trailing Adler-32 must fail verification.
#[test]
fn s5_checksum_mismatch()
{
    let mut data = vec![
        0x78, 0x9C, 0x01, 0x05, 0x00, 0xFA, 0xFF, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x05, 0x8C, 0x01,
        0xF5,
    ];
    *data.last_mut().unwrap() ^= 0xFF;

    let options = DecoderOptions::default().with_verify(true);
    let err = Decoder::with_options(&data, options).inflate().unwrap_err();

    assert!(matches!(err, Error::ChecksumMismatch { .. }));
}

// S6: dropping the trailing four bytes. With verify on, the missing
// Adler-32 itself is reported as truncation. This crate's chosen behaviour
// (documented in DESIGN.md) is that truncation is always detected as soon as
// a read runs past the end of input, regardless of `verify` -- here the
// stored block's own body is still fully present, so without verification
// decoding succeeds; only the attempt to read the trailer fails.
#[test]
fn s6_truncated_trailer()
{
    let full = [
        0x78, 0x9C, 0x01, 0x05, 0x00, 0xFA, 0xFF, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x05, 0x8C, 0x01,
        0xF5,
    ];
    let truncated = &full[..full.len() - 4];

    let verifying = DecoderOptions::default().with_verify(true);
    let err = Decoder::with_options(truncated, verifying)
        .inflate()
        .unwrap_err();
    assert!(matches!(err, Error::TruncatedInput));

    let out = decode_default(truncated).unwrap();
    assert_eq!(out, b"Hello");
}

// Property 1: round-trip for arbitrary byte sequences via a real encoder.
#[test]
fn property_round_trip()
{
    let samples: &[&[u8]] = &[
        b"",
        b"a",
        b"abababababababababab",
        b"The quick brown fox jumps over the lazy dog.",
        &[0u8; 1000],
        &[0xffu8; 70000]
    ];

    for sample in samples
    {
        let compressed = encode(sample);
        let out = decode_default(&compressed).unwrap();
        assert_eq!(&out, sample);
    }
}

// Property 2: two independent decodes of the same input agree.
#[test]
fn property_idempotent_determinism()
{
    let compressed = encode(b"determinism check, twice over, with some repetition repetition");

    let a = decode_default(&compressed).unwrap();
    let b = decode_default(&compressed).unwrap();

    assert_eq!(a, b);
}

// Property 3: windowed and adaptive modes produce identical bytes.
#[test]
fn property_mode_equivalence()
{
    let mut plain = Vec::new();
    for i in 0..50_000u32
    {
        plain.push((i % 251) as u8);
    }
    let compressed = encode(&plain);

    let adaptive = Decoder::with_options(&compressed, DecoderOptions::default().with_mode(Mode::Adaptive))
        .inflate()
        .unwrap();
    let windowed = Decoder::with_options(
        &compressed,
        DecoderOptions::default()
            .with_mode(Mode::Windowed)
            .with_block_size(1024)
    )
    .inflate()
    .unwrap();

    assert_eq!(adaptive, windowed);
    assert_eq!(adaptive, plain);
}

// Property 4: every proper prefix of a valid stream fails with TruncatedInput.
#[test]
fn property_prefix_truncation()
{
    let compressed = encode(b"prefixes of this stream should never silently succeed");

    for len in 0..compressed.len()
    {
        let prefix = &compressed[..len];
        let result = Decoder::with_options(prefix, DecoderOptions::default().with_verify(true)).inflate();

        assert!(
            result.is_err(),
            "expected failure decoding a {len}-byte prefix of a {}-byte stream",
            compressed.len()
        );
    }
}

// Property 5: flipping any single bit in a valid stream yields one of the
// documented error kinds, or (rarely) still-valid output caught by verify.
#[test]
fn property_bit_flip_robustness()
{
    let compressed = encode(b"bit flip robustness over a reasonably sized payload of text");

    for bit in 0..compressed.len() * 8
    {
        let mut mutated = compressed.clone();
        mutated[bit / 8] ^= 1 << (bit % 8);

        let options = DecoderOptions::default().with_verify(true);

        match Decoder::with_options(&mutated, options).inflate()
        {
            Ok(_) =>
            {
                // A flipped header-check or non-load-bearing bit can
                // legitimately still decode to a different, checksum-valid
                // stream; that's fine as long as verify caught any mismatch,
                // which `Ok` here guarantees it did not need to.
            }
            Err(err) => assert!(matches!(
                err,
                Error::InvalidHeaderCheck
                    | Error::InvalidHuffmanCode
                    | Error::InvalidDistance
                    | Error::InvalidBlockType
                    | Error::InvalidStoredLength
                    | Error::ChecksumMismatch { .. }
                    | Error::TruncatedInput
                    | Error::UnsupportedMethod(_)
                    | Error::PresetDictionaryUnsupported
            ))
        }
    }
}

// Property 6: a length-N, distance=1 back-reference repeats the last byte.
#[test]
fn property_self_overlap_backreference()
{
    let plain = vec![b'x'; 300];
    let compressed = encode(&plain);

    let out = decode_default(&compressed).unwrap();

    assert_eq!(out, plain);
    assert!(out.iter().all(|&b| b == b'x'));
}

#[test]
fn rejects_reserved_block_type()
{
    // zlib header, then a single byte whose first three bits are
    // `1` (final) `11` (BTYPE=3, reserved).
    let data = [0x78, 0x9C, 0b0000_0111];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::InvalidBlockType));
}

#[test]
fn rejects_bad_header_check()
{
    let data = [0x78, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::InvalidHeaderCheck));
}

#[test]
fn rejects_unsupported_method()
{
    // CMF with CM=7 instead of 8, FLG chosen so the FCHECK divisibility
    // still passes (so this isn't masked by InvalidHeaderCheck).
    let cmf: u8 = 0x77;
    let mut flg: u8 = 0;
    while (u16::from(cmf) << 8 | u16::from(flg)) % 31 != 0
    {
        flg += 1;
    }

    let data = [cmf, flg, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMethod(7)));
}

#[test]
fn rejects_preset_dictionary()
{
    // CMF=0x78, FLG=0x20: FDICT set, and (CMF<<8|FLG) % 31 == 0.
    let data = [0x78, 0x20, 0, 0, 0, 0];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::PresetDictionaryUnsupported));
}

// A hand-assembled dynamic Huffman block (HLIT=288) whose literal/length
// table maps its one live codeword straight to the reserved symbol 286.
// Resolves the Open Question documented in DESIGN.md: reserved litlen
// symbols decode as `InvalidHuffmanCode`, never as a length of 258.
#[test]
fn rejects_reserved_litlen_symbol()
{
    let data = [
        0x78, 0x9C, 0xFD, 0xE0, 0x01, 0x05, 0x00, 0x00, 0x00, 0x00, 0x20, 0xFC, 0xFF, 0x0F, 0x40,
        0x02, 0x00, 0x00,
    ];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::InvalidHuffmanCode));
}

// Same idea, but the distance table's one live codeword maps to the
// reserved symbol 30 (HDIST=31). The litlen table decodes an ordinary
// length-257 symbol first, so the failure is specifically in the distance
// alphabet, not the literal/length one.
#[test]
fn rejects_reserved_distance_symbol()
{
    let data = [
        0x78, 0x9C, 0xFD, 0xFE, 0x01, 0x05, 0x00, 0x00, 0x00, 0x00, 0x20, 0xFC, 0x9F, 0xDD, 0xB1,
        0x00, 0x00, 0x00,
    ];

    let err = decode_default(&data).unwrap_err();
    assert!(matches!(err, Error::InvalidHuffmanCode));
}
