//! Minimal CLI collaborator: reads a zlib-compressed file and writes the
//! decoded bytes to stdout. Not part of the core decoder; file I/O and
//! argument parsing are explicitly out of scope for the library itself.
use std::io::Write;
use std::{env, fs, process};

use zlib_inflate::{Decoder, DecoderOptions};

fn main()
{
    let mut args = env::args().skip(1);

    let Some(path) = args.next() else {
        eprintln!("usage: decode <file.zlib>");
        process::exit(2);
    };

    let data = fs::read(&path).unwrap_or_else(|err| {
        eprintln!("failed to read {path}: {err}");
        process::exit(1);
    });

    let options = DecoderOptions::default().with_verify(true);

    match Decoder::with_options(&data, options).inflate()
    {
        Ok(out) => std::io::stdout().write_all(&out).unwrap(),
        Err(err) =>
        {
            eprintln!("failed to decode {path}: {err:?}");
            process::exit(1);
        }
    }
}
