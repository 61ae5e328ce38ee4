//! Resolving a source identifier into a transparently decompressed stream.

use std::fs::File;
use std::io;

use crate::error::OpenError;
use crate::format::Compression;
use crate::io::Reader;

#[cfg(feature = "gzip")]
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a source for reading, transparently decompressing it if its name
/// ends with a recognized suffix (`.zst`, `.xz`, `.gz`, `.bz2`).
///
/// The sentinel `"-"` reads from stdin; closing that stream is a no-op.
/// Any other identifier is opened as a file, and a matching suffix selects
/// the decoder stacked on top of it. An identifier with no recognized
/// suffix yields the raw file bytes unmodified.
///
/// Open-time failures are [`OpenError::FileOpen`] (the file itself) or
/// [`OpenError::DecodeInit`] (the declared format rejected the content).
/// Corrupt or truncated compressed data that passes decoder construction
/// surfaces later, as ordinary read errors. No failure path leaks the file
/// handle: a decoder construction error drops the already-opened file
/// before returning.
pub fn open(source: &str) -> Result<Reader, OpenError> {
    if source == "-" {
        return Ok(Reader::new(
            source,
            Compression::Plain,
            Box::new(io::stdin()),
        ));
    }

    match Compression::detect(source) {
        Compression::Plain => open_plain(source),

        #[cfg(feature = "gzip")]
        Compression::Gzip => open_gzip(source),
        #[cfg(not(feature = "gzip"))]
        Compression::Gzip => Err(OpenError::NotEnabled(Compression::Gzip)),

        #[cfg(feature = "bzip2")]
        Compression::Bzip2 => open_bzip2(source),
        #[cfg(not(feature = "bzip2"))]
        Compression::Bzip2 => Err(OpenError::NotEnabled(Compression::Bzip2)),

        #[cfg(feature = "xz")]
        Compression::Xz => open_xz(source),
        #[cfg(not(feature = "xz"))]
        Compression::Xz => Err(OpenError::NotEnabled(Compression::Xz)),

        #[cfg(feature = "zstd")]
        Compression::Zstd => open_zstd(source),
        #[cfg(not(feature = "zstd"))]
        Compression::Zstd => Err(OpenError::NotEnabled(Compression::Zstd)),
    }
}

/// Open the raw file underlying `source`.
fn open_raw(source: &str) -> Result<File, OpenError> {
    File::open(source).map_err(|e| OpenError::FileOpen {
        source_id: source.to_string(),
        source: e,
    })
}

fn open_plain(source: &str) -> Result<Reader, OpenError> {
    let file = open_raw(source)?;
    Ok(Reader::new(source, Compression::Plain, Box::new(file)))
}

#[cfg(feature = "gzip")]
fn open_gzip(source: &str) -> Result<Reader, OpenError> {
    use std::io::BufRead;

    let file = open_raw(source)?;
    let mut buffered = io::BufReader::new(file);

    // flate2 parses the gzip header lazily, on the first read. Peek the
    // magic here so that a mislabeled file fails at open time; dropping
    // `buffered` on the error path closes the file handle.
    let head = buffered.fill_buf().map_err(|e| OpenError::DecodeInit {
        source_id: source.to_string(),
        format: Compression::Gzip,
        source: e,
    })?;
    if head.len() < GZIP_MAGIC.len() || head[..GZIP_MAGIC.len()] != GZIP_MAGIC {
        return Err(OpenError::DecodeInit {
            source_id: source.to_string(),
            format: Compression::Gzip,
            source: io::Error::new(io::ErrorKind::InvalidData, "invalid gzip header"),
        });
    }

    // MultiGzDecoder keeps decoding across concatenated gzip members.
    let decoder = flate2::bufread::MultiGzDecoder::new(buffered);
    Ok(Reader::new(source, Compression::Gzip, Box::new(decoder)))
}

#[cfg(feature = "bzip2")]
fn open_bzip2(source: &str) -> Result<Reader, OpenError> {
    let file = open_raw(source)?;
    // BzDecoder construction never touches the content; invalid bzip2 data
    // surfaces as an error on the first read.
    let decoder = bzip2::read::BzDecoder::new(file);
    Ok(Reader::new(source, Compression::Bzip2, Box::new(decoder)))
}

#[cfg(feature = "xz")]
fn open_xz(source: &str) -> Result<Reader, OpenError> {
    let file = open_raw(source)?;
    let decoder = xz2::read::XzDecoder::new(file);
    Ok(Reader::new(source, Compression::Xz, Box::new(decoder)))
}

#[cfg(feature = "zstd")]
fn open_zstd(source: &str) -> Result<Reader, OpenError> {
    let file = open_raw(source)?;
    // The constructor consumes the file; on failure it drops it, so the
    // handle is released before the error reaches the caller.
    let decoder = zstd::stream::read::Decoder::new(file).map_err(|e| OpenError::DecodeInit {
        source_id: source.to_string(),
        format: Compression::Zstd,
        source: e,
    })?;
    Ok(Reader::new(source, Compression::Zstd, Box::new(decoder)))
}
