//! Round-trip tests: compress with the reference encoders, read back
//! through the opener, expect the original bytes.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::open::open;

fn read_all(path: &Path) -> Vec<u8> {
    let mut reader = open(path.to_str().unwrap()).expect("open should succeed");
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).expect("read should succeed");
    reader.close().expect("close should succeed");
    buf
}

#[cfg(feature = "gzip")]
fn gzip_compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[cfg(feature = "bzip2")]
fn bzip2_compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[cfg(feature = "xz")]
fn xz_compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[cfg(feature = "zstd")]
fn zstd_compress(data: &[u8]) -> Vec<u8> {
    zstd::encode_all(data, 0).unwrap()
}

#[cfg(feature = "gzip")]
#[test]
fn gzip_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.gz");
    let original = b"gzip round trip payload\n".repeat(50);
    fs::write(&path, gzip_compress(&original)).unwrap();

    assert_eq!(read_all(&path), original);
}

#[cfg(feature = "gzip")]
#[test]
fn gzip_concatenated_members_decode_fully() {
    // Two gzip members back to back decode as one logical stream.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.gz");

    let mut bytes = gzip_compress(b"first member\n");
    bytes.extend(gzip_compress(b"second member\n"));
    fs::write(&path, bytes).unwrap();

    assert_eq!(read_all(&path), b"first member\nsecond member\n");
}

#[cfg(feature = "bzip2")]
#[test]
fn bzip2_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bz2");
    let original = b"bzip2 round trip payload\n".repeat(50);
    fs::write(&path, bzip2_compress(&original)).unwrap();

    assert_eq!(read_all(&path), original);
}

#[cfg(feature = "xz")]
#[test]
fn xz_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.xz");
    let original = b"xz round trip payload\n".repeat(50);
    fs::write(&path, xz_compress(&original)).unwrap();

    assert_eq!(read_all(&path), original);
}

#[cfg(feature = "zstd")]
#[test]
fn zstd_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.zst");
    let original = b"zstd round trip payload\n".repeat(50);
    fs::write(&path, zstd_compress(&original)).unwrap();

    assert_eq!(read_all(&path), original);
}

#[cfg(feature = "gzip")]
#[test]
fn opened_stream_reports_its_suffix_class() {
    use crate::format::Compression;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.gz");
    fs::write(&path, gzip_compress(b"x")).unwrap();

    let reader = open(path.to_str().unwrap()).unwrap();
    assert_eq!(reader.compression(), Compression::Gzip);
    reader.close().unwrap();
}

#[cfg(all(feature = "gzip", feature = "bzip2", feature = "xz", feature = "zstd"))]
#[test]
fn hundred_byte_payload_across_all_formats() {
    let dir = tempfile::tempdir().unwrap();

    // 100 bytes of plaintext, compressed once per format plus one
    // uncompressed copy; all five must read back identically.
    let original: Vec<u8> = (0..100u8).map(|i| b'a' + (i % 26)).collect();
    assert_eq!(original.len(), 100);

    let fixtures: [(&str, Vec<u8>); 5] = [
        ("data.gz", gzip_compress(&original)),
        ("data.bz2", bzip2_compress(&original)),
        ("data.xz", xz_compress(&original)),
        ("data.zst", zstd_compress(&original)),
        ("data.txt", original.clone()),
    ];

    for (name, bytes) in fixtures {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        assert_eq!(read_all(&path), original, "mismatch for {name}");
    }
}

#[cfg(feature = "zstd")]
#[test]
fn empty_payload_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.zst");
    fs::write(&path, zstd_compress(b"")).unwrap();

    assert_eq!(read_all(&path), b"");
}
