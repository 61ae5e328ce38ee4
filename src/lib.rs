//! # xopen
//!
//! Transparently decompressing readers for files and stdin.
//!
//! ## Overview
//!
//! xopen provides a single abstraction: open a source for reading,
//! decompressing it on the fly when its name ends with a recognized
//! compression suffix.
//!
//! - **Suffix dispatch**: `.gz`, `.bz2`, `.xz` and `.zst` select the
//!   matching decoder; anything else is read as-is
//! - **Stdin sentinel**: the identifier `"-"` reads from standard input
//! - **Unified stream**: one [`Reader`] type exposing `std::io::Read` and
//!   an explicit [`Reader::close`] that releases every owned resource
//! - **Aggregated close errors**: a failing release does not hide the
//!   others; all failures come back in one [`CloseError`]
//! - **Leak-free failure paths**: a decoder that rejects the file at open
//!   time never leaves the file handle behind
//!
//! Decompression itself is delegated to `flate2`, `bzip2`, `xz2` and
//! `zstd`; this crate only wires them to a filename and manages the
//! lifetimes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Read;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut stream = xopen::open("data.gz")?;
//!
//!     let mut text = String::new();
//!     stream.read_to_string(&mut text)?;
//!     stream.close()?;
//!
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `gzip` - `.gz` support via flate2 (enabled by default)
//! - `bzip2` - `.bz2` support via bzip2 (enabled by default)
//! - `xz` - `.xz` support via xz2 (enabled by default)
//! - `zstd` - `.zst` support via zstd (enabled by default)
//! - `full` - all of the above
//!
//! A recognized suffix whose feature is disabled yields
//! [`OpenError::NotEnabled`] rather than silently reading raw bytes.
//!
//! ## Error semantics
//!
//! Open-time errors distinguish the file failing to open
//! ([`OpenError::FileOpen`]) from the content not matching the declared
//! format ([`OpenError::DecodeInit`]). Only gzip and zstd can reject a
//! file at open time; bzip2 and xz defer all content validation to the
//! first read, where corruption surfaces as an ordinary `std::io::Error`.
//! There is no retry and no fallback format guessing.

// Core modules
pub mod error;
pub mod format;
pub mod io;
pub mod open;

// Re-exports for convenience
pub use error::{CloseError, OpenError, SingleCloseError};
pub use format::Compression;
pub use io::{Closer, Reader};
pub use open::open;
