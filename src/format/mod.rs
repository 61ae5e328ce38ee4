//! Suffix classification for compressed inputs.
//!
//! This module provides:
//! - `Compression`: Enum representing the recognized compression formats
//! - Detection of the format implied by a source identifier's suffix

/// Represents the compression format implied by a filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// No recognized suffix; the bytes are read as-is
    Plain,
    /// Gzip format (`.gz`)
    Gzip,
    /// Bzip2 format (`.bz2`)
    Bzip2,
    /// LZMA/xz format (`.xz`)
    Xz,
    /// Zstandard format (`.zst`)
    Zstd,
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Plain => write!(f, "plain"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::Bzip2 => write!(f, "bzip2"),
            Compression::Xz => write!(f, "xz"),
            Compression::Zstd => write!(f, "zstd"),
        }
    }
}

impl Compression {
    /// Classify a source identifier by its suffix.
    ///
    /// Matching is a plain end-of-string comparison on the full identifier,
    /// checked in the order `.zst`, `.xz`, `.gz`, `.bz2`. Anything else,
    /// including an identifier with no extension at all, is `Plain`.
    pub fn detect(source: &str) -> Self {
        if source.ends_with(".zst") {
            Compression::Zstd
        } else if source.ends_with(".xz") {
            Compression::Xz
        } else if source.ends_with(".gz") {
            Compression::Gzip
        } else if source.ends_with(".bz2") {
            Compression::Bzip2
        } else {
            Compression::Plain
        }
    }

    /// Parse a compression format from a name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "none" => Some(Compression::Plain),
            "gzip" | "gz" => Some(Compression::Gzip),
            "bzip2" | "bz2" => Some(Compression::Bzip2),
            "xz" | "lzma" => Some(Compression::Xz),
            "zstd" | "zst" => Some(Compression::Zstd),
            _ => None,
        }
    }

    /// Get the filename extension for this format.
    ///
    /// `Plain` has no extension and returns `None`.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Compression::Plain => None,
            Compression::Gzip => Some("gz"),
            Compression::Bzip2 => Some("bz2"),
            Compression::Xz => Some("xz"),
            Compression::Zstd => Some("zst"),
        }
    }

    /// Check if this format is available (feature enabled).
    ///
    /// `Plain` is always available.
    pub fn is_available(&self) -> bool {
        match self {
            Compression::Plain => true,

            #[cfg(feature = "gzip")]
            Compression::Gzip => true,
            #[cfg(not(feature = "gzip"))]
            Compression::Gzip => false,

            #[cfg(feature = "bzip2")]
            Compression::Bzip2 => true,
            #[cfg(not(feature = "bzip2"))]
            Compression::Bzip2 => false,

            #[cfg(feature = "xz")]
            Compression::Xz => true,
            #[cfg(not(feature = "xz"))]
            Compression::Xz => false,

            #[cfg(feature = "zstd")]
            Compression::Zstd => true,
            #[cfg(not(feature = "zstd"))]
            Compression::Zstd => false,
        }
    }
}
