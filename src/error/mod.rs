//! Error types for opening and closing transparent streams.
//!
//! This module provides:
//! - `OpenError`: Open-time failures (raw open, decoder construction)
//! - `SingleCloseError`: A single resource-release failure with context
//! - `CloseError`: A collection of release failures from one close call

use std::fmt;
use std::io;

use thiserror::Error;

use crate::format::Compression;

/// Errors that can occur while resolving a source into a readable stream.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The raw file could not be opened (missing, permission, I/O)
    #[error("cannot open '{source_id}': {source}")]
    FileOpen {
        /// Identifier of the source that failed to open
        source_id: String,
        /// The underlying I/O error
        source: io::Error,
    },

    /// The file opened, but its content is not a valid header for the
    /// decoder implied by its suffix
    #[error("'{source_id}' is not valid {format} data: {source}")]
    DecodeInit {
        /// Identifier of the source that failed decoder construction
        source_id: String,
        /// The format implied by the suffix
        format: Compression,
        /// The underlying decoder error
        source: io::Error,
    },

    /// Format feature not enabled
    #[error("format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(Compression),
}

impl OpenError {
    /// Identifier of the source the error refers to, if any.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            OpenError::FileOpen { source_id, .. } => Some(source_id),
            OpenError::DecodeInit { source_id, .. } => Some(source_id),
            OpenError::NotEnabled(_) => None,
        }
    }
}

/// A single resource-release failure during close.
#[derive(Debug)]
pub struct SingleCloseError {
    /// Label of the resource whose release failed ("decoder", "file", ...)
    pub resource: String,
    /// The underlying error
    pub error: io::Error,
}

impl fmt::Display for SingleCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.resource, self.error)
    }
}

impl std::error::Error for SingleCloseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An aggregate of resource-release failures.
///
/// Closing a stream releases every owned resource even when one of them
/// fails; each failure is collected here rather than short-circuiting.
#[derive(Debug, Error)]
pub struct CloseError {
    /// Collection of individual failures, in release order
    pub errors: Vec<SingleCloseError>,
}

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "close encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl CloseError {
    /// Create a new aggregate with a single failure.
    pub fn single(error: SingleCloseError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<SingleCloseError> for CloseError {
    fn from(error: SingleCloseError) -> Self {
        Self::single(error)
    }
}
