//! The unified readable, closeable stream.

use std::fmt;
use std::io::{self, Read};

use crate::error::{CloseError, SingleCloseError};
use crate::format::Compression;

/// A labeled release action owned by a [`Reader`].
///
/// Closers are pushed in acquisition order and run in reverse (last
/// acquired, first released) when the stream is closed.
pub struct Closer {
    resource: String,
    run: Box<dyn FnOnce() -> io::Result<()> + Send>,
}

impl Closer {
    /// Create a release action with a resource label for error reporting.
    pub fn new<F>(resource: impl Into<String>, run: F) -> Self
    where
        F: FnOnce() -> io::Result<()> + Send + 'static,
    {
        Self {
            resource: resource.into(),
            run: Box::new(run),
        }
    }

    /// Label of the resource this action releases.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl fmt::Debug for Closer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closer")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

/// A readable stream composed of zero or more decoder layers over a raw
/// file handle (or standard input).
///
/// Reads delegate to the innermost decoder; errors from the decoder
/// propagate verbatim. The stream owns every layer it was constructed with:
/// dropping it releases the whole chain exactly once, and [`Reader::close`]
/// does the same while additionally reporting every release failure.
pub struct Reader {
    source: String,
    compression: Compression,
    inner: Box<dyn Read + Send>,
    closers: Vec<Closer>,
}

impl Reader {
    /// Create a stream over an already-composed decoding chain.
    ///
    /// Convention for `source`: `"-"` for stdin, the file path otherwise.
    pub fn new(
        source: impl Into<String>,
        compression: Compression,
        inner: Box<dyn Read + Send>,
    ) -> Self {
        Self {
            source: source.into(),
            compression,
            inner,
            closers: Vec::new(),
        }
    }

    /// Push a release action to run when this stream is closed.
    ///
    /// Actions run in reverse push order, each exactly once.
    pub fn with_closer(mut self, closer: Closer) -> Self {
        self.closers.push(closer);
        self
    }

    /// Returns the identifier this stream was opened from.
    ///
    /// This is used for error messages. Convention: "-" for stdin, file
    /// path for files.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The suffix class this stream was opened with.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Release every owned resource, reporting every failure.
    ///
    /// Closers run in reverse acquisition order; a failing closer does not
    /// stop the ones after it. All failures are collected into a single
    /// [`CloseError`]. The decoding chain itself (decoder state and file
    /// handle) is released afterwards by drop. Consuming `self` makes a
    /// second close unrepresentable.
    pub fn close(self) -> Result<(), CloseError> {
        let Reader {
            inner, mut closers, ..
        } = self;

        let mut errors = Vec::new();
        while let Some(closer) = closers.pop() {
            if let Err(error) = (closer.run)() {
                errors.push(SingleCloseError {
                    resource: closer.resource,
                    error,
                });
            }
        }
        drop(inner);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CloseError { errors })
        }
    }
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("source", &self.source)
            .field("compression", &self.compression)
            .field("closers", &self.closers)
            .finish_non_exhaustive()
    }
}
