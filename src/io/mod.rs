//! The unified stream abstraction returned by `open`.
//!
//! This module provides:
//! - `Reader`: A readable, closeable stream composing decoder layers over a
//!   raw file handle (or stdin)
//! - `Closer`: A labeled release action owned by a `Reader`

mod reader;

pub use reader::{Closer, Reader};
