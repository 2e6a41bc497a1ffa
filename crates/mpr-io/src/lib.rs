//! # mpr-io
//!
//! Descriptor-facing adapters for mpreal-rs: reading a textual numeral
//! from a byte-oriented source (files, standard input) and a small
//! printf-style formatted read/write surface.
//!
//! Every resource failure — a closed or unreadable descriptor, a write
//! that cannot complete, malformed bytes — is reported as an absent
//! result. Nothing in this crate panics on a bad descriptor and
//! nothing retries; retry policy belongs to the caller.

#![warn(missing_docs)]

/// Printf-style formatted write and best-effort formatted read.
pub mod printf;

/// Chunked, newline-aware numeral reading from byte sources.
pub mod stream;

pub use printf::{read_formatted, write_formatted, SinkTarget};
pub use stream::{read_real, read_real_from_stdin, stdin_guard, ByteSource};
