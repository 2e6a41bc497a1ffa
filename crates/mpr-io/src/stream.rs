//! Chunked, newline-aware numeral reading from byte sources.
//!
//! A [`ByteSource`] is anything that can say whether its descriptor is
//! still usable and hand over bytes: a [`File`], standard input, or an
//! in-memory slice in tests. The reader validates the source before
//! touching it, accumulates bounded chunks, stops at the first newline
//! (only the first line of a multi-record source is the candidate
//! numeral), and hands the text to the parsing engine.
//!
//! Standard input is a process-wide resource; callers that redirect or
//! share it serialize through [`stdin_guard`].

use mpr_core::{parse_radix, ParseResult, Precision, RoundingMode};
use std::fs::File;
use std::io::{self, Read, Stdin, StdinLock};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace, warn};

/// Bytes requested from the source per read call.
pub const CHUNK_SIZE: usize = 512;

/// A byte-oriented source with a descriptor-validity pre-check.
///
/// `is_open` is consulted before any read; a source that reports
/// closed is never read. Reads that fail later (for example a
/// descriptor that is open but not readable) surface as `Err` and are
/// mapped to an absent result — never to a crash or an undefined read.
pub trait ByteSource {
    /// `true` while the underlying descriptor is usable.
    fn is_open(&self) -> bool;

    /// Read up to `buf.len()` bytes, returning how many were read;
    /// `Ok(0)` signals end of input.
    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl ByteSource for File {
    /// Probe the descriptor with a metadata query; a stale or closed
    /// descriptor fails it.
    fn is_open(&self) -> bool {
        self.metadata().is_ok()
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}

impl ByteSource for Stdin {
    fn is_open(&self) -> bool {
        true
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}

impl ByteSource for StdinLock<'_> {
    fn is_open(&self) -> bool {
        true
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}

impl ByteSource for &[u8] {
    fn is_open(&self) -> bool {
        true
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}

/// Read one textual numeral from `source`.
///
/// The descriptor is validated first; a closed source returns `None`
/// without a single read. Bytes accumulate in [`CHUNK_SIZE`] chunks
/// until the first `\n` (exclusive) or end of input. Empty,
/// whitespace-only, or non-UTF-8 content yields `None`; otherwise the
/// text goes to [`parse_radix`] with the given radix, precision, and
/// rounding mode.
pub fn read_real<S: ByteSource + ?Sized>(
    source: &mut S,
    radix: u32,
    prec: Precision,
    mode: RoundingMode,
) -> Option<ParseResult> {
    if !source.is_open() {
        warn!("byte source reports a closed descriptor; refusing to read");
        return None;
    }

    let mut accumulated: Vec<u8> = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = match source.read_bytes(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                debug!("read failed after {} bytes: {e}", accumulated.len());
                return None;
            }
        };
        trace!("read chunk of {n} bytes");
        match chunk[..n].iter().position(|&b| b == b'\n') {
            Some(newline) => {
                accumulated.extend_from_slice(&chunk[..newline]);
                break;
            }
            None => accumulated.extend_from_slice(&chunk[..n]),
        }
    }

    let text = match std::str::from_utf8(&accumulated) {
        Ok(text) => text,
        Err(e) => {
            debug!("accumulated bytes are not UTF-8: {e}");
            return None;
        }
    };
    if text.trim_matches(|c: char| c.is_ascii_whitespace()).is_empty() {
        debug!("accumulated content is empty or whitespace-only");
        return None;
    }
    parse_radix(text, radix, prec, mode)
}

/// Read one numeral from the first line of standard input.
///
/// Convenience wrapper over [`read_real`] on the locked standard
/// input; blocks until bytes arrive or the stream ends.
pub fn read_real_from_stdin(
    radix: u32,
    prec: Precision,
    mode: RoundingMode,
) -> Option<ParseResult> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    read_real(&mut lock, radix, prec, mode)
}

static STDIN_MUTEX: Mutex<()> = Mutex::new(());

/// Acquire the process-wide standard-input critical section.
///
/// Standard input is one descriptor for the whole process; any caller
/// that redirects it, or any pair of threads that both consume it,
/// must hold this guard for the duration. Poisoning is ignored — the
/// guard protects a descriptor, not in-memory state.
pub fn stdin_guard() -> MutexGuard<'static, ()> {
    STDIN_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}
