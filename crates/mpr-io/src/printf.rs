//! Printf-style formatted write and best-effort formatted read.
//!
//! The directive vocabulary is small and scoped to the
//! arbitrary-precision type: `%f` (positional), `%e` (scientific),
//! `%g` (shortest), each with an optional significant-digit count as
//! in `%.10f`, plus `%%` for a literal percent. The first recognized
//! directive is substituted with the rendered value; surrounding text
//! is copied verbatim.
//!
//! The read side is deliberately weak: the engine offers no native
//! scanning primitive, so only an empty format string is rejected and
//! any textually valid numeral is accepted regardless of the
//! directives in the format. The asymmetry with the strictly validated
//! write side is intended behavior and must not be tightened.

use crate::stream::{read_real, ByteSource};
use mpr_core::{format_exp, format_radix, format_shortest, ParseResult, Precision, Real, RoundingMode};
use std::fs::File;
use std::io::{self, Stdout, StdoutLock, Write};
use tracing::{debug, warn};

/// A byte-oriented destination with a descriptor-validity pre-check,
/// mirroring [`ByteSource`] on the write side.
pub trait SinkTarget {
    /// `true` while the underlying descriptor is usable.
    fn is_open(&self) -> bool;

    /// Write the whole buffer.
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()>;
}

impl SinkTarget for File {
    fn is_open(&self) -> bool {
        self.metadata().is_ok()
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_all(buf)
    }
}

impl SinkTarget for Stdout {
    fn is_open(&self) -> bool {
        true
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_all(buf)
    }
}

impl SinkTarget for StdoutLock<'_> {
    fn is_open(&self) -> bool {
        true
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_all(buf)
    }
}

impl SinkTarget for Vec<u8> {
    fn is_open(&self) -> bool {
        true
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Scientific,
    Shortest,
}

#[derive(Debug)]
struct SplitFormat {
    prefix: String,
    conversion: Conversion,
    digits: usize,
    suffix: String,
}

/// Substitute `value` into `format` and write the result to `dest`.
///
/// Returns the number of bytes written, or `None` when the format
/// contains no recognized directive, the destination descriptor is
/// invalid or closed, or the write fails.
pub fn write_formatted<D: SinkTarget + ?Sized>(
    dest: &mut D,
    format: &str,
    value: &Real,
    mode: RoundingMode,
) -> Option<usize> {
    if !dest.is_open() {
        warn!("destination reports a closed descriptor; refusing to write");
        return None;
    }
    let split = match split_format(format) {
        Some(split) => split,
        None => {
            debug!("format string {format:?} contains no recognized directive");
            return None;
        }
    };
    let rendered = match split.conversion {
        Conversion::Fixed => format_radix(value, 10, split.digits, mode),
        Conversion::Scientific => format_exp(value, 10, split.digits, mode),
        Conversion::Shortest => format_shortest(value, 10, split.digits, mode),
    };
    let out = format!("{}{}{}", split.prefix, rendered, split.suffix);
    match dest.write_bytes(out.as_bytes()) {
        Ok(()) => Some(out.len()),
        Err(e) => {
            debug!("formatted write failed: {e}");
            None
        }
    }
}

/// Best-effort formatted read: reject an empty format, then read a
/// numeral from `source` exactly as [`read_real`] would, with radix
/// autodetection.
///
/// A syntactically unrecognized format does not prevent a textually
/// valid numeral from being parsed; see the module documentation.
pub fn read_formatted<S: ByteSource + ?Sized>(
    source: &mut S,
    format: &str,
    prec: Precision,
    mode: RoundingMode,
) -> Option<ParseResult> {
    if format.is_empty() {
        debug!("empty format string rejected");
        return None;
    }
    read_real(source, 0, prec, mode)
}

/// Locate the first recognized directive. Percent escapes (`%%`)
/// collapse into literal text; unrecognized directives stay verbatim.
fn split_format(format: &str) -> Option<SplitFormat> {
    let mut prefix = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '%' {
            prefix.push(c);
            continue;
        }
        if let Some(&(_, '%')) = chars.peek() {
            prefix.push('%');
            chars.next();
            continue;
        }
        // Optional ".N" digit count between the percent and the
        // conversion letter.
        let rest = &format[i + 1..];
        let (digits, digits_len) = match rest.strip_prefix('.') {
            Some(after_point) => {
                let count = after_point
                    .bytes()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if count == 0 {
                    // "%." with no digits: not a directive.
                    prefix.push('%');
                    continue;
                }
                match after_point[..count].parse::<usize>() {
                    Ok(digits) => (digits, count + 1),
                    Err(_) => {
                        prefix.push('%');
                        continue;
                    }
                }
            }
            None => (0, 0),
        };
        let conversion = match rest[digits_len..].chars().next() {
            Some('f') => Some(Conversion::Fixed),
            Some('e') => Some(Conversion::Scientific),
            Some('g') => Some(Conversion::Shortest),
            _ => None,
        };
        match conversion {
            Some(conversion) => {
                return Some(SplitFormat {
                    prefix,
                    conversion,
                    digits,
                    suffix: format[i + 1 + digits_len + 1..].to_owned(),
                });
            }
            None => {
                // Unrecognized directive: emit verbatim and move on.
                prefix.push('%');
            }
        }
    }
    None
}
