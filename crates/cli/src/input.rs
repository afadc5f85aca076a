//! Line-oriented input contract.
//!
//! Each read consumes exactly one line (or, for tokens, one non-blank line).
//! Whatever the caller doesn't use from that line is discarded, so stray
//! trailing input never leaks into the next prompt. Bytes that are not valid
//! UTF-8 are replaced with U+FFFD rather than failing the read.

use std::io::{self, BufRead};

/// Reads whole lines or single tokens from a buffered source.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Read one line without its terminator, truncated to `max_chars`.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, max_chars: usize) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(truncate_chars(line, max_chars).to_string()))
    }

    /// Read the first whitespace-delimited token, truncated to `max_chars`.
    ///
    /// Blank lines are skipped; the rest of the token's line is dropped.
    /// Returns `None` at end of input.
    pub fn read_token(&mut self, max_chars: usize) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.read_line(usize::MAX)? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(truncate_chars(token, max_chars).to_string()));
            }
        }
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
