// SPDX-License-Identifier: MIT
//
// Frame buffer for rendered lines.
//
// Component renderers emit one `write_all` per line. A showcase or status
// screen draws a dozen of them plus a few screen sequences; collecting them
// here lets the caller hand the terminal one complete frame.
//
// The bytes are whatever the renderers wrote: UTF-8 text with SGR tokens.

use std::borrow::Cow;
use std::io::{self, Write};

/// In-memory sink that collects a frame and flushes it in one write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    frame: Vec<u8>,
}

impl OutputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { frame: Vec::new() }
    }

    /// Bytes collected so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.frame
    }

    /// The frame as text. Invalid UTF-8 (only possible from raw byte writes)
    /// is replaced rather than rejected.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.frame)
    }

    /// Number of complete lines (terminated by `\n`) in the frame.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.frame.iter().filter(|&&b| b == b'\n').count()
    }

    /// Take the collected bytes, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.frame)
    }

    /// [`flush_to`](Self::flush_to) the locked stdout.
    ///
    /// # Errors
    ///
    /// Propagates stdout's write or flush error.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        self.flush_to(&mut io::stdout().lock())
    }

    /// Write the frame to `w` in one `write_all`, then flush `w`.
    ///
    /// The buffer is emptied only on success; a failed flush leaves the frame
    /// in place for a retry. An empty buffer touches `w` not at all.
    ///
    /// # Errors
    ///
    /// Propagates `w`'s write or flush error.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if self.frame.is_empty() {
            return Ok(());
        }
        w.write_all(&self.frame)?;
        w.flush()?;
        self.frame.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.frame.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
