// SPDX-License-Identifier: MIT
//
// Screen and cursor control sequences.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit. Callers compose these into frames; the
// `OutputBuffer` collects them so a whole frame goes out in one write.
//
// Cursor positions are 1-based, as the terminal sees them. Anything below 1
// is clamped to 1 rather than rejected.
//
// All functions return `io::Result` propagated from the underlying writer.

use std::io::{self, Write};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(row, col)` using CUP. Both are 1-based.
///
/// Values below 1 are clamped to 1.
#[inline]
pub fn move_to(w: &mut impl Write, row: i32, col: i32) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row.max(1), col.max(1))
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn hide_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn show_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2). The cursor does not move.
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Clear the current line (EL 2) and return to column 1.
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K\r")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(crate::style::RESET.as_bytes())
}

// ─── Alternate Screen ───────────────────────────────────────────────────────

/// Enter the alternate screen buffer (DEC Private Mode 1049).
///
/// The original terminal content is preserved and restored on exit.
#[inline]
pub fn enter_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit the alternate screen buffer and restore original content.
#[inline]
pub fn exit_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
