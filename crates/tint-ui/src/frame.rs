//! Full-screen frame bracketing.
//!
//! A frame is everything drawn between [`begin_frame`] and [`end_frame`].
//! Callers usually render into an [`OutputBuffer`](tint_term::OutputBuffer)
//! and flush once so the terminal never shows a half-drawn screen.

use std::io::{self, Write};

use tint_term::ansi;

/// Switch to the alternate screen, hide the cursor, clear, and home.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn begin_frame(w: &mut impl Write) -> io::Result<()> {
    ansi::enter_alt_screen(w)?;
    ansi::hide_cursor(w)?;
    refresh(w)
}

/// Show the cursor and leave the alternate screen.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn end_frame(w: &mut impl Write) -> io::Result<()> {
    ansi::show_cursor(w)?;
    ansi::exit_alt_screen(w)
}

/// Clear the screen and move the cursor to row 1, column 1.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn refresh(w: &mut impl Write) -> io::Result<()> {
    ansi::clear_screen(w)?;
    ansi::move_to(w, 1, 1)
}
