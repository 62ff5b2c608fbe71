// SPDX-License-Identifier: MIT
//
// Terminal queries — size and TTY detection.
//
// Safety: ioctl (TIOCGWINSZ) and isatty are the standard POSIX interfaces
// for these questions. Each unsafe block is a single libc call on a fixed
// file descriptor.
#![allow(unsafe_code)]
//
// Rendering never depends on these: layout comes from the configuration
// snapshot. Callers use them once, up front, to pick sensible defaults
// (a max width that fits, color off when piped).

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_when_present_is_nonzero() {
        // CI usually has no TTY; only check the invariant when one exists.
        if let Some(size) = get_size() {
            assert!(size.cols > 0);
            assert!(size.rows > 0);
        }
    }

    #[test]
    fn tty_query_does_not_panic() {
        let _ = stdout_is_tty();
    }
}
