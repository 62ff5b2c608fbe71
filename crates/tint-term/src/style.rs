// SPDX-License-Identifier: MIT
//
// Style tokens — the SGR sequences that color and decorate text.
//
// A `Style` is an opaque, printable token: "set foreground to palette index
// N", "set background", an attribute set, or the universal reset. Renderers
// never look inside a Style once it is built; they only prepend it to text
// and close the span with RESET. Measuring what a styled string looks like
// on screen is the `strip` module's job.
//
// All constructors produce well-formed SGR (`ESC [ params m`), which is
// exactly the grammar `strip::strip_style` recognizes. That pairing is what
// makes `strip_style(apply_style(s, t, false)) == t` hold.

use std::borrow::Cow;
use std::fmt;

/// The universal reset token (SGR 0). Clears every color and attribute.
pub const RESET: &str = "\x1b[0m";

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// Each flag maps to one SGR parameter. Combine with bitwise OR and turn
    /// the set into a single token with [`Style::attrs`]:
    ///
    /// ```
    /// use tint_term::style::{Attr, Style};
    ///
    /// let s = Style::attrs(Attr::BOLD | Attr::UNDERLINE);
    /// assert_eq!(s.as_str(), "\x1b[1;4m");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3 — italic. Not always supported.
        const ITALIC        = 1 << 2;
        /// SGR 4 — single underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 5 — slow blink.
        const BLINK         = 1 << 4;
        /// SGR 7 — swap foreground and background.
        const REVERSE       = 1 << 5;
        /// SGR 8 — invisible text.
        const HIDDEN        = 1 << 6;
        /// SGR 9 — crossed-out text.
        const STRIKETHROUGH = 1 << 7;
    }
}

impl Attr {
    /// SGR parameter codes for the set flags, in ascending order.
    fn codes(self) -> impl Iterator<Item = u8> {
        const TABLE: [(Attr, u8); 8] = [
            (Attr::BOLD, 1),
            (Attr::DIM, 2),
            (Attr::ITALIC, 3),
            (Attr::UNDERLINE, 4),
            (Attr::BLINK, 5),
            (Attr::REVERSE, 7),
            (Attr::HIDDEN, 8),
            (Attr::STRIKETHROUGH, 9),
        ];
        TABLE
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// An opaque SGR token applied in front of a span of text.
///
/// The empty style means "no color" — applying it is a no-op.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Style(Cow<'static, str>);

impl Style {
    /// The empty style. Applying it leaves text untouched.
    pub const NONE: Self = Self(Cow::Borrowed(""));

    /// The reset token as a style.
    pub const RESET: Self = Self(Cow::Borrowed(RESET));

    /// Wrap a pre-built escape sequence.
    ///
    /// No validation happens here; a token `strip_style` does not recognize
    /// will count toward visible width.
    #[must_use]
    pub fn from_sequence(seq: impl Into<Cow<'static, str>>) -> Self {
        Self(seq.into())
    }

    /// 256-color foreground: `ESC[38;5;Nm`.
    #[must_use]
    pub fn fg256(idx: u8) -> Self {
        Self(Cow::Owned(format!("\x1b[38;5;{idx}m")))
    }

    /// 256-color background: `ESC[48;5;Nm`.
    #[must_use]
    pub fn bg256(idx: u8) -> Self {
        Self(Cow::Owned(format!("\x1b[48;5;{idx}m")))
    }

    /// Foreground using the compact base-16 codes where possible.
    ///
    /// Indices 0–7 map to SGR 30–37, 8–15 to SGR 90–97, anything higher
    /// falls back to the 256-color form.
    #[must_use]
    pub fn fg(idx: u8) -> Self {
        match idx {
            0..=7 => Self(Cow::Owned(format!("\x1b[{}m", 30 + u16::from(idx)))),
            8..=15 => Self(Cow::Owned(format!("\x1b[{}m", 82 + u16::from(idx)))),
            _ => Self::fg256(idx),
        }
    }

    /// Background using the compact base-16 codes where possible.
    ///
    /// Same encoding strategy as [`Style::fg`] with SGR 40–47 / 100–107.
    #[must_use]
    pub fn bg(idx: u8) -> Self {
        match idx {
            0..=7 => Self(Cow::Owned(format!("\x1b[{}m", 40 + u16::from(idx)))),
            8..=15 => Self(Cow::Owned(format!("\x1b[{}m", 92 + u16::from(idx)))),
            _ => Self::bg256(idx),
        }
    }

    /// One SGR sequence carrying every attribute in `attr`.
    ///
    /// An empty set yields [`Style::NONE`].
    #[must_use]
    pub fn attrs(attr: Attr) -> Self {
        if attr.is_empty() {
            return Self::NONE;
        }
        let params: Vec<String> = attr.codes().map(|c| c.to_string()).collect();
        Self(Cow::Owned(format!("\x1b[{}m", params.join(";"))))
    }

    /// Concatenate two styles, e.g. a color followed by bold.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self(Cow::Owned(format!("{}{}", self.0, other.0)))
    }

    /// The raw escape bytes.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the "no color" style.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shorthand for [`apply_style`] with this style.
    #[inline]
    #[must_use]
    pub fn paint<'a>(&self, text: &'a str, color_disabled: bool) -> Cow<'a, str> {
        apply_style(self, text, color_disabled)
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Escape the ESC byte so test failures stay readable.
        write!(f, "Style({:?})", self.0)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap `text` in `style` and a trailing [`RESET`].
///
/// Returns `text` unchanged (borrowed) when color is disabled, the style is
/// empty, or the text is empty — an empty span never emits a dangling
/// color/reset pair.
#[must_use]
pub fn apply_style<'a>(style: &Style, text: &'a str, color_disabled: bool) -> Cow<'a, str> {
    if color_disabled || style.is_empty() || text.is_empty() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(style.as_str().len() + text.len() + RESET.len());
    out.push_str(style.as_str());
    out.push_str(text);
    out.push_str(RESET);
    Cow::Owned(out)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fg256_sequence() {
        assert_eq!(Style::fg256(42).as_str(), "\x1b[38;5;42m");
        assert_eq!(Style::fg256(255).as_str(), "\x1b[38;5;255m");
    }

    #[test]
    fn bg256_sequence() {
        assert_eq!(Style::bg256(200).as_str(), "\x1b[48;5;200m");
    }

    #[test]
    fn fg_compact_ranges() {
        assert_eq!(Style::fg(0).as_str(), "\x1b[30m");
        assert_eq!(Style::fg(7).as_str(), "\x1b[37m");
        assert_eq!(Style::fg(8).as_str(), "\x1b[90m");
        assert_eq!(Style::fg(15).as_str(), "\x1b[97m");
        assert_eq!(Style::fg(16).as_str(), "\x1b[38;5;16m");
    }

    #[test]
    fn bg_compact_ranges() {
        assert_eq!(Style::bg(2).as_str(), "\x1b[42m");
        assert_eq!(Style::bg(10).as_str(), "\x1b[102m");
        assert_eq!(Style::bg(100).as_str(), "\x1b[48;5;100m");
    }

    #[test]
    fn attrs_single_and_combined() {
        assert_eq!(Style::attrs(Attr::BOLD).as_str(), "\x1b[1m");
        assert_eq!(Style::attrs(Attr::REVERSE).as_str(), "\x1b[7m");
        assert_eq!(
            Style::attrs(Attr::BOLD | Attr::ITALIC | Attr::STRIKETHROUGH).as_str(),
            "\x1b[1;3;9m"
        );
    }

    #[test]
    fn attrs_all_flags() {
        assert_eq!(Style::attrs(Attr::all()).as_str(), "\x1b[1;2;3;4;5;7;8;9m");
    }

    #[test]
    fn attrs_empty_is_none() {
        assert!(Style::attrs(Attr::empty()).is_empty());
    }

    #[test]
    fn then_concatenates() {
        let s = Style::fg256(14).then(&Style::attrs(Attr::BOLD));
        assert_eq!(s.as_str(), "\x1b[38;5;14m\x1b[1m");
        assert_eq!(Style::NONE.then(&Style::RESET), Style::RESET);
        assert_eq!(Style::RESET.then(&Style::NONE), Style::RESET);
    }

    #[test]
    fn apply_wraps_with_reset() {
        let out = apply_style(&Style::fg256(15), "hi", false);
        assert_eq!(out, "\x1b[38;5;15mhi\x1b[0m");
    }

    #[test]
    fn apply_is_noop_when_disabled() {
        let out = apply_style(&Style::fg256(15), "hi", true);
        assert!(matches!(out, Cow::Borrowed("hi")));
    }

    #[test]
    fn apply_is_noop_for_empty_style_or_text() {
        assert_eq!(apply_style(&Style::NONE, "hi", false), "hi");
        assert_eq!(apply_style(&Style::fg256(1), "", false), "");
    }

    #[test]
    fn paint_matches_apply() {
        let s = Style::fg(3);
        assert_eq!(s.paint("x", false), apply_style(&s, "x", false));
    }

    #[test]
    fn display_writes_raw_bytes() {
        assert_eq!(Style::RESET.to_string(), RESET);
    }
}
