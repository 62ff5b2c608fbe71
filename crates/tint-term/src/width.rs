// SPDX-License-Identifier: MIT
//
// Width-aware text primitives.
//
// Every width here is a count of Unicode scalar values (code points), not
// bytes and not terminal columns. "héllo" is 5 wide even though it is 6
// bytes. Double-width and combining characters are deliberately not special
// cased; a CJK glyph counts as 1.
//
// A width of 0 means "nothing fits": clip returns "", pads return "".

use crate::strip::visible_width;

/// Number of code points in `s`.
#[inline]
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// The first `width` code points of `s`. No ellipsis.
///
/// Returns a subslice, so clipping never allocates.
#[must_use]
pub fn clip(width: usize, s: &str) -> &str {
    if width == 0 {
        return "";
    }
    match s.char_indices().nth(width) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Clip `s` to `width`, then prepend spaces up to exactly `width`.
#[must_use]
pub fn pad_left(width: usize, s: &str) -> String {
    let s = clip(width, s);
    let pad = width.saturating_sub(char_count(s));
    let mut out = String::with_capacity(s.len() + pad);
    push_spaces(&mut out, pad);
    out.push_str(s);
    out
}

/// Clip `s` to `width`, then append spaces up to exactly `width`.
#[must_use]
pub fn pad_right(width: usize, s: &str) -> String {
    let s = clip(width, s);
    let pad = width.saturating_sub(char_count(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    push_spaces(&mut out, pad);
    out
}

/// Clip `s` to `width` and center it. The right side gets the odd space.
#[must_use]
pub fn center(width: usize, s: &str) -> String {
    let s = clip(width, s);
    let pad = width.saturating_sub(char_count(s));
    surround(s, pad)
}

/// Center an already-styled string using its visible width.
///
/// Unlike [`center`] this never clips: cutting through a styled string could
/// split an escape sequence. A tag already `width` wide or wider comes back
/// unchanged.
#[must_use]
pub fn center_styled(width: usize, tag: &str) -> String {
    let visible = visible_width(tag);
    if visible >= width {
        return tag.to_owned();
    }
    surround(tag, width - visible)
}

/// `floor(pad / 2)` spaces, `s`, then the remaining spaces.
fn surround(s: &str, pad: usize) -> String {
    let left = pad / 2;
    let right = pad - left;
    let mut out = String::with_capacity(s.len() + pad);
    push_spaces(&mut out, left);
    out.push_str(s);
    push_spaces(&mut out, right);
    out
}

#[inline]
fn push_spaces(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}

// ─── Tests ───────────────────────────────────────────────────────────────────
