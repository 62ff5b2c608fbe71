// SPDX-License-Identifier: MIT
//
// Style stripping — recover the printable text under a styled string.
//
// Recognized tokens are well-formed SGR sequences: ESC '[' followed by any
// run of digits and semicolons, terminated by 'm'. That one grammar covers
// everything `style::Style` can produce (base-16 and 256-color foreground and
// background, attribute sets, reset).
//
// Anything else stays in place: a truncated `ESC[38;5`, a lone ESC, or a
// non-SGR CSI like `ESC[2J`. Stripping is a best-effort width aid, not a
// terminal parser, and it never fails.
//
// Removing one token can splice two fragments into a new well-formed token
// (`ESC ESC[0m [0m` → `ESC[0m`). We strip to a fixed point so the result is
// idempotent regardless.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static SGR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").unwrap_or_else(|e| unreachable!("SGR pattern is valid: {e}"))
});

/// Remove every recognized style token from `text`.
///
/// Borrows when there is nothing to strip.
#[must_use]
pub fn strip_style(text: &str) -> Cow<'_, str> {
    if !SGR.is_match(text) {
        return Cow::Borrowed(text);
    }
    let mut out = SGR.replace_all(text, "").into_owned();
    while SGR.is_match(&out) {
        out = SGR.replace_all(&out, "").into_owned();
    }
    Cow::Owned(out)
}

/// Visible width of a possibly-styled string, in code points.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_style(text).chars().count()
}

/// Whether `text` contains at least one recognized style token.
#[must_use]
pub fn has_style(text: &str) -> bool {
    SGR.is_match(text)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
