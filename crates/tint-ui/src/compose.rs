//! Line compositor — the single choke point between renderers and the sink.
//!
//! A styled line is longer in bytes than it looks on screen, so centering
//! can't measure the line itself. Every line therefore travels with a
//! separately tracked *visible width*: the code-point count of its plain
//! content.
//!
//! - [`write_component`] handles single-role lines: clip, style, measure.
//! - [`write_composite`] handles lines already stitched together from several
//!   roles. The caller passes the visible width; nothing here re-derives it
//!   by stripping. A wrong width silently mis-centers.
//! - [`Spans`] builds multi-role lines and keeps the visible width in step
//!   with the text, so renderers don't have to count by hand.
//!
//! Every line ends with exactly one `\n` and reaches the sink in one
//! `write_all`.

use std::io::{self, Write};

use tint_term::{apply_style, char_count, clip, Style};

use crate::config::{LayoutConfig, RenderConfig};

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Clip `plain` to `width` (0 = no clipping), style it, and write it as one
/// centered-if-configured line.
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn write_component(
    w: &mut impl Write,
    config: &RenderConfig,
    style: &Style,
    plain: &str,
    width: usize,
) -> io::Result<()> {
    let plain = if width > 0 { clip(width, plain) } else { plain };
    let styled = apply_style(style, plain, config.color_disabled);
    write_composite(w, &config.layout, &styled, char_count(plain))
}

/// Write a fully styled `line` whose on-screen width is `visible_width`.
///
/// When centering is active the line is padded with `floor(pad / 2)` spaces
/// on the left and the remainder on the right, where
/// `pad = max_width - visible_width` (never negative).
///
/// # Errors
///
/// Propagates the sink's write error.
pub fn write_composite(
    w: &mut impl Write,
    layout: &LayoutConfig,
    line: &str,
    visible_width: usize,
) -> io::Result<()> {
    let (left, right) = if layout.is_centering() {
        let pad = layout.max_width.saturating_sub(visible_width);
        let left = pad / 2;
        tracing::trace!(visible_width, pad, max_width = layout.max_width, "centering line");
        (left, pad - left)
    } else {
        (0, 0)
    };

    let mut out = String::with_capacity(left + line.len() + right + 1);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', right));
    out.push('\n');
    w.write_all(out.as_bytes())
}

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

/// A line under construction from differently styled pieces.
///
/// The visible width grows only by the plain text pushed, never by the style
/// tokens wrapped around it.
#[derive(Debug, Default)]
pub struct Spans {
    text: String,
    visible: usize,
    color_disabled: bool,
}

impl Spans {
    /// An empty line. `color_disabled` applies to every styled push.
    #[must_use]
    pub const fn new(color_disabled: bool) -> Self {
        Self {
            text: String::new(),
            visible: 0,
            color_disabled,
        }
    }

    /// Append unstyled text.
    pub fn push_plain(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self.visible += char_count(text);
        self
    }

    /// Append `text` wrapped in `style`.
    pub fn push_styled(&mut self, style: &Style, text: &str) -> &mut Self {
        self.text.push_str(&apply_style(style, text, self.color_disabled));
        self.visible += char_count(text);
        self
    }

    /// Code points that will show on screen.
    #[inline]
    #[must_use]
    pub const fn visible_width(&self) -> usize {
        self.visible
    }

    /// The styled bytes so far.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Write the line through [`write_composite`].
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn write_to(&self, w: &mut impl Write, layout: &LayoutConfig) -> io::Result<()> {
        write_composite(w, layout, &self.text, self.visible)
    }
}
