// SPDX-License-Identifier: MIT
//
// tint-term — terminal styling primitives for tint.
//
// The leaf layer of the rendering pipeline. It knows the byte-level encoding
// of color and attribute tokens (style), how to see past them when measuring
// text (strip), how to cut and pad text by code point (width), and the handful
// of screen/cursor sequences a full-screen renderer needs (ansi).
//
// Nothing here reads configuration or holds state. Every function is either
// pure or writes to a caller-supplied `impl Write` and propagates its error.

pub mod ansi;
pub mod color;
pub mod output;
pub mod strip;
pub mod style;
pub mod terminal;
pub mod width;

pub use output::OutputBuffer;
pub use strip::{strip_style, visible_width};
pub use style::{apply_style, Attr, Style, RESET};
pub use width::{center, center_styled, char_count, clip, pad_left, pad_right};
