//! Render configuration — the read-only snapshot every render call uses.
//!
//! The renderer never reaches for global state. Callers build a
//! [`RenderConfig`] once (from wherever their settings live) and hand it to
//! [`Tui::new`](crate::Tui::new), which fills unset layout fields with
//! defaults and keeps the result for the lifetime of the renderer.
//!
//! # Layout fields
//!
//! | Field                   | Unset when | Default |
//! |-------------------------|------------|---------|
//! | `menu_selected_prefix`  | empty      | `">"`   |
//! | `menu_unselected_prefix`| empty      | `" "`   |
//! | `menu_index_width`      | 0          | 2       |
//! | `input_cursor`          | empty      | `"_"`   |
//! | `divider_width`         | 0          | 40      |
//! | `max_width`             | —          | 0 (unconstrained) |
//! | `centered`              | —          | false   |
//!
//! Centering only happens when `max_width > 0`; with no maximum the
//! `centered` flag is ignored.

use tint_theme::Palette;

pub const DEFAULT_SELECTED_PREFIX: &str = ">";
pub const DEFAULT_UNSELECTED_PREFIX: &str = " ";
pub const DEFAULT_MENU_INDEX_WIDTH: usize = 2;
pub const DEFAULT_INPUT_CURSOR: &str = "_";
pub const DEFAULT_DIVIDER_WIDTH: usize = 40;

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Layout parameters shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Marker in front of the selected menu entry.
    pub menu_selected_prefix: String,
    /// Marker in front of every other menu entry.
    pub menu_unselected_prefix: String,
    /// Field width the 1-based menu index is right-aligned in.
    pub menu_index_width: usize,
    /// Glyph appended to an active input row.
    pub input_cursor: String,
    /// Divider length when nothing else decides it.
    pub divider_width: usize,
    /// Maximum content width; 0 means unconstrained.
    pub max_width: usize,
    /// Center every line within `max_width`.
    pub centered: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            menu_selected_prefix: DEFAULT_SELECTED_PREFIX.to_owned(),
            menu_unselected_prefix: DEFAULT_UNSELECTED_PREFIX.to_owned(),
            menu_index_width: DEFAULT_MENU_INDEX_WIDTH,
            input_cursor: DEFAULT_INPUT_CURSOR.to_owned(),
            divider_width: DEFAULT_DIVIDER_WIDTH,
            max_width: 0,
            centered: false,
        }
    }
}

impl LayoutConfig {
    /// Every field unset. [`normalized`](Self::normalized) turns this into
    /// [`LayoutConfig::default`].
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            menu_selected_prefix: String::new(),
            menu_unselected_prefix: String::new(),
            menu_index_width: 0,
            input_cursor: String::new(),
            divider_width: 0,
            max_width: 0,
            centered: false,
        }
    }

    /// Fill unset fields with defaults. Set fields are kept as-is.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.menu_selected_prefix.is_empty() {
            DEFAULT_SELECTED_PREFIX.clone_into(&mut self.menu_selected_prefix);
        }
        if self.menu_unselected_prefix.is_empty() {
            DEFAULT_UNSELECTED_PREFIX.clone_into(&mut self.menu_unselected_prefix);
        }
        if self.menu_index_width == 0 {
            self.menu_index_width = DEFAULT_MENU_INDEX_WIDTH;
        }
        if self.input_cursor.is_empty() {
            DEFAULT_INPUT_CURSOR.clone_into(&mut self.input_cursor);
        }
        if self.divider_width == 0 {
            self.divider_width = DEFAULT_DIVIDER_WIDTH;
        }
        self
    }

    /// Whether lines are padded to center them within `max_width`.
    #[inline]
    #[must_use]
    pub const fn is_centering(&self) -> bool {
        self.centered && self.max_width > 0
    }

    /// Width budget for one render call.
    ///
    /// `param_width` wins when non-zero, then `max_width`, else 0
    /// (unconstrained).
    #[inline]
    #[must_use]
    pub const fn effective_width(&self, param_width: usize) -> usize {
        if param_width > 0 {
            param_width
        } else {
            self.max_width
        }
    }

    #[must_use]
    pub const fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    #[must_use]
    pub const fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    #[must_use]
    pub fn with_menu_prefixes(mut self, selected: &str, unselected: &str) -> Self {
        selected.clone_into(&mut self.menu_selected_prefix);
        unselected.clone_into(&mut self.menu_unselected_prefix);
        self
    }

    #[must_use]
    pub const fn with_menu_index_width(mut self, width: usize) -> Self {
        self.menu_index_width = width;
        self
    }

    #[must_use]
    pub fn with_input_cursor(mut self, cursor: &str) -> Self {
        cursor.clone_into(&mut self.input_cursor);
        self
    }

    #[must_use]
    pub const fn with_divider_width(mut self, width: usize) -> Self {
        self.divider_width = width;
        self
    }
}

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Everything a render call reads: color switch, palette, layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit plain text with no style tokens at all.
    pub color_disabled: bool,
    pub palette: Palette,
    pub layout: LayoutConfig,
}

impl RenderConfig {
    #[must_use]
    pub fn new(palette: Palette, layout: LayoutConfig) -> Self {
        Self {
            color_disabled: false,
            palette,
            layout,
        }
    }

    #[must_use]
    pub const fn with_color_disabled(mut self, disabled: bool) -> Self {
        self.color_disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}
