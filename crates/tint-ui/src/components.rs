//! Component renderers — menus, titles, selectors, inputs, dividers.
//!
//! Each renderer follows the same steps:
//!
//! 1. resolve the effective width (request override, else `max_width`)
//! 2. build the plain content
//! 3. reserve room for fixed decorations, clip the variable parts
//! 4. style each part by role
//! 5. hand the line and its visible width to the compositor
//!
//! | Component | Plain shape                         | Roles                   |
//! |-----------|-------------------------------------|-------------------------|
//! | Menu      | `{prefix} {index}) {label}` per row | title (selected) / menu |
//! | Title     | `{text}`                            | title                   |
//! | Selector  | `{label}: < {current} >`            | prompt, data            |
//! | Input     | `{label}: {value}{cursor}`          | prompt, data, prompt    |
//! | Divider   | `{fill}` × width                    | divider                 |
//!
//! Requests are plain data. Anything that isn't a string (counts, enums,
//! numbers) is converted by the caller before it gets here.

use std::io::{self, Write};

use tint_term::{char_count, clip, pad_right, Style};
use tint_theme::Role;

use crate::compose::{write_component, Spans};
use crate::config::RenderConfig;
use crate::frame;

/// Fill character when a divider request doesn't name one.
pub const DEFAULT_DIVIDER_FILL: char = '-';

/// Decoration around a selector's current value: `": < "` + `" >"`.
const SELECTOR_OPEN: &str = ": < ";
const SELECTOR_CLOSE: &str = " >";

/// Separator between a label and its value.
const LABEL_SEP: &str = ": ";

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One row of a [`MenuRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub selected: bool,
}

impl MenuEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
        }
    }
}

/// A block of numbered menu entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRequest {
    pub items: Vec<MenuEntry>,
    /// Width override; 0 uses the configured maximum.
    pub width: usize,
}

impl MenuRequest {
    #[must_use]
    pub const fn new(items: Vec<MenuEntry>) -> Self {
        Self { items, width: 0 }
    }
}

/// A single title line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRequest {
    pub text: String,
    /// Width override; 0 uses the configured maximum.
    pub width: usize,
}

impl TitleRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: 0,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// A `label: < current >` chooser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorRequest {
    pub label: String,
    pub items: Vec<String>,
    /// 0-based index into `items`. Out of range renders an empty choice.
    pub current: usize,
    /// Width override; 0 uses the configured maximum.
    pub width: usize,
}

impl SelectorRequest {
    #[must_use]
    pub fn new<I, S>(label: impl Into<String>, items: I, current: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
            current,
            width: 0,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// A `label: value` input row, with a cursor glyph when active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRequest {
    pub label: String,
    pub value: String,
    pub active: bool,
    /// Width override; 0 uses the configured maximum.
    pub width: usize,
}

impl InputRequest {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            active,
            width: 0,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// A horizontal rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DividerRequest {
    /// Fill character; `None` uses [`DEFAULT_DIVIDER_FILL`].
    pub fill: Option<char>,
    /// Explicit length; 0 falls back to `max_width`, then `divider_width`.
    pub width: usize,
}

impl DividerRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self { fill: None, width: 0 }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: char) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

// ---------------------------------------------------------------------------
// Tui
// ---------------------------------------------------------------------------

/// Stateless component renderer bound to one configuration snapshot.
///
/// Every method writes complete lines to the given sink and returns the
/// sink's error, if any. Nothing is retained between calls.
#[derive(Debug, Clone, Default)]
pub struct Tui {
    config: RenderConfig,
}

impl Tui {
    /// Bind a renderer to `config`, filling unset layout fields with defaults.
    #[must_use]
    pub fn new(mut config: RenderConfig) -> Self {
        let layout = config.layout.clone().normalized();
        if layout != config.layout {
            tracing::debug!(?layout, "filled unset layout fields with defaults");
        }
        config.layout = layout;
        Self { config }
    }

    /// The snapshot this renderer draws with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn role(&self, role: Role) -> &Style {
        self.config.palette.style(role)
    }

    // ── Menu ──────────────────────────────────────────────────────────────

    /// Render one line per entry.
    ///
    /// Every entry is right-padded to the widest entry in the block, so when
    /// lines are centered they share one left margin and the prefixes stay
    /// aligned as a column. An empty request writes nothing.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn menu(&self, w: &mut impl Write, req: &MenuRequest) -> io::Result<()> {
        let width = self.config.layout.effective_width(req.width);

        let rows: Vec<(String, &Style)> = req
            .items
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let plain = self.menu_plain(i + 1, &entry.label, entry.selected);
                (plain, self.menu_style(entry.selected))
            })
            .collect();
        let block_width = rows.iter().map(|(plain, _)| char_count(plain)).max().unwrap_or(0);

        for (plain, style) in &rows {
            let padded = pad_right(block_width, plain);
            write_component(w, &self.config, style, &padded, width)?;
        }
        Ok(())
    }

    /// `"{prefix} {index}) {label}"` with the index right-aligned.
    pub(crate) fn menu_plain(&self, index: usize, label: &str, selected: bool) -> String {
        let layout = &self.config.layout;
        let prefix = if selected {
            &layout.menu_selected_prefix
        } else {
            &layout.menu_unselected_prefix
        };
        format!("{prefix} {index:>iw$}) {label}", iw = layout.menu_index_width)
    }

    pub(crate) fn menu_style(&self, selected: bool) -> &Style {
        self.role(if selected { Role::Title } else { Role::Menu })
    }

    // ── Title ─────────────────────────────────────────────────────────────

    /// Render the title text in the title role, clipped to the effective width.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn title(&self, w: &mut impl Write, req: &TitleRequest) -> io::Result<()> {
        let width = self.config.layout.effective_width(req.width);
        write_component(w, &self.config, self.role(Role::Title), &req.text, width)
    }

    // ── Selector ──────────────────────────────────────────────────────────

    /// Render `label: < current >`.
    ///
    /// Under a width budget the six decoration characters are reserved
    /// first, then the label yields to the current value, then the current
    /// value takes what the label left.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn selector(&self, w: &mut impl Write, req: &SelectorRequest) -> io::Result<()> {
        let mut current = req.items.get(req.current).map_or("", String::as_str);
        if req.current >= req.items.len() {
            tracing::trace!(index = req.current, len = req.items.len(), "selector index out of range");
        }

        let mut label = req.label.as_str();
        let width = self.config.layout.effective_width(req.width);
        if width > 0 {
            let decoration = SELECTOR_OPEN.len() + SELECTOR_CLOSE.len();
            label = clip(width.saturating_sub(char_count(current) + decoration), label);
            let remaining = width.saturating_sub(char_count(label) + SELECTOR_OPEN.len());
            current = clip(remaining.saturating_sub(SELECTOR_CLOSE.len()), current);
        }

        let mut line = Spans::new(self.config.color_disabled);
        line.push_styled(self.role(Role::Prompt), label)
            .push_plain(SELECTOR_OPEN)
            .push_styled(self.role(Role::Data), current)
            .push_plain(SELECTOR_CLOSE);
        line.write_to(w, &self.config.layout)
    }

    // ── Input ─────────────────────────────────────────────────────────────

    /// Render `label: value`, plus the cursor glyph when active.
    ///
    /// Under a width budget the label, separator, and cursor are reserved
    /// and only the value is clipped.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn input(&self, w: &mut impl Write, req: &InputRequest) -> io::Result<()> {
        let cursor = if req.active {
            self.config.layout.input_cursor.as_str()
        } else {
            ""
        };

        let mut value = req.value.as_str();
        let width = self.config.layout.effective_width(req.width);
        if width > 0 {
            let reserved = char_count(&req.label) + LABEL_SEP.len() + char_count(cursor);
            value = clip(width.saturating_sub(reserved), value);
        }

        let prompt = self.role(Role::Prompt);
        let mut line = Spans::new(self.config.color_disabled);
        line.push_styled(prompt, &req.label)
            .push_plain(LABEL_SEP)
            .push_styled(self.role(Role::Data), value)
            .push_styled(prompt, cursor);
        line.write_to(w, &self.config.layout)
    }

    // ── Divider ───────────────────────────────────────────────────────────

    /// Render the fill character repeated to the resolved width.
    ///
    /// Width priority: the request, then `max_width`, then `divider_width`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn divider(&self, w: &mut impl Write, req: &DividerRequest) -> io::Result<()> {
        let layout = &self.config.layout;
        let width = match layout.effective_width(req.width) {
            0 => layout.divider_width,
            n => n,
        };
        let fill = req.fill.unwrap_or(DEFAULT_DIVIDER_FILL);
        let plain: String = std::iter::repeat_n(fill, width).collect();
        write_component(w, &self.config, self.role(Role::Divider), &plain, 0)
    }

    // ── Screen ────────────────────────────────────────────────────────────

    /// Clear the screen and home the cursor.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn refresh(&self, w: &mut impl Write) -> io::Result<()> {
        frame::refresh(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use pretty_assertions::assert_eq;
    use tint_term::strip_style;
    use tint_theme::Palette;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn colored() -> Palette {
        Palette::none()
            .with(Role::Menu, Style::fg256(14))
            .with(Role::Title, Style::fg256(15))
            .with(Role::Prompt, Style::fg256(10))
            .with(Role::Data, Style::fg256(7))
            .with(Role::Divider, Style::fg256(8))
    }

    fn tui(layout: LayoutConfig) -> Tui {
        Tui::new(RenderConfig::new(colored(), layout))
    }

    fn plain_tui(layout: LayoutConfig) -> Tui {
        Tui::new(RenderConfig::new(colored(), layout).with_color_disabled(true))
    }

    fn centered(max_width: usize) -> LayoutConfig {
        LayoutConfig::default().with_max_width(max_width).with_centered(true)
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Style-stripped lines, without their terminators.
    fn lines(out: &str) -> Vec<String> {
        strip_style(out).lines().map(str::to_owned).collect()
    }

    // ── Menu ──────────────────────────────────────────────────────────────

    #[test]
    fn menu_renders_every_item_with_role_colors() {
        let t = tui(LayoutConfig::default());
        let req = MenuRequest::new(vec![MenuEntry::new("alpha", true), MenuEntry::new("beta", false)]);
        let out = render(|w| t.menu(w, &req));

        assert!(out.contains("\x1b[38;5;15m"), "selected uses title role: {out:?}");
        assert!(out.contains("\x1b[38;5;14m"), "unselected uses menu role: {out:?}");
        assert_eq!(lines(&out), vec![">  1) alpha", "   2) beta "]);
    }

    #[test]
    fn menu_block_alignment_shares_plain_width() {
        let t = plain_tui(LayoutConfig::default());
        let req = MenuRequest::new(vec![
            MenuEntry::new("Status", true),
            MenuEntry::new("Settings", false),
            MenuEntry::new("Logs", false),
        ]);
        let out = render(|w| t.menu(w, &req));
        let widths: Vec<usize> = lines(&out).iter().map(|l| char_count(l)).collect();
        assert_eq!(widths, vec![14, 14, 14]);
    }

    #[test]
    fn menu_centered_block_keeps_prefix_column() {
        let t = plain_tui(centered(30));
        let req = MenuRequest::new(vec![MenuEntry::new("Storage", true), MenuEntry::new("Net", false)]);
        let out = render(|w| t.menu(w, &req));
        let rows = lines(&out);
        assert_eq!(rows[0].find('>'), Some(8));
        assert_eq!(rows[0].find('1'), rows[1].find('2'));
        assert!(rows.iter().all(|r| char_count(r) == 30));
    }

    #[test]
    fn menu_custom_prefixes_and_index_width() {
        let layout = LayoutConfig::default()
            .with_menu_prefixes(">>", "..")
            .with_menu_index_width(4);
        let t = plain_tui(layout);
        let req = MenuRequest::new(vec![MenuEntry::new("a", false), MenuEntry::new("services", true)]);
        let out = render(|w| t.menu(w, &req));
        assert_eq!(out, "..    1) a       \n>>    2) services\n");
    }

    #[test]
    fn menu_width_clips_padded_rows() {
        let t = plain_tui(LayoutConfig::default());
        let mut req = MenuRequest::new(vec![MenuEntry::new("longer label", false)]);
        req.width = 8;
        assert_eq!(render(|w| t.menu(w, &req)), "   1) lo\n");
    }

    #[test]
    fn menu_empty_writes_nothing() {
        let t = tui(centered(20));
        assert_eq!(render(|w| t.menu(w, &MenuRequest::default())), "");
    }

    #[test]
    fn menu_no_color_has_no_escapes() {
        let t = plain_tui(LayoutConfig::default());
        let req = MenuRequest::new(vec![MenuEntry::new("item", false)]);
        let out = render(|w| t.menu(w, &req));
        assert!(!out.contains('\x1b'));
        assert!(out.contains("item"));
    }

    // ── Title ─────────────────────────────────────────────────────────────

    #[test]
    fn title_uses_title_role() {
        let t = tui(LayoutConfig::default());
        let out = render(|w| t.title(w, &TitleRequest::new("Main Menu")));
        assert_eq!(out, "\x1b[38;5;15mMain Menu\x1b[0m\n");
    }

    #[test]
    fn title_width_truncates_without_ellipsis() {
        let t = plain_tui(LayoutConfig::default());
        let out = render(|w| t.title(w, &TitleRequest::new("Hello World").with_width(5)));
        assert_eq!(out, "Hello\n");
    }

    #[test]
    fn title_centering_pads_to_max_width() {
        let t = plain_tui(centered(20));
        let out = render(|w| t.title(w, &TitleRequest::new("Hi")));
        assert_eq!(out, format!("{}Hi{}\n", " ".repeat(9), " ".repeat(9)));
    }

    #[test]
    fn title_without_max_width_ignores_centered_flag() {
        let t = plain_tui(LayoutConfig::default().with_centered(true));
        assert_eq!(render(|w| t.title(w, &TitleRequest::new("Hi"))), "Hi\n");
    }

    #[test]
    fn title_max_width_without_centering_only_clips() {
        let t = plain_tui(LayoutConfig::default().with_max_width(4));
        assert_eq!(render(|w| t.title(w, &TitleRequest::new("Settings"))), "Sett\n");
    }

    // ── Selector ──────────────────────────────────────────────────────────

    #[test]
    fn selector_renders_label_and_current() {
        let t = tui(LayoutConfig::default());
        let out = render(|w| t.selector(w, &SelectorRequest::new("mode", ["a", "b", "c"], 1)));
        assert_eq!(
            out,
            "\x1b[38;5;10mmode\x1b[0m: < \x1b[38;5;7mb\x1b[0m >\n"
        );
    }

    #[test]
    fn selector_out_of_range_is_empty_choice() {
        let t = plain_tui(LayoutConfig::default());
        let out = render(|w| t.selector(w, &SelectorRequest::new("opt", ["x"], 99)));
        assert_eq!(out, "opt: <  >\n");
    }

    #[test]
    fn selector_centered_in_thirty() {
        let t = plain_tui(centered(30));
        let out = render(|w| t.selector(w, &SelectorRequest::new("x", ["y"], 0)));
        let line = &lines(&out)[0];
        assert_eq!(char_count(line), 30);
        assert_eq!(line.trim(), "x: < y >");
        assert!(line.starts_with(' ') && line.ends_with(' '));
    }

    #[test]
    fn selector_label_yields_to_current() {
        let t = plain_tui(LayoutConfig::default());
        let req = SelectorRequest::new("theme", ["light"], 0).with_width(13);
        assert_eq!(render(|w| t.selector(w, &req)), "th: < light >\n");
    }

    #[test]
    fn selector_current_clipped_when_no_room() {
        let t = plain_tui(LayoutConfig::default());
        let req = SelectorRequest::new("label", ["abcdefgh"], 0).with_width(10);
        assert_eq!(render(|w| t.selector(w, &req)), ": < abcd >\n");
    }

    #[test]
    fn selector_colored_centering_uses_visible_width() {
        let t = tui(centered(30));
        let out = render(|w| t.selector(w, &SelectorRequest::new("x", ["y"], 0)));
        assert!(out.starts_with(&" ".repeat(11)));
        assert_eq!(char_count(&lines(&out)[0]), 30);
    }

    // ── Input ─────────────────────────────────────────────────────────────

    fn with_bar_cursor(layout: LayoutConfig) -> LayoutConfig {
        layout.with_input_cursor("|")
    }

    #[test]
    fn input_active_appends_cursor() {
        let t = tui(with_bar_cursor(LayoutConfig::default()));
        let out = render(|w| t.input(w, &InputRequest::new("name", "dan", true)));
        assert_eq!(lines(&out), vec!["name: dan|"]);
        assert_eq!(
            out,
            "\x1b[38;5;10mname\x1b[0m: \x1b[38;5;7mdan\x1b[0m\x1b[38;5;10m|\x1b[0m\n"
        );
    }

    #[test]
    fn input_inactive_omits_cursor() {
        let t = plain_tui(with_bar_cursor(LayoutConfig::default()));
        let out = render(|w| t.input(w, &InputRequest::new("name", "dan", false)));
        assert_eq!(out, "name: dan\n");
    }

    #[test]
    fn input_default_cursor() {
        let t = plain_tui(LayoutConfig::unset());
        let out = render(|w| t.input(w, &InputRequest::new("q", "", true)));
        assert_eq!(out, "q: _\n");
    }

    #[test]
    fn input_width_clips_value_only() {
        let t = plain_tui(with_bar_cursor(LayoutConfig::default()));
        let req = InputRequest::new("name", "daniel", true).with_width(9);
        assert_eq!(render(|w| t.input(w, &req)), "name: da|\n");
    }

    #[test]
    fn input_centered_in_thirty() {
        let t = plain_tui(with_bar_cursor(centered(30)));
        let out = render(|w| t.input(w, &InputRequest::new("name", "dan", true)));
        assert_eq!(out, format!("{}name: dan|{}\n", " ".repeat(10), " ".repeat(10)));
    }

    // ── Divider ───────────────────────────────────────────────────────────

    #[test]
    fn divider_uses_configured_width() {
        let t = tui(LayoutConfig::default().with_divider_width(40));
        let out = render(|w| t.divider(w, &DividerRequest::new()));
        assert_eq!(lines(&out), vec!["-".repeat(40)]);
        assert!(out.starts_with("\x1b[38;5;8m"));
    }

    #[test]
    fn divider_request_width_wins() {
        let t = plain_tui(LayoutConfig::default().with_divider_width(40).with_max_width(30));
        let out = render(|w| t.divider(w, &DividerRequest::new().with_width(20)));
        assert_eq!(out, format!("{}\n", "-".repeat(20)));
    }

    #[test]
    fn divider_max_width_beats_default() {
        let t = plain_tui(LayoutConfig::default().with_max_width(12));
        let out = render(|w| t.divider(w, &DividerRequest::new()));
        assert_eq!(out, format!("{}\n", "-".repeat(12)));
    }

    #[test]
    fn divider_custom_fill() {
        let t = plain_tui(LayoutConfig::default());
        let out = render(|w| t.divider(w, &DividerRequest::new().with_fill('=').with_width(10)));
        assert_eq!(out, "==========\n");
    }

    #[test]
    fn divider_multibyte_fill_counts_code_points() {
        let t = plain_tui(centered(8));
        let out = render(|w| t.divider(w, &DividerRequest::new().with_fill('═').with_width(4)));
        assert_eq!(out, "  ════  \n");
    }

    // ── Sink errors ───────────────────────────────────────────────────────

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_error_propagates() {
        let t = tui(LayoutConfig::default());
        let err = t.title(&mut Closed, &TitleRequest::new("x")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        let req = MenuRequest::new(vec![MenuEntry::new("a", false)]);
        assert!(t.menu(&mut Closed, &req).is_err());
    }

    // ── Screen ────────────────────────────────────────────────────────────

    #[test]
    fn refresh_clears_and_homes() {
        let t = tui(LayoutConfig::default());
        assert_eq!(render(|w| t.refresh(w)), "\x1b[2J\x1b[1;1H");
    }
}
