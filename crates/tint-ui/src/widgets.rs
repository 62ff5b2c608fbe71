//! Inline widgets — styled fragments for composing custom lines.
//!
//! Unlike the component renderers these return strings (or write without a
//! line terminator) and never center. They are building blocks: a status
//! bar, a key legend, a prompt drawn at a fixed screen position.

use std::fmt;
use std::io::{self, Write};

use tint_term::{ansi, apply_style, Style};
use tint_theme::{Role, Severity};

use crate::components::Tui;

impl Tui {
    /// One menu row without padding or newline: `"{prefix} {index}) {label}"`.
    #[must_use]
    pub fn menu_item(&self, index: usize, label: &str, selected: bool) -> String {
        let plain = self.menu_plain(index, label, selected);
        self.paint(self.menu_style(selected), &plain)
    }

    /// `"[{key}] {desc}"` with the key in the prompt role.
    #[must_use]
    pub fn key_hint(&self, key: &str, desc: &str) -> String {
        format!(
            "[{}] {}",
            self.paint(self.role(Role::Prompt), key),
            self.paint(self.role(Role::Data), desc)
        )
    }

    /// `"{label}: {value}"` in prompt and data roles.
    #[must_use]
    pub fn field(&self, label: &str, value: &str) -> String {
        format!(
            "{}: {}",
            self.paint(self.role(Role::Prompt), label),
            self.paint(self.role(Role::Data), value)
        )
    }

    /// `msg` in the style of `severity`.
    #[must_use]
    pub fn status(&self, severity: Severity, msg: &str) -> String {
        self.paint(self.role(Role::Level(severity)), msg)
    }

    #[must_use]
    pub fn status_info(&self, msg: &str) -> String {
        self.status(Severity::Info, msg)
    }

    #[must_use]
    pub fn status_warn(&self, msg: &str) -> String {
        self.status(Severity::Warn, msg)
    }

    #[must_use]
    pub fn status_error(&self, msg: &str) -> String {
        self.status(Severity::Error, msg)
    }

    /// `"{prefix}{value}"`, plus the configured cursor when active.
    #[must_use]
    pub fn input_line(&self, prefix: &str, value: &str, active: bool) -> String {
        let prompt = self.role(Role::Prompt);
        let mut out = self.paint(prompt, prefix);
        out.push_str(&self.paint(self.role(Role::Data), value));
        if active {
            out.push_str(&self.paint(prompt, &self.config().layout.input_cursor));
        }
        out
    }

    /// Format `args`, style the result, and write it with no newline.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn colorf(&self, w: &mut impl Write, style: &Style, args: fmt::Arguments<'_>) -> io::Result<()> {
        let text = args.to_string();
        w.write_all(apply_style(style, &text, self.config().color_disabled).as_bytes())
    }

    /// Move the cursor to `(row, col)` and write `text` in `style`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn write_at(
        &self,
        w: &mut impl Write,
        row: i32,
        col: i32,
        style: &Style,
        text: &str,
    ) -> io::Result<()> {
        ansi::move_to(w, row, col)?;
        w.write_all(apply_style(style, text, self.config().color_disabled).as_bytes())
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        apply_style(style, text, self.config().color_disabled).into_owned()
    }
}
