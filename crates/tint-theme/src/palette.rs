//! Color role palette — one style per semantic role.
//!
//! A `Palette` is plain data: every field is a [`Style`], and an empty style
//! means "no color". Lookups never fail. The only indirection is the message
//! role, which borrows the active severity's style when it is unset.

use tint_term::color;
use tint_term::Style;

use crate::role::{Role, Severity};

static NO_STYLE: Style = Style::NONE;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Styles for every role a renderer may ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    // ── Component roles ───────────────────────────────────────
    pub menu: Style,
    pub title: Style,
    pub prompt: Style,
    pub data: Style,
    pub divider: Style,

    // ── Message roles ─────────────────────────────────────────
    pub message: Style,
    pub timestamp: Style,
    pub field_name: Style,
    pub field_value: Style,

    // ── Severity roles ────────────────────────────────────────
    pub trace: Style,
    pub debug: Style,
    pub info: Style,
    pub warn: Style,
    pub error: Style,
    pub fatal: Style,
    pub panic: Style,
}

impl Palette {
    /// A palette with every role unset. Rendering with it emits no color.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Severity-colored console palette.
    ///
    /// Component roles stay unset; pair this with a preset from
    /// [`builtin`](crate::builtin) or set them individually.
    #[must_use]
    pub fn console() -> Self {
        Self {
            trace: Style::fg256(color::BRIGHT_BLACK),
            debug: Style::fg256(color::GREEN),
            info: Style::fg256(color::BLUE),
            warn: Style::fg256(color::YELLOW),
            error: Style::fg256(color::RED),
            fatal: Style::fg256(color::cube(5, 0, 0)),
            panic: Style::fg256(color::MAGENTA),
            timestamp: Style::fg256(color::BRIGHT_BLACK),
            field_name: Style::fg256(color::CYAN),
            field_value: Style::fg256(color::WHITE),
            ..Self::default()
        }
    }

    /// The style stored for `role`, empty when unset.
    ///
    /// `Role::Message` is returned as stored; use [`Palette::message`] for
    /// the severity fallback.
    #[must_use]
    pub const fn style(&self, role: Role) -> &Style {
        match role {
            Role::Menu => &self.menu,
            Role::Title => &self.title,
            Role::Prompt => &self.prompt,
            Role::Data => &self.data,
            Role::Divider => &self.divider,
            Role::Message => &self.message,
            Role::Timestamp => &self.timestamp,
            Role::FieldName => &self.field_name,
            Role::FieldValue => &self.field_value,
            Role::Level(s) => self.severity(s),
        }
    }

    /// The style for a severity.
    #[must_use]
    pub const fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Trace => &self.trace,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
            Severity::Panic => &self.panic,
        }
    }

    /// The message style, or the active severity's style when unset.
    #[must_use]
    pub fn message(&self, active: Severity) -> &Style {
        if self.message.is_empty() {
            self.severity(active)
        } else {
            &self.message
        }
    }

    /// Severity style by name (case-insensitive, `"warning"` accepted).
    /// Unknown names yield the empty style.
    #[must_use]
    pub fn level(&self, name: &str) -> &Style {
        Severity::from_name(name).map_or(&NO_STYLE, |s| self.severity(s))
    }

    /// Replace the style for one role.
    pub fn set(&mut self, role: Role, style: Style) {
        let slot = match role {
            Role::Menu => &mut self.menu,
            Role::Title => &mut self.title,
            Role::Prompt => &mut self.prompt,
            Role::Data => &mut self.data,
            Role::Divider => &mut self.divider,
            Role::Message => &mut self.message,
            Role::Timestamp => &mut self.timestamp,
            Role::FieldName => &mut self.field_name,
            Role::FieldValue => &mut self.field_value,
            Role::Level(Severity::Trace) => &mut self.trace,
            Role::Level(Severity::Debug) => &mut self.debug,
            Role::Level(Severity::Info) => &mut self.info,
            Role::Level(Severity::Warn) => &mut self.warn,
            Role::Level(Severity::Error) => &mut self.error,
            Role::Level(Severity::Fatal) => &mut self.fatal,
            Role::Level(Severity::Panic) => &mut self.panic,
        };
        *slot = style;
    }

    /// Builder form of [`Palette::set`].
    #[must_use]
    pub fn with(mut self, role: Role, style: Style) -> Self {
        self.set(role, style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_role_is_empty() {
        let p = Palette::none();
        assert!(p.style(Role::Menu).is_empty());
        assert!(p.style(Role::Level(Severity::Error)).is_empty());
    }

    #[test]
    fn console_colors_severities() {
        let p = Palette::console();
        assert_eq!(p.style(Role::Level(Severity::Info)), &Style::fg256(4));
        assert_eq!(p.fatal, Style::fg256(196));
        assert!(p.title.is_empty());
    }

    #[test]
    fn message_falls_back_to_severity() {
        let p = Palette::console();
        assert_eq!(p.message(Severity::Warn), &Style::fg256(3));
        assert_eq!(p.message(Severity::Error), &Style::fg256(1));
    }

    #[test]
    fn message_set_overrides_fallback() {
        let p = Palette::console().with(Role::Message, Style::fg256(15));
        assert_eq!(p.message(Severity::Warn), &Style::fg256(15));
    }

    #[test]
    fn message_fallback_on_empty_palette_is_empty() {
        assert!(Palette::none().message(Severity::Info).is_empty());
    }

    #[test]
    fn level_by_name() {
        let p = Palette::console();
        assert_eq!(p.level("WARNING"), &Style::fg256(3));
        assert_eq!(p.level("debug"), &Style::fg256(2));
        assert!(p.level("verbose").is_empty());
    }

    #[test]
    fn set_replaces_each_role() {
        let mut p = Palette::none();
        p.set(Role::Divider, Style::fg256(8));
        p.set(Role::Level(Severity::Panic), Style::fg256(5));
        assert_eq!(p.divider, Style::fg256(8));
        assert_eq!(p.style(Role::Level(Severity::Panic)), &Style::fg256(5));
    }
}
