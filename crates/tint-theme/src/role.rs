//! Semantic roles — what a piece of text *is*, not what color it has.
//!
//! Renderers ask the palette for a role; the palette answers with a style.
//! Severity roles double as the fallback for the message role.

use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Message severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Parse a severity name, case-insensitively. `"warning"` is accepted
    /// as an alias for `"warn"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
            .or_else(|| name.eq_ignore_ascii_case("warning").then_some(Self::Warn))
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A semantic category of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Unselected menu entries.
    Menu,
    /// Titles and selected menu entries.
    Title,
    /// Labels, prompts, and the input cursor.
    Prompt,
    /// Values: selector choices, input text, field values in rows.
    Data,
    /// Divider lines.
    Divider,
    /// Free-form messages. Falls back to the active severity when unset.
    Message,
    Timestamp,
    FieldName,
    FieldValue,
    /// A per-severity role.
    Level(Severity),
}
