//! # tint-theme — semantic color roles
//!
//! Maps what text *is* (a title, a prompt, an error) to how it looks (an SGR
//! style). Renderers never hardcode colors; they ask a [`Palette`] for a
//! [`Role`].
//!
//! ```text
//! Role ──► Palette::style ──► Style ──► tint_term::apply_style
//!             │
//!             └─ Role::Message unset? use the active Severity's style
//! ```

pub mod builtin;
pub mod palette;
pub mod role;

pub use builtin::{builtin_names, builtin_palette};
pub use palette::Palette;
pub use role::{Role, Severity};
