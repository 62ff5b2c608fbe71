//! # tint-ui — component renderers for tint
//!
//! Turns small structured requests into styled, width-correct terminal
//! lines:
//!
//! - **[`config`]** — `LayoutConfig` and `RenderConfig`, the read-only snapshot
//! - **[`compose`]** — the line compositor: clipping, centering, one write per line
//! - **[`components`]** — `Tui` and its menu, title, selector, input, divider renderers
//! - **[`widgets`]** — inline fragments (key hints, fields, status text)
//! - **[`frame`]** — alternate-screen bracketing and refresh
//!
//! ```text
//! Request ──► Tui ──► Palette role ──► apply_style ──► compose ──► impl Write
//! ```

pub mod components;
pub mod compose;
pub mod config;
pub mod frame;
pub mod widgets;

pub use components::{
    DividerRequest, InputRequest, MenuEntry, MenuRequest, SelectorRequest, TitleRequest, Tui,
};
pub use config::{LayoutConfig, RenderConfig};
pub use frame::{begin_frame, end_frame};
