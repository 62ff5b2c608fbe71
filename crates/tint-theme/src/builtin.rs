//! Named preset palettes — ready-to-use role assignments.

use tint_term::color;
use tint_term::Style;

use crate::palette::Palette;

/// Look up a builtin palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_palette(name: &str) -> Option<Palette> {
    Some(match name {
        "none" => Palette::none(),
        "console" => Palette::console(),
        "default" | "slate" => slate(),
        "sunset" => sunset(),
        _ => return None,
    })
}

/// List all available builtin palette names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["none", "console", "default", "slate", "sunset"]
}

/// Bright white titles, cyan menus, green prompts on the console severities.
fn slate() -> Palette {
    Palette {
        title: Style::fg256(color::BRIGHT_WHITE),
        menu: Style::fg256(color::BRIGHT_CYAN),
        prompt: Style::fg256(color::BRIGHT_GREEN),
        data: Style::fg256(color::WHITE),
        divider: Style::fg256(color::BRIGHT_BLACK),
        ..Palette::console()
    }
}

/// Yellow titles, blue menus, magenta prompts, cyan dividers.
fn sunset() -> Palette {
    Palette {
        title: Style::fg256(color::BRIGHT_YELLOW),
        menu: Style::fg256(color::BRIGHT_BLUE),
        prompt: Style::fg256(color::BRIGHT_MAGENTA),
        data: Style::fg256(color::WHITE),
        divider: Style::fg256(color::CYAN),
        ..Palette::console()
    }
}
