// SPDX-License-Identifier: MIT
//
// tint — showcase for the styling and layout engine.
//
// Renders one demo scene to stdout and exits:
//
//   ----------------------------------------
//                  Main Menu
//   ----------------------------------------
//             >  1) Status
//                2) Settings
//                3) Logs
//                4) Quit
//   ----------------------------------------
//              mode: < verbose >
//              filter: error_
//              output: stdout
//
// The whole scene is collected in an OutputBuffer and flushed in one write.
//
// Usage:  tint [--no-color] [--left] [--width N] [--theme NAME]
//
// Logging goes to stderr, filtered by TINT_LOG (default "warn").

use std::env;
use std::io::{self, Write};
use std::process;

use tint_term::{terminal, OutputBuffer};
use tint_theme::{builtin_names, builtin_palette, Palette};
use tint_ui::{
    DividerRequest, InputRequest, LayoutConfig, MenuEntry, MenuRequest, RenderConfig,
    SelectorRequest, TitleRequest, Tui,
};
use tracing_subscriber::EnvFilter;

/// Width used when the terminal is wider or can't be measured.
const SCENE_WIDTH: usize = 48;

const LOG_ENV: &str = "TINT_LOG";

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    no_color: bool,
    left: bool,
    width: Option<usize>,
    theme: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            no_color: false,
            left: false,
            width: None,
            theme: "default".to_owned(),
        }
    }
}

fn parse_args<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-color" => opts.no_color = true,
            "--left" => opts.left = true,
            "--width" => {
                let value = args.next().ok_or("--width needs a value")?;
                let width = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid width: {value}"))?;
                opts.width = Some(width);
            }
            "--theme" => {
                opts.theme = args.next().ok_or("--theme needs a name")?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

// ─── Scene ──────────────────────────────────────────────────────────────────

fn render_config(opts: &Options, palette: Palette, cols: Option<usize>, tty: bool) -> RenderConfig {
    let width = opts
        .width
        .unwrap_or_else(|| cols.map_or(SCENE_WIDTH, |c| c.min(SCENE_WIDTH)));
    let layout = LayoutConfig::default()
        .with_max_width(width)
        .with_centered(!opts.left);
    RenderConfig::new(palette, layout).with_color_disabled(opts.no_color || !tty)
}

fn render_scene(tui: &Tui, w: &mut impl Write) -> io::Result<()> {
    let rule = DividerRequest::new();

    tui.divider(w, &rule)?;
    tui.title(w, &TitleRequest::new("Main Menu"))?;
    tui.divider(w, &rule)?;

    let items = ["Status", "Settings", "Logs", "Quit"]
        .iter()
        .enumerate()
        .map(|(i, label)| MenuEntry::new(*label, i == 0))
        .collect();
    tui.menu(w, &MenuRequest::new(items))?;

    tui.divider(w, &rule)?;
    tui.selector(w, &SelectorRequest::new("mode", ["debug", "verbose", "silent"], 1))?;
    tui.input(w, &InputRequest::new("filter", "error", true))?;
    tui.input(w, &InputRequest::new("output", "stdout", false))
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let opts = parse_args(env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("tint: {e}");
        eprintln!("usage: tint [--no-color] [--left] [--width N] [--theme NAME]");
        process::exit(1);
    });

    let palette = builtin_palette(&opts.theme).unwrap_or_else(|| {
        eprintln!("tint: unknown theme {:?} (available: {})", opts.theme, builtin_names().join(", "));
        process::exit(1);
    });

    let cols = terminal::get_size().map(|s| usize::from(s.cols));
    let tui = Tui::new(render_config(&opts, palette, cols, terminal::stdout_is_tty()));
    tracing::debug!(?opts, ?cols, "rendering scene");

    let mut out = OutputBuffer::new();
    if let Err(e) = render_scene(&tui, &mut out).and_then(|()| out.flush_stdout()) {
        eprintln!("tint: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
