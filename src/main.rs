use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use desk_wm::drivers::OutputDriver;
use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::layout::{OriginMode, Point, Size};
use desk_wm::runner::{Shell, run};
use desk_wm::ui::CellMetrics;
use desk_wm::{AppDescriptor, Desktop, DesktopConfig, Result, SnapPolicy, constants, tracing_sub};

const KEY_HELP: &str = indoc! {"
    Keys:
      1-9     launch or focus an application
      Tab     raise the bottom-most window
      h / u   hide the focused window / unhide all
      f       toggle fullscreen
      w       close the focused window
      Esc     cancel the current drag
      q       quit

    Mouse:
      drag a title row to move (touch the left or right edge to snap),
      drag a border or corner to resize, click the launcher row to launch.
"};

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simulated desktop with cascading windows and snap assist",
    after_help = KEY_HELP
)]
struct Cli {
    /// Applications offered by the launcher, as `id` or `id:Title`.
    #[arg(long, value_delimiter = ',', default_value = "files,terminal,notes,browser")]
    apps: Vec<String>,

    /// Cascade offset between new windows, in pixels.
    #[arg(long, value_name = "PX", default_value_t = constants::CASCADE_STEP_PX)]
    step: f64,

    /// Cascade origin: `center`, `random` or a percent point `X,Y`.
    #[arg(long, value_name = "MODE", default_value = "center", value_parser = parse_origin)]
    origin: OriginMode,

    /// Seed for the random cascade origin.
    #[arg(long)]
    seed: Option<u64>,

    /// Distance from the left or right edge that triggers a snap, in pixels.
    #[arg(long, value_name = "PX", default_value_t = constants::SNAP_EDGE_THRESHOLD_PX)]
    snap_threshold: f64,

    /// Virtual pixel size of one terminal cell, as `WxH`.
    #[arg(long, value_name = "WxH", default_value = "8x16", value_parser = parse_cell_size)]
    cell_size: CellMetrics,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 16)]
    poll_ms: u64,
}

impl Cli {
    fn desktop_config(&self) -> DesktopConfig {
        DesktopConfig {
            cascade_step: self.step.max(0.0),
            origin: self.origin,
            snap: SnapPolicy {
                edge_threshold: self.snap_threshold.max(0.0),
                ..SnapPolicy::default()
            },
            seed: self.seed,
            ..DesktopConfig::default()
        }
    }

    fn app_descriptors(&self) -> Vec<AppDescriptor> {
        self.apps
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((id, title)) => AppDescriptor::new(id, title),
                None => AppDescriptor::new(entry, title_case(entry)),
            })
            .map(|app| app.with_default_size(Size::new(50.0, 60.0)))
            .collect()
    }
}

fn title_case(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_origin(value: &str) -> std::result::Result<OriginMode, String> {
    match value {
        "center" => Ok(OriginMode::Center),
        "random" => Ok(OriginMode::Random),
        _ => {
            let (x, y) = value
                .split_once(',')
                .ok_or_else(|| format!("expected `center`, `random` or `X,Y`, got `{value}`"))?;
            let x: f64 = x.trim().parse().map_err(|_| format!("invalid x `{x}`"))?;
            let y: f64 = y.trim().parse().map_err(|_| format!("invalid y `{y}`"))?;
            Ok(OriginMode::Custom(Point::new(x, y)))
        }
    }
}

fn parse_cell_size(value: &str) -> std::result::Result<CellMetrics, String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("expected `WxH`, got `{value}`"))?;
    let w: f64 = w.parse().map_err(|_| format!("invalid width `{w}`"))?;
    let h: f64 = h.parse().map_err(|_| format!("invalid height `{h}`"))?;
    if w <= 0.0 || h <= 0.0 {
        return Err("cell size must be positive".to_string());
    }
    Ok(CellMetrics::new(w, h))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let mut desktop = Desktop::new(cli.desktop_config());
    for app in cli.app_descriptors() {
        desktop.register_app(app)?;
    }

    let mut shell = Shell::new(desktop, cli.cell_size);
    let (columns, rows) = crossterm::terminal::size()?;
    shell.resize(columns, rows);

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let result = run(
        &mut shell,
        ConsoleInputDriver::new(),
        &mut output,
        Duration::from_millis(cli.poll_ms),
    );
    output.exit()?;
    result
}
