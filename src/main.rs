use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use penkit::init_logging;
use penkit_core::{ClassicParams, CleaningParams, PenMode, PenToolConfig};

#[derive(Parser)]
#[command(
    name = "penkit",
    about = "Insert pen maintenance routines into a pen-plotter G-code program",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
struct Cli {
    /// Input G-code file (.gc, .gcode, .nc, .txt)
    input: PathBuf,

    /// Load the full configuration from a JSON or TOML file instead of flags
    #[arg(long, conflicts_with = "mode")]
    config: Option<PathBuf>,

    /// Pen maintenance mode
    #[arg(long, value_enum, default_value_t = ModeArg::Classic)]
    mode: ModeArg,

    /// Between-shape up pause (ms)
    #[arg(long, default_value_t = 450)]
    between_pause: u64,

    /// Cumulative length threshold for classic repress (mm)
    #[arg(long, default_value_t = 200.0)]
    threshold: f64,

    /// Pen down Z (mm)
    #[arg(long, default_value_t = 5.0)]
    pen_down_z: f64,

    /// Pen up Z (mm)
    #[arg(long, default_value_t = 10.0)]
    pen_up_z: f64,

    /// Drawing height Z (mm)
    #[arg(long, default_value_t = 35.0)]
    draw_height_z: f64,

    /// Pen-press X
    #[arg(long, default_value_t = 5.0)]
    press_x: f64,

    /// Pen-press Y
    #[arg(long, default_value_t = 5.0)]
    press_y: f64,

    /// Run a cleaning cycle before the first shape
    #[arg(long)]
    initial_clean: bool,

    /// Clean every N marks (0 = off)
    #[arg(long, default_value_t = 0)]
    clean_every_marks: u32,

    /// Clean after cumulative length (mm, 0 = off)
    #[arg(long, default_value_t = 0.0)]
    clean_after: f64,

    /// Cleaning tray base X
    #[arg(long, default_value_t = 5.0)]
    tray_x: f64,

    /// Cleaning tray Y positions
    #[arg(long, value_delimiter = ',', default_value = "0,25,55,65")]
    tray_ys: Vec<f64>,

    /// Cleaning travel Z (mm)
    #[arg(long, default_value_t = 25.0)]
    travel_z: f64,

    /// Cleaning down dwell (ms)
    #[arg(long, default_value_t = 1000)]
    down_dwell: u64,

    /// Cleaning up dwell (ms)
    #[arg(long, default_value_t = 450)]
    up_dwell: u64,

    /// Down/up cycles per cleaning tray
    #[arg(long, default_value_t = 2)]
    cycles_per_tray: u32,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    /// Classic Z-press pen maintenance
    Classic,
    /// Multi-tray cleaning-pen maintenance
    Cleaning,
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Cleaning => write!(f, "cleaning"),
        }
    }
}

impl From<ModeArg> for PenMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => PenMode::Classic,
            ModeArg::Cleaning => PenMode::Cleaning,
        }
    }
}

impl Cli {
    fn to_config(&self) -> PenToolConfig {
        PenToolConfig {
            mode: self.mode.into(),
            between_pause_ms: self.between_pause,
            length_threshold_mm: self.threshold,
            classic: ClassicParams {
                pen_down_z: self.pen_down_z,
                pen_up_z: self.pen_up_z,
                draw_height_z: self.draw_height_z,
                press_x: self.press_x,
                press_y: self.press_y,
            },
            cleaning: CleaningParams {
                initial_clean: self.initial_clean,
                clean_every_marks: self.clean_every_marks,
                clean_after_mm: self.clean_after,
                tray_base_x: self.tray_x,
                tray_ys: self.tray_ys.clone(),
                travel_z: self.travel_z,
                down_dwell_ms: self.down_dwell,
                up_dwell_ms: self.up_dwell,
                cycles_per_tray: self.cycles_per_tray,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PenToolConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => cli.to_config(),
    };

    let output = penkit_core::process_file(&cli.input, &config)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    println!("Processed file saved to: {}", output.display());

    Ok(())
}
