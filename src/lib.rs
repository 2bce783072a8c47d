//! # Penkit
//!
//! A G-code post-processor for pen plotters. Penkit rewrites a plotter
//! program by inserting pen maintenance routines between drawn shapes
//! without touching the drawn geometry:
//!
//! - **Classic (Z-press)**: a mechanical pen-repress cycle, run once at the
//!   start and again whenever the cumulative drawn length crosses a
//!   configurable threshold
//! - **Cleaning pen**: a multi-tray cleaning cycle, run on a mark-count
//!   and/or cumulative-length cadence
//!
//! ## Architecture
//!
//! Penkit is organized as a workspace:
//!
//! 1. **penkit-core** - Shape segmentation, maintenance routine builders,
//!    stream rewriting, configuration
//! 2. **penkit** - Main binary that wires the core to a CLI front-end
//!
//! The root crate re-exports the core API and owns process-wide concerns
//! such as logging initialization.

pub use penkit_core::{
    extract_xy, process_file, segment_shapes, ClassicParams, CleaningParams, ParameterError,
    PenMode, PenToolConfig, PenToolError, PenToolResult, Shape, StreamRewriter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured console logging filtered by `RUST_LOG`, defaulting
/// to the INFO level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
