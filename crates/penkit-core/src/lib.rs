//! # Penkit Core
//!
//! This crate provides the processing core of Penkit: it rewrites a
//! pen-plotter G-code program by inserting maintenance routines between
//! drawn shapes, leaving the drawn geometry untouched.
//!
//! ## Processing Stages
//!
//! - **Scanner**: per-line X/Y coordinate extraction with carry-forward
//!   defaults
//! - **Segmenter**: partitions the program into an ordered list of shape
//!   records bounded by pen-up reposition blocks and empty travel commands
//! - **Routine Builders**: materialize the pen-repress, pen-cleaning, and
//!   between-shape lift command sequences
//! - **Stream Rewriter**: walks the shapes in order, applies the active
//!   mode's insertion policy, and reassembles the output program
//!
//! ## Supporting Infrastructure
//!
//! - **Config**: one configuration record per run, loadable from JSON or
//!   TOML files
//! - **Processor**: file-level orchestration (read, transform, write) with
//!   fail-fast semantics; no output file is created unless the whole
//!   transform succeeds

pub mod config;
pub mod error;
pub mod processor;
pub mod rewriter;
pub mod routines;
pub mod scanner;
pub mod segmenter;

// Re-export commonly used items
pub use config::{ClassicParams, CleaningParams, PenMode, PenToolConfig};
pub use error::{ParameterError, ParameterResult, PenToolError, PenToolResult};
pub use processor::{derive_output_path, process_file};
pub use rewriter::StreamRewriter;
pub use routines::{between_shape_lift, cleaning_cycle, pen_press};
pub use scanner::extract_xy;
pub use segmenter::{segment_shapes, Shape};
