//! File-level orchestration: read, transform, write.
//!
//! The whole transform is computed in memory before the output file is
//! created, so a failing run never leaves a partial output on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PenToolConfig;
use crate::error::PenToolResult;
use crate::rewriter::StreamRewriter;
use crate::segmenter;

/// Suffix replacing the input's final extension segment.
const OUTPUT_SUFFIX: &str = "_processed.gcode";

/// Derive the output path: the input path with its last extension segment
/// replaced by the fixed `_processed.gcode` suffix.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Transform a single G-code file, returning the path of the written
/// output.
pub fn process_file(input: &Path, config: &PenToolConfig) -> PenToolResult<PathBuf> {
    let text = fs::read_to_string(input)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %input.display(), lines = lines.len(), "read input program");

    let shapes = segmenter::segment_shapes(&lines);
    debug!(shapes = shapes.len(), "segmented input");

    let output = StreamRewriter::new(config).rewrite(&lines, &shapes)?;

    let output_path = derive_output_path(input);
    fs::write(&output_path, output.join("\n") + "\n")?;
    info!(
        path = %output_path.display(),
        mode = %config.mode,
        shapes = shapes.len(),
        "wrote processed program"
    );

    Ok(output_path)
}
