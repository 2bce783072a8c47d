//! Stream reassembly around inserted maintenance routines.
//!
//! The rewriter never touches a shape's body: it copies the original lines
//! range by range and only inserts routine lines at shape boundaries, so
//! the drawn geometry of the output is identical to the input.

use tracing::debug;

use crate::config::{PenMode, PenToolConfig};
use crate::error::{PenToolError, PenToolResult};
use crate::routines;
use crate::segmenter::Shape;

/// Rewrites a segmented G-code program according to the active mode's
/// insertion policy.
pub struct StreamRewriter<'a> {
    config: &'a PenToolConfig,
}

impl<'a> StreamRewriter<'a> {
    /// Create a rewriter for one configuration record.
    pub fn new(config: &'a PenToolConfig) -> Self {
        Self { config }
    }

    /// Produce the output program for `lines` segmented into `shapes`.
    ///
    /// Fails before producing any output when the shape list is empty or
    /// the active mode's parameters do not validate. Header lines (before
    /// the first reposition marker) and footer lines (after the last shape
    /// end) are reproduced verbatim.
    pub fn rewrite(&self, lines: &[String], shapes: &[Shape]) -> PenToolResult<Vec<String>> {
        let Some(first) = shapes.first() else {
            return Err(PenToolError::NoShapes);
        };
        self.config.validate()?;

        let mut output: Vec<String> = lines[..first.reposition_index].to_vec();

        match self.config.mode {
            PenMode::Classic => self.rewrite_classic(lines, shapes, &mut output),
            PenMode::Cleaning => self.rewrite_cleaning(lines, shapes, &mut output),
        }

        let last = &shapes[shapes.len() - 1];
        output.extend_from_slice(&lines[last.end_index + 1..]);

        Ok(output)
    }

    /// Copy one shape: the reposition block with its original M05 dropped,
    /// then the body from the M03 through the closing travel command.
    fn copy_shape(&self, lines: &[String], shape: &Shape, output: &mut Vec<String>) {
        output.extend_from_slice(&lines[shape.reposition_index + 1..shape.start_index]);
        output.extend_from_slice(&lines[shape.start_index..=shape.end_index]);
    }

    fn rewrite_classic(&self, lines: &[String], shapes: &[Shape], output: &mut Vec<String>) {
        let classic = &self.config.classic;
        let pause = self.config.between_pause_ms;
        let threshold = self.config.length_threshold_mm;

        // Unconditional initial press covers the first shape.
        output.extend(routines::pen_press(classic, pause, None));

        let mut cumulative = 0.0;
        for (idx, shape) in shapes.iter().enumerate() {
            if idx > 0 {
                output.extend(routines::between_shape_lift(pause));
                if cumulative > threshold {
                    debug!(
                        shape = idx,
                        cumulative_mm = cumulative,
                        "threshold crossed, inserting repress"
                    );
                    let note =
                        format!("Threshold reached: {cumulative:.2} mm > {threshold:.2} mm");
                    output.extend(routines::pen_press(classic, pause, Some(&note)));
                    cumulative = 0.0;
                }
            }
            self.copy_shape(lines, shape, output);
            cumulative += shape.length;
        }
    }

    fn rewrite_cleaning(&self, lines: &[String], shapes: &[Shape], output: &mut Vec<String>) {
        let cleaning = &self.config.cleaning;
        let pause = self.config.between_pause_ms;

        if cleaning.initial_clean {
            output.extend(routines::cleaning_cycle(cleaning));
        }

        let mut marks_since = 0u32;
        let mut length_since = 0.0f64;
        for (idx, shape) in shapes.iter().enumerate() {
            if idx > 0 {
                output.extend(routines::between_shape_lift(pause));

                // Either cadence rule can trigger a clean.
                let marks_due =
                    cleaning.clean_every_marks > 0 && marks_since >= cleaning.clean_every_marks;
                let length_due =
                    cleaning.clean_after_mm > 0.0 && length_since > cleaning.clean_after_mm;
                if marks_due || length_due {
                    debug!(
                        shape = idx,
                        marks_since,
                        length_since_mm = length_since,
                        "cadence hit, inserting cleaning routine"
                    );
                    output.extend(routines::cleaning_cycle(cleaning));
                    marks_since = 0;
                    length_since = 0.0;
                }
            }
            self.copy_shape(lines, shape, output);
            marks_since += 1;
            length_since += shape.length;
        }
    }
}
