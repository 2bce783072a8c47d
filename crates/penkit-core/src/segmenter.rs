//! Shape segmentation over an immutable line sequence.
//!
//! A shape is one contiguous drawn path: a pen-up reposition block (`M05`
//! followed by a travel move), a pen-down start (`M03`), the drawing body,
//! and a closing empty travel command (`G0` with neither X nor Y), with an
//! immediately following `G4` pause absorbed into the end boundary.
//!
//! Candidates that cannot be resolved into a valid shape (no preceding
//! `M05`, or no usable seed coordinate after it) are silently dropped; this
//! permissive policy mirrors the rest of the parser and is not an error.

use crate::scanner::extract_xy;

/// One contiguous drawn path located inside the input program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Index of the `M05` line opening the reposition block before the shape.
    pub reposition_index: usize,
    /// Index of the `M03` line that begins pen-down drawing.
    pub start_index: usize,
    /// Index of the line closing the shape: the empty `G0`, extended by one
    /// line when a `G4` pause immediately follows it.
    pub end_index: usize,
    /// Total Euclidean `G1` path length inside the body (mm).
    pub length: f64,
}

/// Partition a program into its ordered list of shapes.
///
/// Records are produced in strictly increasing index order. Lines before
/// the first shape's reposition marker and after the last shape's end are
/// the header and footer regions and stay untouched.
pub fn segment_shapes(lines: &[String]) -> Vec<Shape> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim().starts_with("M03"))
        .filter_map(|(start, _)| resolve_shape(lines, start))
        .collect()
}

/// Resolve one pen-down candidate into a shape, or drop it.
fn resolve_shape(lines: &[String], start: usize) -> Option<Shape> {
    // Nearest preceding M05 opens the reposition block.
    let reposition = (0..start)
        .rev()
        .find(|&j| lines[j].trim().starts_with("M05"))?;

    let end = find_shape_end(lines, start);

    // Seed carried coordinates from the travel move after the M05. A shape
    // whose seed cannot be resolved on both axes is dropped.
    let (seed_x, seed_y) = extract_xy(lines.get(reposition + 1)?, None, None);
    let (mut last_x, mut last_y) = (seed_x?, seed_y?);

    let mut length = 0.0;
    for line in &lines[start + 1..=end] {
        if line.trim().starts_with("G1") {
            let (x, y) = extract_xy(line, Some(last_x), Some(last_y));
            let (x, y) = (x.unwrap_or(last_x), y.unwrap_or(last_y));
            length += (x - last_x).hypot(y - last_y);
            last_x = x;
            last_y = y;
        }
    }

    Some(Shape {
        reposition_index: reposition,
        start_index: start,
        end_index: end,
        length,
    })
}

/// Find the line index that closes the shape starting at `start`.
///
/// The close is the first `G0` carrying neither X nor Y, extended by one
/// line if a `G4` pause immediately follows. A shape with no such travel
/// command before end-of-file ends implicitly at the last line.
fn find_shape_end(lines: &[String], start: usize) -> usize {
    let mut k = start + 1;
    while k < lines.len() {
        let line = lines[k].trim();
        if line.starts_with("G0") && !line.contains('X') && !line.contains('Y') {
            if lines
                .get(k + 1)
                .is_some_and(|next| next.trim().starts_with("G4"))
            {
                return k + 1;
            }
            return k;
        }
        k += 1;
    }
    lines.len() - 1
}
