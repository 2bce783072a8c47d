//! Builders for the literal maintenance command sequences.
//!
//! All builders are pure: they take a parameter record and return the
//! routine as a list of output lines, with no dependency on parser state.

use crate::config::{ClassicParams, CleaningParams};

/// Press cycles in one repress routine. Policy constant, not configurable.
const PRESS_CYCLES: usize = 3;

/// Feed rate for maintenance repositioning moves (mm/min).
const REPOSITION_FEED: f64 = 3000.0;

/// The two-line lift always emitted between consecutive shapes.
pub fn between_shape_lift(pause_ms: u64) -> Vec<String> {
    vec![
        "M05 ; pen up".to_string(),
        format!("G4 P{pause_ms} ; pause"),
    ]
}

/// The classic Z-press routine: park at the press station and re-seat the
/// pen with a fixed number of press cycles.
///
/// `annotation` carries the human-readable reason when the press was
/// triggered by a threshold crossing; the unconditional initial press has
/// none.
pub fn pen_press(params: &ClassicParams, pause_ms: u64, annotation: Option<&str>) -> Vec<String> {
    let mut out = vec![
        "G90".to_string(),
        "M05 ; pen up".to_string(),
        format!("G0 X{:.3} Y{:.3}", params.press_x, params.press_y),
        format!("G4 P{pause_ms} ; pause"),
    ];
    if let Some(note) = annotation {
        out.push(format!("; {note}"));
    }
    for _ in 0..PRESS_CYCLES {
        out.push(format!("G0 Z{:.3} F{REPOSITION_FEED:.0}", params.pen_up_z));
        out.push(format!("G0 Z{:.3} F{REPOSITION_FEED:.0}", params.pen_down_z));
    }
    out.push(format!(
        "G0 Z{:.3} F{REPOSITION_FEED:.0}",
        params.draw_height_z
    ));
    out.push("M05 ; pen up".to_string());
    out.push(format!("G4 P{pause_ms} ; pause"));
    out
}

/// The cleaning routine: visit each tray Y in configured order and toggle
/// the pen with dwells, bracketing every tray with M400 motion waits.
pub fn cleaning_cycle(params: &CleaningParams) -> Vec<String> {
    let mut out = vec![
        "G90".to_string(),
        "M05 ; pen up".to_string(),
        format!("G4 P{} ; pause", params.up_dwell_ms),
    ];
    for &tray_y in &params.tray_ys {
        out.push(format!(
            "G0 X{:.3} Y{:.3} Z{:.3} F{REPOSITION_FEED:.0}",
            params.tray_base_x, tray_y, params.travel_z
        ));
        out.push("M400".to_string());
        for _ in 0..params.cycles_per_tray {
            out.push("M03 ; pen down".to_string());
            out.push(format!("G4 P{} ; pause", params.down_dwell_ms));
            out.push("M05 ; pen up".to_string());
            out.push(format!("G4 P{} ; pause", params.up_dwell_ms));
        }
        out.push("M400".to_string());
    }
    out
}
