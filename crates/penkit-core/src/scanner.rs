//! Per-line coordinate extraction with carry-forward defaults.

use regex::Regex;
use std::sync::OnceLock;

fn axis_regexes() -> &'static (Regex, Regex) {
    static AXES: OnceLock<(Regex, Regex)> = OnceLock::new();
    AXES.get_or_init(|| {
        (
            Regex::new(r"X([-+]?[0-9]*\.?[0-9]+)").expect("invalid X axis regex"),
            Regex::new(r"Y([-+]?[0-9]*\.?[0-9]+)").expect("invalid Y axis regex"),
        )
    })
}

/// Extract the X/Y coordinates referenced by a single command line.
///
/// Each axis takes the first numeric token following its letter when
/// present, and falls back to the carried value otherwise. A line with no
/// axis words returns the fallbacks unchanged; this function never fails.
pub fn extract_xy(
    line: &str,
    last_x: Option<f64>,
    last_y: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    let (re_x, re_y) = axis_regexes();
    let x = re_x
        .captures(line)
        .and_then(|c| c[1].parse::<f64>().ok())
        .or(last_x);
    let y = re_y
        .captures(line)
        .and_then(|c| c[1].parse::<f64>().ok())
        .or(last_y);
    (x, y)
}
