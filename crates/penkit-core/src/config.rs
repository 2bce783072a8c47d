//! Configuration for a single post-processing run.
//!
//! One record carries the parameters of both maintenance modes; fields
//! irrelevant to the active mode are simply ignored. Records can be built
//! programmatically or loaded from a JSON or TOML file, chosen by the file
//! extension.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ParameterError, ParameterResult, PenToolError, PenToolResult};

/// Pen maintenance mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenMode {
    /// Classic Z-press: mechanical repress cycles at a press station
    Classic,
    /// Cleaning pen: multi-tray dwell cycles
    Cleaning,
}

impl Default for PenMode {
    fn default() -> Self {
        Self::Classic
    }
}

impl std::fmt::Display for PenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Cleaning => write!(f, "cleaning"),
        }
    }
}

/// Parameters for the classic Z-press repress routine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassicParams {
    /// Z height that seats the pen in its holder (mm)
    pub pen_down_z: f64,
    /// Z height that releases the press (mm)
    pub pen_up_z: f64,
    /// Z height restored for drawing (mm)
    pub draw_height_z: f64,
    /// X coordinate of the press station
    pub press_x: f64,
    /// Y coordinate of the press station
    pub press_y: f64,
}

impl Default for ClassicParams {
    fn default() -> Self {
        Self {
            pen_down_z: 5.0,
            pen_up_z: 10.0,
            draw_height_z: 35.0,
            press_x: 5.0,
            press_y: 5.0,
        }
    }
}

/// Parameters for the cleaning-pen routine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningParams {
    /// Run a cleaning cycle before the first shape
    pub initial_clean: bool,
    /// Clean every N marks (0 = off)
    pub clean_every_marks: u32,
    /// Clean after cumulative drawn length (mm, 0 = off)
    pub clean_after_mm: f64,
    /// X coordinate shared by all cleaning trays
    pub tray_base_x: f64,
    /// Tray Y positions, visited in order
    pub tray_ys: Vec<f64>,
    /// Z height for travel between trays (mm)
    pub travel_z: f64,
    /// Dwell with the pen down (ms)
    pub down_dwell_ms: u64,
    /// Dwell with the pen up (ms)
    pub up_dwell_ms: u64,
    /// Down/up cycles per tray
    pub cycles_per_tray: u32,
}

impl Default for CleaningParams {
    fn default() -> Self {
        Self {
            initial_clean: false,
            clean_every_marks: 0,
            clean_after_mm: 0.0,
            tray_base_x: 5.0,
            tray_ys: vec![0.0, 25.0, 55.0, 65.0],
            travel_z: 25.0,
            down_dwell_ms: 1000,
            up_dwell_ms: 450,
            cycles_per_tray: 2,
        }
    }
}

/// Configuration record for one post-processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PenToolConfig {
    /// Active maintenance mode
    pub mode: PenMode,
    /// Between-shape up pause (ms)
    pub between_pause_ms: u64,
    /// Cumulative length threshold for classic repress (mm)
    pub length_threshold_mm: f64,
    /// Classic-mode parameters
    pub classic: ClassicParams,
    /// Cleaning-mode parameters
    pub cleaning: CleaningParams,
}

impl Default for PenToolConfig {
    fn default() -> Self {
        Self {
            mode: PenMode::default(),
            between_pause_ms: 450,
            length_threshold_mm: 200.0,
            classic: ClassicParams::default(),
            cleaning: CleaningParams::default(),
        }
    }
}

impl PenToolConfig {
    /// Load a configuration from a JSON or TOML file, chosen by extension.
    pub fn from_file(path: &Path) -> PenToolResult<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&text)?),
            Some("toml") => Ok(toml::from_str(&text)?),
            other => Err(PenToolError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Validate the common fields plus the fields of the active mode.
    pub fn validate(&self) -> ParameterResult<()> {
        require_finite("length_threshold_mm", self.length_threshold_mm)?;
        require_non_negative("length_threshold_mm", self.length_threshold_mm)?;

        match self.mode {
            PenMode::Classic => self.classic.validate(),
            PenMode::Cleaning => self.cleaning.validate(),
        }
    }
}

impl ClassicParams {
    fn validate(&self) -> ParameterResult<()> {
        require_finite("pen_down_z", self.pen_down_z)?;
        require_finite("pen_up_z", self.pen_up_z)?;
        require_finite("draw_height_z", self.draw_height_z)?;
        require_finite("press_x", self.press_x)?;
        require_finite("press_y", self.press_y)?;
        Ok(())
    }
}

impl CleaningParams {
    fn validate(&self) -> ParameterResult<()> {
        if self.tray_ys.is_empty() {
            return Err(ParameterError::Missing("tray_ys".to_string()));
        }
        for &y in &self.tray_ys {
            require_finite("tray_ys", y)?;
        }
        require_finite("tray_base_x", self.tray_base_x)?;
        require_finite("travel_z", self.travel_z)?;
        require_finite("clean_after_mm", self.clean_after_mm)?;
        require_non_negative("clean_after_mm", self.clean_after_mm)?;
        if self.cycles_per_tray == 0 {
            return Err(ParameterError::InvalidValue {
                name: "cycles_per_tray".to_string(),
                reason: "at least one cycle per tray is required".to_string(),
            });
        }
        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("{value} is not a finite number"),
        })
    }
}

fn require_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("{value} is negative"),
        })
    }
}
