//! TOML configuration.
//!
//! Every field is optional; missing ones fall back to the classroom example
//! (20 m/s at 45 degrees, g = 9.81, h = 0.1 s, 3 s cap).
//!
//! ```toml
//! [simulation]
//! speed_mps = 20.0
//! angle_deg = 45.0
//! gravity_mps2 = 9.81
//! step_s = 0.01
//! max_time_s = 3.0
//! threshold_pct = 1.0
//!
//! [plot]
//! width = 1000
//! height = 600
//! output = "trajectory.svg"
//! ```

use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::RELATIVE_ERROR_THRESHOLD_PCT;
use crate::core::ballistics::{
    DEFAULT_MAX_TIME_S, DEFAULT_SPEED_MPS, DEFAULT_STEP_S, STANDARD_GRAVITY_MPS2,
    SimulationParameters,
};
use crate::error::{ConfigError, SimulationError};
use crate::plot::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub speed_mps: f64,
    /// Degrees here; converted to radians on validation.
    pub angle_deg: f64,
    pub gravity_mps2: f64,
    pub step_s: f64,
    pub max_time_s: f64,
    pub threshold_pct: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: 45.0,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            step_s: DEFAULT_STEP_S,
            max_time_s: DEFAULT_MAX_TIME_S,
            threshold_pct: RELATIVE_ERROR_THRESHOLD_PCT,
        }
    }
}

impl SimulationConfig {
    pub fn to_parameters(&self) -> Result<SimulationParameters, SimulationError> {
        // 90 degrees must not round past pi/2 and fail validation.
        let angle_rad = if (0.0..=90.0).contains(&self.angle_deg) {
            self.angle_deg.to_radians().min(FRAC_PI_2)
        } else {
            self.angle_deg.to_radians()
        };
        SimulationParameters::new(
            self.speed_mps,
            angle_rad,
            self.gravity_mps2,
            self.step_s,
            self.max_time_s,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// `None` means a timestamped file in the working directory.
    pub output: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            output: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses and validates in one go, so a bad file fails before any run.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.simulation.to_parameters()?;
        Ok(config)
    }
}
