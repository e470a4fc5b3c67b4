use serde::{Deserialize, Serialize};

use crate::core::{Direction, EvaluationInput};
use crate::evaluation::Evaluator;
use crate::io::output::OutputFormat;
use crate::scoring::{ScalePolicy, DEFAULT_SAMPLES};

/// Root configuration structure for metasim
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetasimConfig {
    /// Input values used when a flag is omitted
    #[serde(default)]
    pub defaults: Option<InputDefaults>,

    /// Anchors of the attainment scale
    #[serde(default)]
    pub scoring: Option<ScalePolicy>,

    /// Curve sampling configuration
    #[serde(default)]
    pub curve: Option<CurveConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Default evaluation inputs (dashboard form defaults)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InputDefaults {
    #[serde(default = "default_meta")]
    pub meta: f64,
    #[serde(default = "default_minimo")]
    pub minimo: f64,
    #[serde(default = "default_realizado")]
    pub realizado: f64,
    #[serde(default)]
    pub sentido: Direction,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            meta: default_meta(),
            minimo: default_minimo(),
            realizado: default_realizado(),
            sentido: Direction::default(),
        }
    }
}

impl From<InputDefaults> for EvaluationInput {
    fn from(defaults: InputDefaults) -> Self {
        EvaluationInput::new(
            defaults.meta,
            defaults.minimo,
            defaults.realizado,
            defaults.sentido,
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurveConfig {
    /// Number of samples along the curve (at least 2)
    #[serde(default = "default_points")]
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
        }
    }
}

impl CurveConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.points >= 2 {
            Ok(())
        } else {
            Err(format!("curve.points must be at least 2, got {}", self.points))
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl MetasimConfig {
    pub fn input_defaults(&self) -> EvaluationInput {
        self.defaults.unwrap_or_default().into()
    }

    pub fn scale_policy(&self) -> ScalePolicy {
        self.scoring.unwrap_or_default()
    }

    pub fn curve_points(&self) -> usize {
        self.curve.unwrap_or_default().points
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .and_then(|output| output.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.and_then(|output| output.use_color)
    }

    /// Calculator configured from this file, with an optional sample override.
    pub fn evaluator(&self, points: Option<usize>) -> crate::core::Result<Evaluator> {
        Evaluator::new(
            self.scale_policy(),
            points.unwrap_or_else(|| self.curve_points()),
        )
    }
}

pub fn default_meta() -> f64 {
    100.0
}
pub fn default_minimo() -> f64 {
    45.0
}
pub fn default_realizado() -> f64 {
    80.0
}
pub fn default_points() -> usize {
    DEFAULT_SAMPLES
}
