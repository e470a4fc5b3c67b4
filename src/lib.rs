//! Goal attainment scoring for performance indicators.
//!
//! Given a target (Meta), a minimum threshold (Patamar Mínimo), an achieved
//! value (Realizado) and a direction (Sentido), the calculator derives the
//! achieved percentage of the target (Resultado) and a bounded attainment
//! score (Atingimento), plus the curve used to chart it.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod formatting;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    CurvePoint, DegenerateReason, Direction, EvaluationError, EvaluationInput, Marker, MarkerKind,
};

pub use crate::evaluation::{evaluate, Evaluation, Evaluator};

pub use crate::scoring::{
    attainment, raw_result, sample_curve, AttainmentLine, ScalePolicy, DEFAULT_SAMPLES,
};

pub use crate::config::{load_config, MetasimConfig};
