//! Plain data types shared by the calculator and its front ends.

pub mod errors;
pub mod types;

pub use errors::{DegenerateReason, EvaluationError, Result};
pub use types::{CurvePoint, Direction, EvaluationInput, Marker, MarkerKind};
