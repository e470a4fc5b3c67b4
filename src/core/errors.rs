//! Error types for attainment evaluation

use thiserror::Error;

/// Why an input tuple cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// `meta == minimo`
    TargetEqualsThreshold,
    /// `meta == 0`, the raw result divides by the target
    ZeroTarget,
    /// `minimo >= 100`, the scoring line has no positive slope
    ThresholdAtOrAboveTarget,
    /// One of the inputs, or a value derived from them, is NaN or infinite
    NonFinite,
    /// `minimo` so close to 100 that curve samples collapse onto each other
    CurveTooNarrow,
}

impl DegenerateReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::TargetEqualsThreshold => "meta must differ from the minimum threshold",
            Self::ZeroTarget => "meta must not be zero",
            Self::ThresholdAtOrAboveTarget => "the minimum threshold must be below 100%",
            Self::NonFinite => "all inputs must be finite numbers",
            Self::CurveTooNarrow => "the minimum threshold is too close to 100% to draw the curve",
        }
    }
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Main error type for attainment evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The inputs describe a configuration the score is undefined for
    #[error("Degenerate configuration: {reason}")]
    DegenerateInput { reason: DegenerateReason },

    /// Scale anchors out of order or non-finite
    #[error("Invalid scoring policy: {0}")]
    InvalidPolicy(String),

    /// Curve needs at least both endpoints
    #[error("Invalid curve sample count {0}: at least 2 points are required")]
    InvalidSampleCount(usize),
}

impl EvaluationError {
    pub fn degenerate(reason: DegenerateReason) -> Self {
        Self::DegenerateInput { reason }
    }

    /// True for errors caused by the four evaluation inputs, as opposed to
    /// calculator configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EvaluationError>;
