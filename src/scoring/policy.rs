//! Anchor values of the attainment scale
//!
//! The score line passes through two anchors: the minimum threshold maps to
//! `floor_score` and a resultado of 100% maps to `target_score`. The final
//! score is capped at `ceiling_score`.

use serde::{Deserialize, Serialize};

use crate::core::{EvaluationError, Result};

/// Resultado (x axis) at which the target anchor sits.
pub const TARGET_RESULT: f64 = 100.0;

/// Scale anchors for the attainment score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePolicy {
    /// Score awarded when resultado reaches exactly the minimum threshold
    #[serde(default = "default_floor_score")]
    pub floor_score: f64,

    /// Score awarded when resultado reaches 100%
    #[serde(default = "default_target_score")]
    pub target_score: f64,

    /// Upper bound of the final score
    #[serde(default = "default_ceiling_score")]
    pub ceiling_score: f64,
}

impl Default for ScalePolicy {
    fn default() -> Self {
        Self {
            floor_score: default_floor_score(),
            target_score: default_target_score(),
            ceiling_score: default_ceiling_score(),
        }
    }
}

impl ScalePolicy {
    // Pure function: Validate a single anchor is a usable number
    pub fn validate_anchor(value: f64, name: &str) -> std::result::Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{name} must be a finite, non-negative number"))
        }
    }

    // Pure function: Collect all validations so every problem is reported at once
    pub fn collect_validations(&self) -> Vec<std::result::Result<(), String>> {
        let mut checks = vec![
            Self::validate_anchor(self.floor_score, "floor_score"),
            Self::validate_anchor(self.target_score, "target_score"),
            Self::validate_anchor(self.ceiling_score, "ceiling_score"),
        ];

        if self.floor_score >= self.target_score {
            checks.push(Err(format!(
                "floor_score ({}) must be below target_score ({})",
                self.floor_score, self.target_score
            )));
        }
        if self.target_score > self.ceiling_score {
            checks.push(Err(format!(
                "target_score ({}) must not exceed ceiling_score ({})",
                self.target_score, self.ceiling_score
            )));
        }

        checks
    }

    /// Validate anchor ordering `0 <= floor < target <= ceiling`.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .collect_validations()
            .into_iter()
            .filter_map(|check| check.err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EvaluationError::InvalidPolicy(errors.join("; ")))
        }
    }

    /// Bound a score to `[0, ceiling_score]`.
    ///
    /// Values outside the range are clamped silently. Rewarding
    /// over-achievement stops at the ceiling; that is the scoring policy,
    /// not an error condition.
    pub fn clamp(&self, score: f64) -> f64 {
        score.clamp(0.0, self.ceiling_score)
    }
}

pub fn default_floor_score() -> f64 {
    45.0
}
pub fn default_target_score() -> f64 {
    100.0
}
pub fn default_ceiling_score() -> f64 {
    120.0
}
