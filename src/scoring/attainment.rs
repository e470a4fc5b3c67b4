//! Resultado and Atingimento computation
//!
//! Step 1 normalizes the achieved value against the target into a
//! percentage (`resultado`). Step 2 remaps that percentage onto the
//! attainment scale with a line through `(minimo, floor_score)` and
//! `(100, target_score)`, zeroing anything below the threshold and capping
//! at `ceiling_score`.

use serde::{Deserialize, Serialize};

use super::policy::{ScalePolicy, TARGET_RESULT};
use crate::core::{DegenerateReason, Direction, EvaluationError, EvaluationInput, Result};

/// Reject input tuples the score is undefined for.
///
/// Besides `meta == minimo` and `meta == 0`, a threshold of 100 or more is
/// rejected with [`DegenerateReason::ThresholdAtOrAboveTarget`]: the line
/// through `(minimo, floor)` and `(100, target)` would be vertical or fall,
/// and attainment would no longer grow with the result. Both directions
/// reject a zero `meta`.
pub fn validate_input(input: &EvaluationInput) -> Result<()> {
    let EvaluationInput {
        meta,
        minimo,
        realizado,
        ..
    } = *input;

    if !(meta.is_finite() && minimo.is_finite() && realizado.is_finite()) {
        return Err(EvaluationError::degenerate(DegenerateReason::NonFinite));
    }
    if meta == minimo {
        return Err(EvaluationError::degenerate(
            DegenerateReason::TargetEqualsThreshold,
        ));
    }
    if meta == 0.0 {
        return Err(EvaluationError::degenerate(DegenerateReason::ZeroTarget));
    }
    if minimo >= TARGET_RESULT {
        return Err(EvaluationError::degenerate(
            DegenerateReason::ThresholdAtOrAboveTarget,
        ));
    }
    Ok(())
}

/// Step 1: achieved value as a percentage of the target.
///
/// Hitting the target is always 100 regardless of direction. Beating the
/// target yields more than 100 in both directions. The caller must have
/// validated `meta != 0`.
pub fn raw_result(input: &EvaluationInput) -> f64 {
    let EvaluationInput {
        meta,
        realizado,
        sentido,
        ..
    } = *input;

    if realizado == meta {
        return 100.0;
    }

    match sentido {
        Direction::HigherIsBetter => realizado / meta * 100.0,
        Direction::LowerIsBetter => ((meta - realizado) / meta + 1.0) * 100.0,
    }
}

/// The linear part of the attainment map.
///
/// `score = intercept + slope * resultado`, with the slope fixed by the two
/// anchors of the [`ScalePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttainmentLine {
    pub threshold: f64,
    pub slope: f64,
    pub intercept: f64,
    pub policy: ScalePolicy,
}

impl AttainmentLine {
    pub fn new(minimo: f64, policy: ScalePolicy) -> Result<Self> {
        if !minimo.is_finite() {
            return Err(EvaluationError::degenerate(DegenerateReason::NonFinite));
        }
        if minimo >= TARGET_RESULT {
            return Err(EvaluationError::degenerate(
                DegenerateReason::ThresholdAtOrAboveTarget,
            ));
        }
        policy.validate()?;

        let slope = (policy.target_score - policy.floor_score) / (TARGET_RESULT - minimo);
        let intercept = policy.floor_score - slope * minimo;
        let line = Self {
            threshold: minimo,
            slope,
            intercept,
            policy,
        };

        // Extreme thresholds push the ceiling past f64::MAX
        if !(slope.is_finite() && intercept.is_finite() && line.ceiling_result().is_finite()) {
            return Err(EvaluationError::degenerate(DegenerateReason::NonFinite));
        }
        Ok(line)
    }

    /// Unclamped score on the line.
    ///
    /// Point-slope form keeps `score_at(threshold) == floor_score` exact.
    pub fn score_at(&self, resultado: f64) -> f64 {
        self.policy.floor_score + self.slope * (resultado - self.threshold)
    }

    /// Inverse of [`score_at`](Self::score_at).
    pub fn result_at(&self, score: f64) -> f64 {
        self.threshold + (score - self.policy.floor_score) / self.slope
    }

    /// Resultado at which the score reaches the ceiling.
    pub fn ceiling_result(&self) -> f64 {
        self.result_at(self.policy.ceiling_score)
    }

    /// Step 2: bounded attainment score for a resultado.
    pub fn attainment(&self, resultado: f64) -> f64 {
        if resultado < self.threshold {
            return 0.0;
        }
        self.policy.clamp(self.score_at(resultado))
    }
}

/// Step 2 as a free function with an explicit policy.
pub fn attainment(resultado: f64, minimo: f64, policy: ScalePolicy) -> Result<f64> {
    Ok(AttainmentLine::new(minimo, policy)?.attainment(resultado))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn higher(meta: f64, minimo: f64, realizado: f64) -> EvaluationInput {
        EvaluationInput::new(meta, minimo, realizado, Direction::HigherIsBetter)
    }

    fn lower(meta: f64, minimo: f64, realizado: f64) -> EvaluationInput {
        EvaluationInput::new(meta, minimo, realizado, Direction::LowerIsBetter)
    }

    #[test]
    fn test_raw_result_higher_is_better() {
        assert_eq!(raw_result(&higher(100.0, 45.0, 80.0)), 80.0);
        assert_eq!(raw_result(&higher(200.0, 45.0, 300.0)), 150.0);
    }

    #[test]
    fn test_raw_result_lower_is_better() {
        assert_eq!(raw_result(&lower(100.0, 45.0, 60.0)), 140.0);
        assert_eq!(raw_result(&lower(100.0, 45.0, 130.0)), 70.0);
    }

    #[test]
    fn test_raw_result_on_target_is_exactly_100() {
        assert_eq!(raw_result(&higher(37.3, 10.0, 37.3)), 100.0);
        assert_eq!(raw_result(&lower(37.3, 10.0, 37.3)), 100.0);
    }

    #[test]
    fn test_validate_input_degenerate_cases() {
        let cases = [
            (higher(50.0, 50.0, 10.0), DegenerateReason::TargetEqualsThreshold),
            (higher(0.0, 45.0, 10.0), DegenerateReason::ZeroTarget),
            (lower(0.0, 45.0, 10.0), DegenerateReason::ZeroTarget),
            (higher(150.0, 100.0, 10.0), DegenerateReason::ThresholdAtOrAboveTarget),
            (higher(f64::NAN, 45.0, 10.0), DegenerateReason::NonFinite),
            (lower(100.0, 45.0, f64::INFINITY), DegenerateReason::NonFinite),
        ];

        for (input, reason) in cases {
            assert_eq!(
                validate_input(&input),
                Err(EvaluationError::degenerate(reason)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_input_accepts_defaults() {
        assert!(validate_input(&EvaluationInput::default()).is_ok());
    }

    #[test]
    fn test_default_line_is_identity() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        assert_eq!(line.slope, 1.0);
        assert_eq!(line.intercept, 0.0);
        assert_eq!(line.ceiling_result(), 120.0);
    }

    #[test]
    fn test_line_passes_through_anchors() {
        let line = AttainmentLine::new(30.0, ScalePolicy::default()).unwrap();
        assert_eq!(line.score_at(30.0), 45.0);
        assert!((line.score_at(100.0) - 100.0).abs() < 1e-9);
        assert!((line.intercept + line.slope * 100.0 - 100.0).abs() < 1e-9);
        assert!((line.score_at(line.ceiling_result()) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_attainment_threshold_discontinuity() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        assert_eq!(line.attainment(44.999), 0.0);
        assert_eq!(line.attainment(45.0), 45.0);
    }

    #[test]
    fn test_attainment_is_capped() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        assert_eq!(line.attainment(140.0), 120.0);
        assert_eq!(attainment(1_000.0, 45.0, ScalePolicy::default()), Ok(120.0));
    }

    #[test]
    fn test_negative_threshold_keeps_floor() {
        // A threshold below zero still anchors the floor at the threshold
        let line = AttainmentLine::new(-20.0, ScalePolicy::default()).unwrap();
        assert_eq!(line.attainment(-20.0), 45.0);
        assert_eq!(line.attainment(-21.0), 0.0);
    }

    #[test]
    fn test_line_rejects_threshold_at_target() {
        assert_eq!(
            AttainmentLine::new(100.0, ScalePolicy::default()),
            Err(EvaluationError::degenerate(
                DegenerateReason::ThresholdAtOrAboveTarget
            ))
        );
    }

    #[test]
    fn test_line_rejects_overflowing_ceiling() {
        let err = AttainmentLine::new(-1.7e308, ScalePolicy::default()).unwrap_err();
        assert_eq!(err, EvaluationError::degenerate(DegenerateReason::NonFinite));
    }

    #[test]
    fn test_line_accepts_large_negative_threshold() {
        let line = AttainmentLine::new(-1e300, ScalePolicy::default()).unwrap();
        assert!(line.ceiling_result().is_finite());
        assert_eq!(line.attainment(-1e300), 45.0);
    }

    #[test]
    fn test_line_rejects_invalid_policy() {
        let policy = ScalePolicy {
            floor_score: 100.0,
            ..ScalePolicy::default()
        };
        assert!(matches!(
            AttainmentLine::new(45.0, policy),
            Err(EvaluationError::InvalidPolicy(_))
        ));
    }
}
