//! Single-call evaluation of an indicator
//!
//! [`evaluate`] runs the three scoring steps for one input tuple and returns
//! everything a front end needs to display: both percentages, the sampled
//! curve and its markers.
//!
//! ```rust
//! use metasim::{evaluate, Direction, EvaluationInput};
//!
//! let input = EvaluationInput::new(100.0, 45.0, 80.0, Direction::HigherIsBetter);
//! let evaluation = evaluate(input).unwrap();
//! assert_eq!(evaluation.resultado, 80.0);
//! assert_eq!(evaluation.atingimento, 80.0);
//! assert_eq!(evaluation.curve.len(), 50);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::core::{CurvePoint, DegenerateReason, EvaluationError, EvaluationInput, Marker, Result};
use crate::scoring::{self, AttainmentLine, ScalePolicy, DEFAULT_SAMPLES};

/// Outcome of scoring one input tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub input: EvaluationInput,
    /// Achieved value as a percentage of the target, before any clamping.
    pub resultado: f64,
    /// Final score, always within `[0, ceiling_score]`.
    pub atingimento: f64,
    pub line: AttainmentLine,
    pub curve: Vec<CurvePoint>,
    pub markers: [Marker; 4],
}

impl Evaluation {
    /// Resultado where the score reaches its cap.
    pub fn ceiling_result(&self) -> f64 {
        self.line.ceiling_result()
    }

    pub fn below_threshold(&self) -> bool {
        self.resultado < self.input.minimo
    }

    /// True when the raw score was cut down to the ceiling.
    pub fn is_capped(&self) -> bool {
        !self.below_threshold() && self.line.score_at(self.resultado) > self.atingimento
    }

    pub fn current_marker(&self) -> Marker {
        self.markers[3]
    }
}

/// Calculator with an explicit scale policy and curve density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    policy: ScalePolicy,
    samples: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            policy: ScalePolicy::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Evaluator {
    pub fn new(policy: ScalePolicy, samples: usize) -> Result<Self> {
        policy.validate()?;
        if samples < 2 {
            return Err(EvaluationError::InvalidSampleCount(samples));
        }
        Ok(Self { policy, samples })
    }

    pub fn policy(&self) -> ScalePolicy {
        self.policy
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn evaluate(&self, input: EvaluationInput) -> Result<Evaluation> {
        let _span = debug_span!("evaluate", sentido = %input.sentido).entered();

        scoring::validate_input(&input)?;
        let line = AttainmentLine::new(input.minimo, self.policy)?;

        let resultado = scoring::raw_result(&input);
        if !resultado.is_finite() {
            // Overflow from extreme ratios, e.g. a tiny meta
            return Err(EvaluationError::degenerate(DegenerateReason::NonFinite));
        }
        let atingimento = line.attainment(resultado);
        let curve = scoring::sample_curve(&line, self.samples)?;
        let markers = scoring::markers(&line, resultado, atingimento);

        debug!(
            meta = input.meta,
            minimo = input.minimo,
            realizado = input.realizado,
            resultado,
            atingimento,
            slope = line.slope,
            intercept = line.intercept,
            "evaluated indicator"
        );

        Ok(Evaluation {
            input,
            resultado,
            atingimento,
            line,
            curve,
            markers,
        })
    }
}

/// Score one input tuple with the default policy and 50 curve samples.
pub fn evaluate(input: EvaluationInput) -> Result<Evaluation> {
    Evaluator::default().evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_evaluator_rejects_bad_configuration() {
        assert_eq!(
            Evaluator::new(ScalePolicy::default(), 0),
            Err(EvaluationError::InvalidSampleCount(0))
        );
        let policy = ScalePolicy {
            target_score: 130.0,
            ..ScalePolicy::default()
        };
        assert!(Evaluator::new(policy, 50).is_err());
    }

    #[test]
    fn test_custom_sample_count() {
        let evaluator = Evaluator::new(ScalePolicy::default(), 7).unwrap();
        let evaluation = evaluator.evaluate(EvaluationInput::default()).unwrap();
        assert_eq!(evaluation.curve.len(), 7);
    }

    #[test]
    fn test_capped_and_below_threshold_flags() {
        let over = evaluate(EvaluationInput::new(
            100.0,
            45.0,
            60.0,
            Direction::LowerIsBetter,
        ))
        .unwrap();
        assert!(over.is_capped());
        assert!(!over.below_threshold());

        let under = evaluate(EvaluationInput::default().with_realizado(10.0)).unwrap();
        assert!(under.below_threshold());
        assert!(!under.is_capped());
        assert_eq!(under.atingimento, 0.0);
    }

    #[test]
    fn test_degenerate_input_propagates() {
        let err = evaluate(EvaluationInput::new(
            50.0,
            50.0,
            50.0,
            Direction::HigherIsBetter,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            EvaluationError::degenerate(DegenerateReason::TargetEqualsThreshold)
        );
    }

    #[test]
    fn test_overflowing_resultado_is_rejected() {
        let err = evaluate(EvaluationInput::new(
            1e-300,
            45.0,
            1e300,
            Direction::HigherIsBetter,
        ))
        .unwrap_err();
        assert_eq!(err, EvaluationError::degenerate(DegenerateReason::NonFinite));
    }

    #[test]
    fn test_evaluation_serializes_with_line_parameters() {
        let evaluation = evaluate(EvaluationInput::default()).unwrap();
        let json = serde_json::to_value(&evaluation).unwrap();

        assert_eq!(json["resultado"], 80.0);
        assert_eq!(json["line"]["slope"], 1.0);
        assert_eq!(json["input"]["sentido"], "maior");
        assert_eq!(json["markers"][3]["kind"], "current");
        assert_eq!(json["curve"].as_array().unwrap().len(), 50);
    }
}
