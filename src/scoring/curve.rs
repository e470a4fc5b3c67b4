//! Curve sampling for charts
//!
//! The curve traces the attainment line from the minimum threshold up to the
//! resultado where the score hits its ceiling. Samples go through
//! [`AttainmentLine::attainment`], the same map used for scoring, so the
//! current marker always sits on the rendered line.

use super::attainment::AttainmentLine;
use super::policy::TARGET_RESULT;
use crate::core::{CurvePoint, DegenerateReason, EvaluationError, Marker, MarkerKind, Result};

/// Reference sampling density.
pub const DEFAULT_SAMPLES: usize = 50;

/// `samples` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample the attainment curve over `[threshold, ceiling_result]`.
///
/// Fails with [`DegenerateReason::CurveTooNarrow`] when the domain is too
/// small for `samples` distinct x values, which happens for thresholds a
/// few ulps below 100.
pub fn sample_curve(line: &AttainmentLine, samples: usize) -> Result<Vec<CurvePoint>> {
    if samples < 2 {
        return Err(EvaluationError::InvalidSampleCount(samples));
    }

    let xs = linspace(line.threshold, line.ceiling_result(), samples);
    if !xs.windows(2).all(|w| w[0] < w[1]) {
        return Err(EvaluationError::degenerate(DegenerateReason::CurveTooNarrow));
    }

    Ok(xs
        .into_iter()
        .map(|x| CurvePoint::new(x, line.attainment(x)))
        .collect())
}

/// Horizontal position of the current-value marker.
///
/// Results past the ceiling are drawn at the end of the curve, where their
/// capped score lies.
pub fn marker_position(resultado: f64, ceiling_result: f64) -> f64 {
    resultado.min(ceiling_result)
}

/// Threshold, target, ceiling and current markers, in drawing order.
pub fn markers(line: &AttainmentLine, resultado: f64, atingimento: f64) -> [Marker; 4] {
    let ceiling_result = line.ceiling_result();
    let policy = line.policy;

    [
        Marker {
            kind: MarkerKind::Threshold,
            x: line.threshold,
            y: policy.floor_score,
        },
        Marker {
            kind: MarkerKind::Target,
            x: TARGET_RESULT,
            y: policy.target_score,
        },
        Marker {
            kind: MarkerKind::Ceiling,
            x: ceiling_result,
            y: policy.ceiling_score,
        },
        Marker {
            kind: MarkerKind::Current,
            x: marker_position(resultado, ceiling_result),
            y: atingimento,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScalePolicy;

    #[test]
    fn test_linspace_includes_both_ends() {
        let values = linspace(45.0, 120.0, 4);
        assert_eq!(values, vec![45.0, 70.0, 95.0, 120.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_default_curve_shape() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        let curve = sample_curve(&line, DEFAULT_SAMPLES).unwrap();

        assert_eq!(curve.len(), 50);
        assert_eq!(curve[0], CurvePoint::new(45.0, 45.0));
        assert_eq!(curve[49], CurvePoint::new(120.0, 120.0));
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x && w[0].y <= w[1].y));
    }

    #[test]
    fn test_curve_end_is_capped_even_with_rounding() {
        let line = AttainmentLine::new(30.0, ScalePolicy::default()).unwrap();
        let curve = sample_curve(&line, 17).unwrap();
        let last = curve.last().unwrap();

        assert_eq!(last.x, line.ceiling_result());
        assert!(last.y <= 120.0);
        assert!((last.y - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_count_below_two_rejected() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        assert_eq!(
            sample_curve(&line, 1),
            Err(EvaluationError::InvalidSampleCount(1))
        );
    }

    #[test]
    fn test_curve_rejects_collapsed_domain() {
        let line = AttainmentLine::new(100.0 - 1e-13, ScalePolicy::default()).unwrap();
        assert_eq!(
            sample_curve(&line, DEFAULT_SAMPLES),
            Err(EvaluationError::degenerate(DegenerateReason::CurveTooNarrow))
        );
    }

    #[test]
    fn test_curve_near_target_threshold_still_samples() {
        let line = AttainmentLine::new(99.999, ScalePolicy::default()).unwrap();
        let curve = sample_curve(&line, DEFAULT_SAMPLES).unwrap();
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_marker_position_clamps() {
        assert_eq!(marker_position(140.0, 120.0), 120.0);
        assert_eq!(marker_position(80.0, 120.0), 80.0);
        assert_eq!(marker_position(-15.0, 120.0), -15.0);
    }

    #[test]
    fn test_markers_in_drawing_order() {
        let line = AttainmentLine::new(45.0, ScalePolicy::default()).unwrap();
        let [threshold, target, ceiling, current] = markers(&line, 140.0, 120.0);

        assert_eq!((threshold.x, threshold.y), (45.0, 45.0));
        assert_eq!((target.x, target.y), (100.0, 100.0));
        assert_eq!((ceiling.x, ceiling.y), (120.0, 120.0));
        assert_eq!(current.kind, MarkerKind::Current);
        assert_eq!((current.x, current.y), (120.0, 120.0));
    }
}
