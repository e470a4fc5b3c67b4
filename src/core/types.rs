use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of improvement for an indicator (Sentido).
///
/// Determines the sign of the raw result computation: a higher achieved
/// value is better under [`Direction::HigherIsBetter`] ("Maior"), a lower
/// one under [`Direction::LowerIsBetter`] ("Menor").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "maior", alias = "higher", alias = "Maior")]
    HigherIsBetter,
    #[serde(rename = "menor", alias = "lower", alias = "Menor")]
    LowerIsBetter,
}

impl Direction {
    /// Label used on the dashboard selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::HigherIsBetter => "Maior",
            Self::LowerIsBetter => "Menor",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maior" | "higher" | "higher-is-better" => Ok(Self::HigherIsBetter),
            "menor" | "lower" | "lower-is-better" => Ok(Self::LowerIsBetter),
            other => Err(format!(
                "unknown direction '{other}' (expected maior/higher or menor/lower)"
            )),
        }
    }
}

/// The four scalar inputs of a single evaluation.
///
/// Built fresh for every evaluation request and passed by value; the
/// calculator never reads ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    /// Target value (Meta), representing 100% raw achievement.
    pub meta: f64,
    /// Minimum acceptable threshold (Patamar Mínimo) on the resultado scale.
    pub minimo: f64,
    /// Achieved value (Realizado).
    pub realizado: f64,
    /// Direction of improvement (Sentido).
    pub sentido: Direction,
}

impl EvaluationInput {
    pub fn new(meta: f64, minimo: f64, realizado: f64, sentido: Direction) -> Self {
        Self {
            meta,
            minimo,
            realizado,
            sentido,
        }
    }

    /// Same configuration with a different achieved value.
    pub fn with_realizado(self, realizado: f64) -> Self {
        Self { realizado, ..self }
    }
}

impl Default for EvaluationInput {
    fn default() -> Self {
        Self {
            meta: 100.0,
            minimo: 45.0,
            realizado: 80.0,
            sentido: Direction::HigherIsBetter,
        }
    }
}

/// A single sample of the attainment curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Resultado (%)
    pub x: f64,
    /// Atingimento (%)
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Patamar Mínimo
    Threshold,
    /// 100% of the target
    Target,
    /// Point where the score reaches its cap
    Ceiling,
    /// The simulated value
    Current,
}

impl MarkerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Threshold => "Patamar Mínimo",
            Self::Target => "100%",
            Self::Ceiling => "120%",
            Self::Current => "Valor Simulado",
        }
    }
}

/// A highlighted point drawn on top of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parsing() {
        assert_eq!("Maior".parse::<Direction>(), Ok(Direction::HigherIsBetter));
        assert_eq!("higher".parse::<Direction>(), Ok(Direction::HigherIsBetter));
        assert_eq!(" MENOR ".parse::<Direction>(), Ok(Direction::LowerIsBetter));
        assert_eq!(
            "lower-is-better".parse::<Direction>(),
            Ok(Direction::LowerIsBetter)
        );
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::LowerIsBetter).unwrap();
        assert_eq!(json, "\"menor\"");

        let parsed: Direction = serde_json::from_str("\"higher\"").unwrap();
        assert_eq!(parsed, Direction::HigherIsBetter);
    }

    #[test]
    fn test_default_input_matches_dashboard_defaults() {
        let input = EvaluationInput::default();
        assert_eq!(input.meta, 100.0);
        assert_eq!(input.minimo, 45.0);
        assert_eq!(input.realizado, 80.0);
        assert_eq!(input.sentido, Direction::HigherIsBetter);
    }

    #[test]
    fn test_with_realizado_keeps_configuration() {
        let input = EvaluationInput::new(200.0, 30.0, 10.0, Direction::LowerIsBetter);
        let changed = input.with_realizado(150.0);
        assert_eq!(changed.meta, 200.0);
        assert_eq!(changed.minimo, 30.0);
        assert_eq!(changed.realizado, 150.0);
        assert_eq!(changed.sentido, Direction::LowerIsBetter);
    }
}
