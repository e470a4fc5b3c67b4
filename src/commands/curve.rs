use anyhow::Result;

use super::evaluate::{run_report, EvaluateConfig};

/// Print only the sampled curve and its markers.
pub fn handle_curve(config: EvaluateConfig) -> Result<()> {
    run_report(config, |writer, evaluation| writer.write_curve(evaluation))
}
