use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::{DisplayArgs, InputArgs};
use crate::config::{self, MetasimConfig};
use crate::core::EvaluationInput;
use crate::evaluation::{Evaluation, Evaluator};
use crate::formatting::{formatter_for, FormattingConfig};
use crate::io::{create_writer, OutputFormat, OutputWriter, TerminalOptions};

/// Everything a report command needs, resolved from flags and config.
pub struct EvaluateConfig {
    pub input: EvaluationInput,
    pub evaluator: Evaluator,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub terminal: TerminalOptions,
}

// Pure function: flags win over config defaults, field by field
pub fn merge_input(args: &InputArgs, defaults: EvaluationInput) -> EvaluationInput {
    EvaluationInput {
        meta: args.meta.unwrap_or(defaults.meta),
        minimo: args.minimo.unwrap_or(defaults.minimo),
        realizado: args.realizado.unwrap_or(defaults.realizado),
        sentido: args.sentido.unwrap_or(defaults.sentido),
    }
}

fn load_settings(args: &InputArgs) -> Result<MetasimConfig> {
    match &args.config {
        Some(path) => config::load_config_from(path),
        None => Ok(config::load_config()),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(display: &DisplayArgs, settings: &MetasimConfig) -> FormattingConfig {
    // File output never gets escape codes
    if display.plain || display.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env_with(settings.use_color())
    }
}

pub fn build_evaluate_config(
    input: &InputArgs,
    display: &DisplayArgs,
    verbosity: u8,
) -> Result<EvaluateConfig> {
    let settings = load_settings(input)?;
    let evaluator = settings
        .evaluator(display.points)
        .context("Invalid calculator configuration")?;

    Ok(EvaluateConfig {
        input: merge_input(input, settings.input_defaults()),
        evaluator,
        format: display.format.unwrap_or_else(|| settings.default_format()),
        output: display.output.clone(),
        formatting: create_formatting_config(display, &settings),
        terminal: TerminalOptions {
            show_chart: !display.no_chart,
            verbosity,
            plain: display.plain || display.output.is_some(),
        },
    })
}

/// Evaluate, then hand the result to the configured writer.
pub(crate) fn run_report(
    config: EvaluateConfig,
    write: impl FnOnce(&mut dyn OutputWriter, &Evaluation) -> Result<()>,
) -> Result<()> {
    let evaluation = config.evaluator.evaluate(config.input)?;
    log::info!(
        "resultado {:.2}%, atingimento {:.2}%",
        evaluation.resultado,
        evaluation.atingimento
    );

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(
        config.format,
        sink,
        formatter_for(config.formatting),
        config.terminal,
    );
    write(writer.as_mut(), &evaluation)
}

pub fn handle_evaluate(config: EvaluateConfig) -> Result<()> {
    run_report(config, |writer, evaluation| {
        writer.write_evaluation(evaluation)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_merge_input_prefers_flags() {
        let args = InputArgs {
            realizado: Some(95.0),
            sentido: Some(Direction::LowerIsBetter),
            ..InputArgs::default()
        };
        let merged = merge_input(&args, EvaluationInput::default());

        assert_eq!(merged.meta, 100.0);
        assert_eq!(merged.minimo, 45.0);
        assert_eq!(merged.realizado, 95.0);
        assert_eq!(merged.sentido, Direction::LowerIsBetter);
    }

    #[test]
    fn test_output_file_forces_plain_formatting() {
        let display = DisplayArgs {
            output: Some(PathBuf::from("report.md")),
            ..DisplayArgs::default()
        };
        let formatting = create_formatting_config(&display, &MetasimConfig::default());
        assert_eq!(formatting.color, crate::formatting::ColorMode::Never);
    }
}
