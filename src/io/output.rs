use clap::ValueEnum;
use comfy_table::{presets, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;

use super::chart::{symbol, AsciiChart};
use crate::core::MarkerKind;
use crate::evaluation::Evaluation;
use crate::formatting::OutputFormatter;

const DISCLAIMER: &str = "This panel is a simulation and does not replace official results.";

/// Glossary of the report's inputs and outputs.
const LEGEND: [(&str, &str); 6] = [
    (
        "Sentido",
        "whether performance improves as the value goes up (Maior) or down (Menor)",
    ),
    ("Patamar Mínimo", "minimum result required before attainment is scored"),
    ("Meta", "target value, counted as 100%"),
    ("Realizado", "value actually achieved"),
    ("Resultado", "achieved value as a percentage of the target"),
    (
        "Atingimento",
        "score after applying the minimum threshold and the attainment curve (0% to 120%)",
    ),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    /// Full report: inputs, both percentages, curve and markers.
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()>;

    /// Only the sampled curve and its markers.
    fn write_curve(&mut self, evaluation: &Evaluation) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value(&mut self, value: &impl Serialize) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        self.write_value(evaluation)
    }

    fn write_curve(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        self.write_value(&json!({
            "curve": evaluation.curve,
            "markers": evaluation.markers,
        }))
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Simulação de Metas")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let input = &evaluation.input;

        writeln!(self.writer, "## Parâmetros")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parâmetro | Valor |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        writeln!(self.writer, "| Sentido | {} |", input.sentido)?;
        writeln!(self.writer, "| Patamar Mínimo | {:.2} |", input.minimo)?;
        writeln!(self.writer, "| Meta | {:.2} |", input.meta)?;
        writeln!(self.writer, "| Realizado | {:.2} |", input.realizado)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Resultado")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Métrica | Valor |")?;
        writeln!(self.writer, "|---------|-------|")?;
        writeln!(self.writer, "| Resultado | {:.2}% |", evaluation.resultado)?;
        writeln!(self.writer, "| Atingimento | {:.2}% |", evaluation.atingimento)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_markers(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        writeln!(self.writer, "## Marcadores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Marcador | Resultado (%) | Atingimento (%) |")?;
        writeln!(self.writer, "|----------|---------------|-----------------|")?;
        for marker in &evaluation.markers {
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.2} |",
                marker.kind.label(),
                marker.x,
                marker.y
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_curve_table(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        writeln!(self.writer, "## Curva de Atingimento")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Resultado (%) | Atingimento (%) |")?;
        writeln!(self.writer, "|---------------|-----------------|")?;
        for point in &evaluation.curve {
            writeln!(self.writer, "| {:.2} | {:.2} |", point.x, point.y)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_legend(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "## Legenda")?;
        writeln!(self.writer)?;
        for (term, meaning) in LEGEND {
            writeln!(self.writer, "- **{term}**: {meaning}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(evaluation)?;
        self.write_markers(evaluation)?;
        self.write_curve_table(evaluation)?;
        self.write_legend()?;
        writeln!(self.writer, "> {DISCLAIMER}")?;
        Ok(())
    }

    fn write_curve(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        self.write_markers(evaluation)?;
        self.write_curve_table(evaluation)
    }
}

/// Options for the human-readable writer.
#[derive(Debug, Clone, Copy)]
pub struct TerminalOptions {
    pub show_chart: bool,
    pub verbosity: u8,
    pub plain: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            show_chart: true,
            verbosity: 0,
            plain: false,
        }
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    options: TerminalOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>, options: TerminalOptions) -> Self {
        Self {
            writer,
            formatter,
            options,
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.options.plain {
            table.load_preset(presets::ASCII_FULL);
        } else {
            table.load_preset(presets::UTF8_FULL);
        }
        table
    }

    fn write_parameters(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let input = &evaluation.input;
        let mut table = self.table();
        table
            .set_header(vec!["Parâmetro", "Valor"])
            .add_row(vec!["Sentido do Indicador".to_string(), input.sentido.to_string()])
            .add_row(vec!["Patamar Mínimo".to_string(), format!("{:.2}", input.minimo)])
            .add_row(vec!["Meta".to_string(), format!("{:.2}", input.meta)])
            .add_row(vec!["Realizado".to_string(), format!("{:.2}", input.realizado)]);

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let target_score = evaluation.line.policy.target_score;

        writeln!(self.writer, "Resultado:   {:.2}%", evaluation.resultado)?;
        writeln!(
            self.writer,
            "Atingimento: {}",
            self.formatter.attainment(evaluation.atingimento, target_score)
        )?;

        if evaluation.below_threshold() {
            let note = format!(
                "Resultado below the minimum threshold ({:.2}); attainment is zero.",
                evaluation.input.minimo
            );
            writeln!(self.writer, "{}", self.formatter.warning(&note))?;
        } else if evaluation.is_capped() {
            let note = format!(
                "Attainment capped at {:.0}%.",
                evaluation.line.policy.ceiling_score
            );
            writeln!(self.writer, "{}", self.formatter.dim(&note))?;
        }

        if self.options.verbosity > 0 {
            let line = &evaluation.line;
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim(&format!(
                    "slope m = {:.4}, intercept b = {:.4}, cap reached at resultado {:.2}%",
                    line.slope,
                    line.intercept,
                    line.ceiling_result()
                ))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_chart(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Atingimento de Meta"))?;
        for line in AsciiChart::default().render(&evaluation.curve, &evaluation.markers) {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .dim("x: Resultado (%)   y: Atingimento (%)   ·: Curva de Atingimento")
        )?;

        let legend: Vec<String> = [
            MarkerKind::Threshold,
            MarkerKind::Target,
            MarkerKind::Ceiling,
            MarkerKind::Current,
        ]
        .into_iter()
        .map(|kind| format!("{}: {}", symbol(kind), kind.label()))
        .collect();
        writeln!(self.writer, "{}", self.formatter.dim(&legend.join("   ")))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_legend(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Legenda"))?;
        for (term, meaning) in LEGEND {
            writeln!(self.writer, "  {term}: {}", self.formatter.dim(meaning))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_curve_points(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["#", "Resultado (%)", "Atingimento (%)"]);
        for (index, point) in evaluation.curve.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                format!("{:.2}", point.x),
                format!("{:.2}", point.y),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let title = format!("{} Simulação de Metas", self.formatter.emoji("📊", "=="));
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer)?;

        self.write_parameters(evaluation)?;
        self.write_scores(evaluation)?;
        if self.options.show_chart {
            self.write_chart(evaluation)?;
        }
        self.write_legend()?;

        let footer = format!("{} {DISCLAIMER}", self.formatter.emoji("⚠️", "!"));
        writeln!(self.writer, "{}", self.formatter.dim(&footer))?;
        Ok(())
    }

    fn write_curve(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        if self.options.show_chart {
            self.write_chart(evaluation)?;
        }
        self.write_curve_points(evaluation)
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatter: Box<dyn OutputFormatter>,
    options: TerminalOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatter, options)),
    }
}
