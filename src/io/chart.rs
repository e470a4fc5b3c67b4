//! Text rendering of the attainment chart
//!
//! Both axes share one scale starting at zero. The scale is at least 0..140,
//! the dashboard's fixed range, and grows in steps of 10 when a point lies
//! beyond it.

use crate::core::{CurvePoint, Marker, MarkerKind};

const MIN_AXIS: f64 = 140.0;
const LABEL_EVERY: usize = 5;

pub fn symbol(kind: MarkerKind) -> char {
    match kind {
        MarkerKind::Threshold => 'm',
        MarkerKind::Target => 'T',
        MarkerKind::Ceiling => 'C',
        MarkerKind::Current => '@',
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AsciiChart {
    width: usize,
    height: usize,
}

impl Default for AsciiChart {
    fn default() -> Self {
        Self::new(64, 21)
    }
}

impl AsciiChart {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(10),
            height: height.max(5),
        }
    }

    pub fn render(&self, curve: &[CurvePoint], markers: &[Marker]) -> Vec<String> {
        let max = axis_max(curve, markers);
        let mut grid = vec![vec![' '; self.width]; self.height];

        for column in 0..self.width {
            let x = column as f64 / (self.width - 1) as f64 * max;
            if let Some(y) = interpolate(curve, x) {
                let row = self.row(y, max);
                grid[row][column] = '·';
            }
        }

        // Markers are drawn last so they stay visible over the line
        for marker in markers {
            let row = self.row(marker.y, max);
            let column = cell(marker.x, max, self.width);
            grid[row][column] = symbol(marker.kind);
        }

        let mut lines: Vec<String> = grid
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                let line: String = cells.into_iter().collect();
                format!("{} |{}", self.row_label(row, max), line.trim_end())
            })
            .collect();

        lines.push(format!("{} +{}", " ".repeat(6), "-".repeat(self.width)));
        lines.push(self.x_labels(max));
        lines
    }

    fn row(&self, y: f64, max: f64) -> usize {
        self.height - 1 - cell(y, max, self.height)
    }

    fn row_label(&self, row: usize, max: f64) -> String {
        let from_bottom = self.height - 1 - row;
        if from_bottom % LABEL_EVERY == 0 || row == 0 {
            let value = from_bottom as f64 / (self.height - 1) as f64 * max;
            format!("{value:>6.0}")
        } else {
            " ".repeat(6)
        }
    }

    fn x_labels(&self, max: f64) -> String {
        let mid = format!("{:.0}", max / 2.0);
        let end = format!("{max:.0}");
        let mut line = format!("{}  0", " ".repeat(6));
        let mid_column = 8 + self.width / 2 - mid.len() / 2;
        let end_column = 8 + self.width - end.len();

        pad_to(&mut line, mid_column);
        line.push_str(&mid);
        pad_to(&mut line, end_column);
        line.push_str(&end);
        line
    }
}

fn pad_to(line: &mut String, column: usize) {
    let len = line.chars().count();
    if len < column {
        line.push_str(&" ".repeat(column - len));
    } else {
        line.push(' ');
    }
}

/// Shared scale for both axes.
pub fn axis_max(curve: &[CurvePoint], markers: &[Marker]) -> f64 {
    let largest = curve
        .iter()
        .flat_map(|p| [p.x, p.y])
        .chain(markers.iter().flat_map(|m| [m.x, m.y]))
        .filter(|v| v.is_finite())
        .fold(MIN_AXIS, f64::max);

    (largest / 10.0).ceil() * 10.0
}

fn cell(value: f64, max: f64, cells: usize) -> usize {
    let scaled = (value.max(0.0) / max * (cells - 1) as f64).round() as usize;
    scaled.min(cells - 1)
}

/// Linear interpolation on the sampled curve; `None` outside its domain.
fn interpolate(curve: &[CurvePoint], x: f64) -> Option<f64> {
    let first = curve.first()?;
    let last = curve.last()?;
    if x < first.x || x > last.x {
        return None;
    }

    curve
        .windows(2)
        .find(|w| x <= w[1].x)
        .map(|w| {
            let span = w[1].x - w[0].x;
            if span <= 0.0 {
                w[1].y
            } else {
                w[0].y + (x - w[0].x) / span * (w[1].y - w[0].y)
            }
        })
        .or(Some(first.y))
}
