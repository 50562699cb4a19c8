use serde::Serialize;

use crate::model::{MetricFamily, RunResult};
use crate::report::format::{MISSING_CELL, format_currency, format_months, format_percent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<String>,
}

/// Rows are metric slots, columns are runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn row(&self, label: &str) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn render_tsv(&self) -> String {
        let mut out = String::new();
        out.push_str("metric");
        for c in &self.columns {
            out.push('\t');
            out.push_str(c);
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.label);
            for cell in &row.cells {
                out.push('\t');
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }

    /// Space-aligned plain text table.
    pub fn render_aligned(&self) -> String {
        let label_w = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once("Metric".len()))
            .max()
            .unwrap_or(0);
        let col_w = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(c.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        let mut out = String::new();
        out.push_str(&format!("{:<label_w$}", "Metric"));
        for (c, w) in self.columns.iter().zip(&col_w) {
            out.push_str(&format!("  {:>w$}", c, w = *w));
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!("{:<label_w$}", row.label));
            for (cell, w) in row.cells.iter().zip(&col_w) {
                out.push_str(&format!("  {:>w$}", cell, w = *w));
            }
            out.push('\n');
        }
        out
    }
}

pub fn render_table(runs: &[RunResult]) -> ComparisonTable {
    let columns = runs
        .iter()
        .map(|r| format!("Run #{}", r.index))
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for &family in MetricFamily::all() {
        let depth = runs
            .iter()
            .map(|r| family.values(&r.metrics).len())
            .max()
            .unwrap_or(0);
        for i in 0..depth {
            let cells = runs
                .iter()
                .map(|r| match family.values(&r.metrics).get(i) {
                    Some(v) => format_cell(family, *v),
                    None => MISSING_CELL.to_string(),
                })
                .collect();
            rows.push(TableRow {
                label: row_label(family, i),
                cells,
            });
        }
    }
    rows.push(TableRow {
        label: "Recommendation".to_string(),
        cells: runs
            .iter()
            .map(|r| r.metrics.recommendation.as_str().to_string())
            .collect(),
    });

    ComparisonTable { columns, rows }
}

fn row_label(family: MetricFamily, index: usize) -> String {
    let name = match family {
        MetricFamily::DollarAmount => "Dollar Amount",
        MetricFamily::Percentage => "Percentage",
        MetricFamily::MonthDuration => "Time Period",
    };
    format!("{} {}", name, index + 1)
}

fn format_cell(family: MetricFamily, v: f64) -> String {
    match family {
        MetricFamily::DollarAmount => format_currency(v),
        MetricFamily::Percentage => format_percent(v),
        MetricFamily::MonthDuration => format_months(v),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_table.rs"]
mod tests;
