use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::ReportContext;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const SUMMARY_FILE: &str = "summary.json";
pub const COMPARISON_FILE: &str = "comparison.tsv";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(ctx: &ReportContext<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let json = render_summary_json(ctx)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;
    write_text(&out_dir.join(COMPARISON_FILE), &ctx.table.render_tsv())?;
    write_text(&out_dir.join(REPORT_FILE), &render_report_text(ctx))?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
