use super::AnalysisReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the report as pretty-printed JSON, replacing any existing file.
pub fn export_json<P: AsRef<Path>>(report: &AnalysisReport, path: P) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(path = %path.as_ref().display(), "exported readiness analysis");
    Ok(())
}
