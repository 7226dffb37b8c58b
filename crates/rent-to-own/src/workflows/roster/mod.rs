mod parser;

use crate::workflows::readiness::RenterRecord;
use std::fmt;
use std::io::Read;
use std::path::Path;

pub use parser::FieldProblem;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow {
        line: u64,
        field: &'static str,
        problem: FieldProblem,
    },
}

impl fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read renter roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid renter roster CSV: {}", err),
            RosterImportError::InvalidRow {
                line,
                field,
                problem,
            } => write!(f, "invalid input on line {line}: {field} {problem}"),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads renter records from a delimited roster export.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RenterRecord>, RosterImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let records = Self::from_reader(file)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = records.len(),
            "loaded renter roster"
        );
        Ok(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RenterRecord>, RosterImportError> {
        parser::parse_records(reader)
    }
}
