mod parser;

use crate::analytics::record::{fields, EmployeeRecord};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Failure to obtain a usable input table. Nothing is scored when this occurs.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read employee table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid employee CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("employee table has no '{column}' column")]
    MissingIdentifierColumn { column: &'static str },
    /// A data row with a blank identifier. This rejects the whole table rather than
    /// emitting an unaddressable prediction, which is stricter than only requiring
    /// the column to exist.
    #[error("data row {row} has an empty '{column}' value")]
    MissingIdentifier { row: usize, column: &'static str },
}

/// A loaded input table, rows in file order.
#[derive(Debug, Clone, Default)]
pub struct EmployeeTable {
    pub headers: Vec<String>,
    pub records: Vec<EmployeeRecord>,
}

impl EmployeeTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads the primary ML feature table. The `EmployeeID` column must exist and
/// every row must fill it; one blank identifier fails the load.
pub struct EmployeeTableLoader;

impl EmployeeTableLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EmployeeTable, IngestError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "loaded employee feature table"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<EmployeeTable, IngestError> {
        let raw = parser::parse_table(reader)?;

        if !raw.headers.iter().any(|header| header == fields::EMPLOYEE_ID) {
            return Err(IngestError::MissingIdentifierColumn {
                column: fields::EMPLOYEE_ID,
            });
        }

        if let Some(position) = raw
            .records
            .iter()
            .position(|record| !record.contains(fields::EMPLOYEE_ID))
        {
            return Err(IngestError::MissingIdentifier {
                row: position + 1,
                column: fields::EMPLOYEE_ID,
            });
        }

        Ok(EmployeeTable {
            headers: raw.headers,
            records: raw.records,
        })
    }
}

/// Loads the secondary HR attrition table. It is kept for reference only and is
/// not required to carry any particular column.
pub struct AttritionTableLoader;

impl AttritionTableLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EmployeeTable, IngestError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "loaded attrition reference table"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<EmployeeTable, IngestError> {
        let raw = parser::parse_table(reader)?;
        Ok(EmployeeTable {
            headers: raw.headers,
            records: raw.records,
        })
    }
}
