//! Uploaded workbook parsing
//!
//! The dashboard compares two columns: the first column of the first sheet
//! ("original") and the first column of the second sheet ("matching").

use anyhow::Context;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use serde::Serialize;
use std::io::Cursor;
use tracing::info;

use crate::error::{Result, ScratchError};

/// First column of one sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnData {
    pub sheet: String,
    pub header: String,
    pub values: Vec<String>,
}

/// The two columns to be matched against each other
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchingColumns {
    pub original: ColumnData,
    pub matching: ColumnData,
}

impl MatchingColumns {
    /// Every value of both columns, original first.
    pub fn all_values(&self) -> impl Iterator<Item = &str> {
        self.original
            .values
            .iter()
            .chain(self.matching.values.iter())
            .map(String::as_str)
    }
}

/// Parse an uploaded workbook (xlsx, xls, xlsb or ods) held in memory.
pub fn parse_workbook(bytes: Vec<u8>) -> Result<MatchingColumns> {
    if bytes.is_empty() {
        return Err(ScratchError::Upload("uploaded file is empty".into()).into());
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ScratchError::Upload(format!("not a readable workbook: {}", e)))?;

    let sheets = workbook.sheet_names();
    if sheets.len() < 2 {
        return Err(ScratchError::Upload(format!(
            "workbook needs two sheets, found {}",
            sheets.len()
        ))
        .into());
    }

    let mut columns = Vec::with_capacity(2);
    for name in sheets.iter().take(2) {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet {}", name))?;
        columns.push(first_column(name, &range)?);
    }

    let matching = columns.pop().context("missing matching column")?;
    let original = columns.pop().context("missing original column")?;

    info!(
        "Parsed workbook: {} original value(s) from '{}', {} matching value(s) from '{}'",
        original.values.len(),
        original.sheet,
        matching.values.len(),
        matching.sheet
    );

    Ok(MatchingColumns { original, matching })
}

/// Column A of a sheet, with row 1 as the header.
///
/// calamine ranges start at the first non-empty cell, so cells are read by
/// absolute position: a blank column A or a blank first row is not skipped
/// over.
fn first_column(sheet: &str, range: &Range<Data>) -> Result<ColumnData> {
    let no_header = || ScratchError::Upload(format!("sheet '{}' has no header in cell A1", sheet));

    let header = range
        .get_value((0, 0))
        .map(cell_text)
        .filter(|h| !h.is_empty())
        .ok_or_else(no_header)?;

    let last_row = range.end().map(|(row, _)| row).unwrap_or(0);
    let values = (1..=last_row)
        .filter_map(|row| range.get_value((row, 0)))
        .map(cell_text)
        .filter(|v| !v.is_empty())
        .collect();

    Ok(ColumnData {
        sheet: sheet.to_string(),
        header,
        values,
    })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
