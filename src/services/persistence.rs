//! Persistence adapter
//!
//! Serializes the full record set to a spreadsheet or CSV file and reads it
//! back. Each operation either completes for the whole table or fails
//! without touching the in-memory store: `load` returns the parsed records
//! and the caller replaces the store only on success.

use std::io;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::{
    error::{AppError, AppResult},
    models::record::{Column, InventoryRecord},
};

/// Sheet name used for spreadsheet output
const SHEET_NAME: &str = "Inventory";

#[derive(Debug, Default)]
pub struct PersistenceService;

impl PersistenceService {
    pub fn new() -> Self {
        Self
    }

    /// Write the full record set to a spreadsheet file. Column order is
    /// fixed to the schema; the header row carries the canonical names.
    pub fn save<'a, I>(&self, records: I, path: &Path) -> AppResult<usize>
    where
        I: IntoIterator<Item = &'a InventoryRecord>,
    {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

        for (col, header) in Column::headers().iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(xlsx_err)?;
        }

        let mut row: u32 = 1;
        for record in records {
            for (col, value) in record.values().iter().enumerate() {
                if !value.is_empty() {
                    worksheet
                        .write_string(row, col as u16, *value)
                        .map_err(xlsx_err)?;
                }
            }
            row += 1;
        }

        workbook.save(path).map_err(xlsx_err)?;
        let written = (row - 1) as usize;
        tracing::info!("Table saved to {} ({written} records)", path.display());
        Ok(written)
    }

    /// Read a spreadsheet file into the schema. The header row must match
    /// the schema columns in fixed order.
    pub fn load(&self, path: &Path) -> AppResult<Vec<InventoryRecord>> {
        if !path.exists() {
            return Err(AppError::FileNotFound(path.to_path_buf()));
        }

        let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
            open_workbook(path).map_err(|e: calamine::XlsxError| AppError::Format(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Format("Workbook has no sheets".to_string()))?
            .map_err(|e| AppError::Format(e.to_string()))?;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| AppError::Format("Missing header row".to_string()))?;

        let expected = Column::headers();
        let header_ok = header.len() >= expected.len()
            && expected
                .iter()
                .enumerate()
                .all(|(i, name)| cell_to_string(header.get(i)).trim() == *name);
        if !header_ok {
            return Err(AppError::Format(
                "Header row does not match the inventory schema".to_string(),
            ));
        }

        let mut records = Vec::new();
        for row in rows {
            let mut values: [String; 13] = Default::default();
            for (i, value) in values.iter_mut().enumerate() {
                *value = cell_to_string(row.get(i));
            }
            // Trailing blank rows are not records
            if values.iter().all(|v| v.is_empty()) {
                continue;
            }
            records.push(InventoryRecord::from_row(values));
        }

        tracing::info!("Table loaded from {} ({} records)", path.display(), records.len());
        Ok(records)
    }

    /// Write the full record set as CSV, same column order and header as
    /// the spreadsheet export.
    pub fn export_csv<'a, I>(&self, records: I, path: &Path) -> AppResult<usize>
    where
        I: IntoIterator<Item = &'a InventoryRecord>,
    {
        // Header is written up front so an empty table still exports the
        // schema row, like the spreadsheet output.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(csv_err)?;
        writer.write_record(Column::headers()).map_err(csv_err)?;
        let mut written = 0;
        for record in records {
            writer.serialize(record).map_err(csv_err)?;
            written += 1;
        }
        writer.flush()?;
        tracing::info!("Table exported to CSV at {} ({written} records)", path.display());
        Ok(written)
    }
}

fn cell_to_string(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(value) => value.to_string(),
    }
}

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Io(io::Error::other(e.to_string()))
}

fn csv_err(e: csv::Error) -> AppError {
    AppError::Io(io::Error::other(e.to_string()))
}
