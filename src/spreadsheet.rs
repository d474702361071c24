/*!
 * Spreadsheet import and export.
 *
 * Import reads the first worksheet of any workbook format calamine understands
 * (legacy `.xls` included) into a [`Table`]. Export writes a single-sheet `.xlsx`
 * with rust_xlsxwriter and sizes every column to its widest rendered value.
 */

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use log::debug;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

use crate::app_config::OutputConfig;
use crate::errors::ConversionError;
use crate::table::{normalize_header, CellValue, Table};

/// Read the first worksheet of a workbook. The first row holds the column names.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Table, ConversionError> {
    let path = path.as_ref();

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ConversionError::read(path, format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ConversionError::read(path, "workbook has no worksheets"))?
        .map_err(|e| ConversionError::read(path, format!("Failed to read first worksheet: {}", e)))?;

    table_from_range(&range).ok_or_else(|| ConversionError::read(path, "worksheet is empty"))
}

/// Convert a worksheet range into a table, or `None` when it has no cells.
///
/// Columns are counted from `A`: blank columns to the left of the first used
/// cell become all-missing columns. The header is the first row holding data.
pub fn table_from_range(range: &Range<Data>) -> Option<Table> {
    if range.is_empty() {
        return None;
    }

    let leading_blank_columns = range.start().map_or(0, |(_, col)| col as usize);
    let render_row = |row: &[Data]| -> Vec<CellValue> {
        std::iter::repeat_n(CellValue::Missing, leading_blank_columns)
            .chain(row.iter().map(render_cell))
            .collect()
    };

    let mut rows = range.rows();
    let header = normalize_header(render_row(rows.next()?));
    let body: Vec<Vec<CellValue>> = rows.map(render_row).collect();

    debug!("Worksheet holds {} data rows x {} columns", body.len(), header.len());

    Some(Table::from_rows(header, body))
}

/// Text rendering of one worksheet cell; blanks, empty strings and errors are missing
pub fn render_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(text) if text.is_empty() => CellValue::Missing,
        Data::String(text) => CellValue::text(text.as_str()),
        Data::Int(value) => CellValue::Text(value.to_string()),
        Data::Float(value) => CellValue::Text(render_float(*value)),
        Data::Bool(value) => CellValue::text(if *value { "True" } else { "False" }),
        Data::DateTime(excel) => match cell.as_datetime() {
            Some(datetime) if excel.is_datetime() => {
                if datetime.time() == chrono::NaiveTime::MIN {
                    CellValue::Text(datetime.format("%Y-%m-%d").to_string())
                } else {
                    CellValue::Text(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
                }
            }
            _ => CellValue::Text(excel.as_f64().to_string()),
        },
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::text(text.as_str()),
    }
}

fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Display widths for every column: widest rendered value plus `padding`
pub fn column_widths(table: &Table, padding: usize) -> Vec<usize> {
    table
        .columns()
        .iter()
        .map(|column| column.max_display_len() + padding)
        .collect()
}

/// Write `table` to a new `.xlsx` workbook with one auto-sized worksheet
pub fn write_workbook<P: AsRef<Path>>(
    table: &Table,
    path: P,
    options: &OutputConfig,
) -> Result<(), ConversionError> {
    let path = path.as_ref();
    let to_write_error = |e: XlsxError| ConversionError::write(path, e);

    let mut workbook = Workbook::new();
    let header_format = if options.bold_header {
        Format::new().set_bold()
    } else {
        Format::new()
    };

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&options.sheet_name).map_err(to_write_error)?;

        let widths = column_widths(table, options.column_padding);

        for (index, column) in table.columns().iter().enumerate() {
            let col = u16::try_from(index)
                .map_err(|_| ConversionError::write(path, format!("too many columns: {}", table.column_count())))?;

            if let Some(name) = column.name.as_text().filter(|name| !name.is_empty()) {
                worksheet
                    .write_string_with_format(0, col, name, &header_format)
                    .map_err(to_write_error)?;
            }

            for (row_index, cell) in column.values.iter().enumerate() {
                let Some(text) = cell.as_text().filter(|text| !text.is_empty()) else {
                    continue;
                };
                let row = u32::try_from(row_index + 1)
                    .map_err(|_| ConversionError::write(path, format!("too many rows: {}", table.row_count())))?;
                worksheet.write_string(row, col, text).map_err(to_write_error)?;
            }

            worksheet
                .set_column_width(col, widths[index] as f64)
                .map_err(to_write_error)?;
        }
    }

    workbook.save(path).map_err(to_write_error)?;

    debug!("Saved workbook {:?} ({} rows x {} columns)", path, table.row_count(), table.column_count());

    Ok(())
}
