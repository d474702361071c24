/*!
 * Delimited text codec for the intermediate artifacts.
 *
 * The intermediate files are pipe-separated tables with the header on the first
 * line. Missing cells are written either as a literal token (`NaN`) or as empty
 * fields, depending on the stage; reading accepts both.
 */

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::debug;
use std::path::Path;

use crate::app_config::IntermediateConfig;
use crate::errors::ConversionError;
use crate::table::{normalize_header, CellValue, Table};

/// How the missing marker is rendered on write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingRendering {
    /// Write a literal token in place of missing cells
    Token(String),
    /// Write an empty field
    Empty,
}

impl MissingRendering {
    fn render<'a>(&'a self, cell: &'a CellValue) -> &'a str {
        match (cell, self) {
            (CellValue::Text(text), _) => text,
            (CellValue::Missing, Self::Token(token)) => token,
            (CellValue::Missing, Self::Empty) => "",
        }
    }
}

/// Reader/writer settings for one delimited dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedFormat {
    /// Field delimiter
    pub delimiter: u8,
    /// Field values read back as missing (the empty field always is)
    pub na_values: Vec<String>,
}

impl Default for DelimitedFormat {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            na_values: vec!["NaN".to_string()],
        }
    }
}

impl DelimitedFormat {
    /// Build the dialect described by the configuration. The missing token is
    /// always read back as missing, whether or not `na_values` lists it.
    pub fn from_config(config: &IntermediateConfig) -> Self {
        let mut na_values = config.na_values.clone();
        if !config.missing_token.is_empty() && !na_values.contains(&config.missing_token) {
            na_values.push(config.missing_token.clone());
        }

        Self {
            delimiter: config.delimiter_byte(),
            na_values,
        }
    }

    fn is_na(&self, field: &str) -> bool {
        field.is_empty() || self.na_values.iter().any(|na| na == field)
    }

    /// Read a whole delimited file into a table
    pub fn read_table<P: AsRef<Path>>(&self, path: P) -> Result<Table, ConversionError> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| ConversionError::read(path, e))?;

        let mut records = reader.records();

        let header_record = match records.next() {
            Some(record) => record.map_err(|e| ConversionError::read(path, e))?,
            None => return Err(ConversionError::read(path, "no header line")),
        };
        let header = normalize_header(header_record.iter().map(CellValue::from).collect());

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(|e| ConversionError::read(path, e))?;
            if record.len() > header.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(ConversionError::read(
                    path,
                    format!("expected {} fields on line {}, saw {}", header.len(), line, record.len()),
                ));
            }
            rows.push(self.parse_record(&record));
        }

        debug!("Read {} rows x {} columns from {:?}", rows.len(), header.len(), path);

        Ok(Table::from_rows(header, rows))
    }

    fn parse_record(&self, record: &StringRecord) -> Vec<CellValue> {
        record
            .iter()
            .map(|field| {
                if self.is_na(field) {
                    CellValue::Missing
                } else {
                    CellValue::text(field)
                }
            })
            .collect()
    }

    /// Write a table, replacing any existing file
    pub fn write_table<P: AsRef<Path>>(
        &self,
        table: &Table,
        path: P,
        missing: &MissingRendering,
    ) -> Result<(), ConversionError> {
        let path = path.as_ref();
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| ConversionError::write(path, e))?;

        // Column names are never replaced by the token
        writer
            .write_record(table.header().map(CellValue::render))
            .map_err(|e| ConversionError::write(path, e))?;

        for index in 0..table.row_count() {
            writer
                .write_record(table.row(index).map(|cell| missing.render(cell)))
                .map_err(|e| ConversionError::write(path, e))?;
        }

        writer.flush().map_err(|e| ConversionError::write(path, e))?;

        debug!("Wrote {} rows x {} columns to {:?}", table.row_count(), table.column_count(), path);

        Ok(())
    }
}
