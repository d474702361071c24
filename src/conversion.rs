/*!
 * The two format-conversion stages of the pipeline.
 *
 * - workbook → delimited intermediate, missing cells written as the token
 * - translated delimited table → final `.xlsx` with auto-sized columns
 */

use log::info;
use std::path::Path;

use crate::app_config::OutputConfig;
use crate::delimited::{DelimitedFormat, MissingRendering};
use crate::errors::ConversionError;
use crate::spreadsheet;

/// Read the first worksheet of `input` and write it to `output` as a delimited
/// table, rendering missing cells as `missing_token`. Overwrites `output`.
pub fn convert_legacy_to_intermediate(
    input: &Path,
    output: &Path,
    format: &DelimitedFormat,
    missing_token: &str,
) -> Result<(), ConversionError> {
    let table = spreadsheet::read_workbook(input)?;

    format.write_table(&table, output, &MissingRendering::Token(missing_token.to_string()))?;

    info!(
        "Converted {:?} to {:?} ({} rows, {} columns)",
        input,
        output,
        table.row_count(),
        table.column_count()
    );

    Ok(())
}

/// Read the translated delimited table at `input` and write it to `output` as a
/// single-sheet workbook
pub fn convert_intermediate_to_final(
    input: &Path,
    output: &Path,
    format: &DelimitedFormat,
    options: &OutputConfig,
) -> Result<(), ConversionError> {
    let table = format.read_table(input)?;

    spreadsheet::write_workbook(&table, output, options)?;

    info!(
        "Wrote {:?} ({} rows, {} columns)",
        output,
        table.row_count(),
        table.column_count()
    );

    Ok(())
}
