/*!
 * # order-translator
 *
 * Converts a spreadsheet of Chinese-language order data into an English
 * spreadsheet.
 *
 * ## Pipeline
 *
 * 1. The first worksheet of the input workbook (legacy `.xls` included) is written
 *    to a pipe-delimited intermediate file, empty cells as `NaN`.
 * 2. Every header and cell holding CJK ideographs is translated through a remote
 *    provider, retrying timed-out calls; the result goes to a second delimited
 *    file with untranslatable or empty cells left blank.
 * 3. The translated table is written to an `.xlsx` workbook with every column
 *    sized to its widest value.
 * 4. Both intermediate files are deleted.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `table`: In-memory dataset with an explicit missing marker
 * - `delimited`: Intermediate delimited codec
 * - `spreadsheet`: Workbook import and export
 * - `conversion`: The two format-conversion stages
 * - `translation`: Per-value translation with retry, caching and table translation
 * - `providers`: Remote translation clients (Google Translate, mock)
 * - `app_controller`: Pipeline driver
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod conversion;
pub mod delimited;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod spreadsheet;
pub mod table;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, PipelineReport};
pub use errors::{AppError, ConversionError, ProviderError, TranslationError};
pub use table::{CellValue, Column, Table};
pub use translation::{TranslationResult, TranslationService};
