/*!
 * Whole-table translation.
 *
 * Every column name and every non-missing cell is passed through the
 * [`TranslationService`] one at a time, in column order. Missing cells are left
 * alone and never reach the provider. A failed value becomes a missing cell; it
 * never stops the table.
 */

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::Path;

use super::core::{TranslationResult, TranslationService};
use crate::delimited::{DelimitedFormat, MissingRendering};
use crate::errors::ConversionError;
use crate::providers::Provider;
use crate::table::{deduplicate_names, CellValue, Table};

/// Counts of what happened to each value of a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableTranslationStats {
    /// Values the provider translated
    pub translated: usize,
    /// Values without CJK text, kept as they were
    pub unchanged: usize,
    /// Values the provider failed on, now missing
    pub unavailable: usize,
    /// Missing values that were never sent
    pub skipped_missing: usize,
}

impl TableTranslationStats {
    fn record(&mut self, result: &TranslationResult) {
        match result {
            TranslationResult::Translated(_) => self.translated += 1,
            TranslationResult::Unchanged(_) => self.unchanged += 1,
            TranslationResult::Unavailable => self.unavailable += 1,
        }
    }

    /// Total number of values visited
    pub fn total(&self) -> usize {
        self.translated + self.unchanged + self.unavailable + self.skipped_missing
    }
}

/// Applies a translation service to whole tables
pub struct TableTranslator<'a, P: Provider> {
    service: &'a TranslationService<P>,
    progress: ProgressBar,
}

impl<'a, P: Provider> TableTranslator<'a, P> {
    /// Translator without visible progress
    pub fn new(service: &'a TranslationService<P>) -> Self {
        Self {
            service,
            progress: ProgressBar::hidden(),
        }
    }

    /// Show a progress bar on stderr while translating
    pub fn with_progress_bar(mut self) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} values ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.progress = ProgressBar::new(0);
        self.progress.set_style(style.progress_chars("█▓▒░"));
        self
    }

    /// Translate column names and cells of `table` in place
    pub async fn translate_table(&self, mut table: Table) -> (Table, TableTranslationStats) {
        let mut stats = TableTranslationStats::default();
        self.progress.set_length(table.cell_count() as u64);
        self.progress.set_message("Translating");

        for column in table.columns_mut() {
            column.name = self.translate_cell(&column.name, &mut stats).await;

            for cell in column.values.iter_mut() {
                *cell = self.translate_cell(cell, &mut stats).await;
            }
        }

        // Distinct source names can share a translation
        let names = deduplicate_names(table.header().cloned().collect());
        for (column, name) in table.columns_mut().iter_mut().zip(names) {
            column.name = name;
        }

        self.progress.finish_and_clear();

        (table, stats)
    }

    async fn translate_cell(&self, cell: &CellValue, stats: &mut TableTranslationStats) -> CellValue {
        self.progress.inc(1);

        let Some(text) = cell.as_text() else {
            stats.skipped_missing += 1;
            return CellValue::Missing;
        };

        let result = self.service.translate(text).await;
        stats.record(&result);
        result.into_cell()
    }

    /// Read `input`, translate it and write it to `output` with missing cells left empty
    pub async fn translate_file(
        &self,
        input: &Path,
        output: &Path,
        format: &DelimitedFormat,
    ) -> Result<TableTranslationStats, ConversionError> {
        let table = format.read_table(input)?;
        let (translated, stats) = self.translate_table(table).await;
        format.write_table(&translated, output, &MissingRendering::Empty)?;

        info!(
            "Translated {} values: {} translated, {} unchanged, {} unavailable, {} missing",
            stats.total(),
            stats.translated,
            stats.unchanged,
            stats.unavailable,
            stats.skipped_missing
        );

        Ok(stats)
    }
}
