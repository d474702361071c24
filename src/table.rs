/*!
 * In-memory tabular dataset shared by every pipeline stage.
 *
 * A `Table` is an ordered list of named columns of equal length. Each cell is
 * either text or the missing marker; nothing else survives the spreadsheet and
 * delimited readers.
 */

use std::collections::HashSet;
use std::fmt;

/// A single cell (or column name) value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    /// Text content, possibly empty
    Text(String),
    /// Absent value, distinct from empty text
    Missing,
}

impl CellValue {
    /// Build a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing => None,
        }
    }

    /// Text rendering of the cell; missing renders as an empty string
    pub fn render(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    /// Number of characters in the rendered cell
    pub fn display_len(&self) -> usize {
        self.render().chars().count()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

/// One named column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column header
    pub name: CellValue,
    /// Cells in row order
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<CellValue>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Width needed to show the header and every cell, before padding
    pub fn max_display_len(&self) -> usize {
        self.values
            .iter()
            .map(CellValue::display_len)
            .chain(std::iter::once(self.name.display_len()))
            .max()
            .unwrap_or(0)
    }
}

/// Rectangular dataset of named columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns; all columns must have the same length
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|pair| pair[0].values.len() == pair[1].values.len()),
            "table columns must be the same length"
        );
        Self { columns }
    }

    /// Build a table from a header and row-major records.
    ///
    /// Short rows are padded with missing cells; extra fields are dropped, so
    /// callers that must reject ragged input check row lengths first.
    pub fn from_rows(header: Vec<CellValue>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.values.push(cells.next().unwrap_or(CellValue::Missing));
            }
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order
    pub fn header(&self) -> impl Iterator<Item = &CellValue> {
        self.columns.iter().map(|column| &column.name)
    }

    /// Cells of one row, in column order
    pub fn row(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.columns.iter().map(move |column| &column.values[index])
    }

    /// Find a column by its text name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name.as_text() == Some(name))
    }

    /// Total number of header and body cells
    pub fn cell_count(&self) -> usize {
        self.column_count() * (self.row_count() + 1)
    }
}

/// Turn raw header cells into unique column names.
///
/// Empty or missing names at position `i` become `Unnamed: i`; repeated names
/// get `.1`, `.2`, ... appended, skipping any suffix already in use.
pub fn normalize_header(raw: Vec<CellValue>) -> Vec<CellValue> {
    let named: Vec<CellValue> = raw
        .into_iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            CellValue::Text(text) if !text.is_empty() => CellValue::Text(text),
            _ => CellValue::Text(format!("Unnamed: {}", index)),
        })
        .collect();

    deduplicate_names(named)
}

/// Make repeated text names unique with `.1`, `.2`, ... suffixes, skipping any
/// suffix already in use. Missing names are left missing.
pub fn deduplicate_names(names: Vec<CellValue>) -> Vec<CellValue> {
    let mut seen: HashSet<String> = names
        .iter()
        .filter_map(|name| name.as_text().map(str::to_string))
        .collect();
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut result = Vec::with_capacity(names.len());

    for cell in names {
        if cell.is_missing() {
            result.push(cell);
            continue;
        }
        let name = cell.render().to_string();
        if used.insert(name.clone()) {
            result.push(cell);
            continue;
        }

        let mut suffix = 1;
        let unique = loop {
            let candidate = format!("{}.{}", name, suffix);
            if !seen.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        seen.insert(unique.clone());
        used.insert(unique.clone());
        result.push(CellValue::Text(unique));
    }

    result
}
