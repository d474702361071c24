use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @creates: Parent directory of a file path
    pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        match path.as_ref().parent() {
            Some(parent) => Self::ensure_dir(parent),
            None => Ok(()),
        }
    }

    /// Delete a file, ignoring every failure. Returns whether the file was removed.
    pub fn remove_file_best_effort<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                debug!("Ignoring failure to delete {:?}: {}", path, e);
                false
            }
        }
    }

    /// Classify a file by its extension
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> FileType {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xls" => FileType::LegacyWorkbook,
            "xlsx" | "xlsm" | "xlsb" | "xla" | "xlam" | "ods" => FileType::Workbook,
            "csv" | "txt" | "psv" => FileType::Delimited,
            _ => FileType::Unknown,
        }
    }
}

/// Enum representing different file types
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// Binary Excel 97-2003 workbook
    LegacyWorkbook,
    /// Any other workbook format calamine reads
    Workbook,
    /// Delimited text table
    Delimited,
    /// Unknown file type
    Unknown,
}

impl FileType {
    pub fn is_workbook(&self) -> bool {
        matches!(self, Self::LegacyWorkbook | Self::Workbook)
    }
}
