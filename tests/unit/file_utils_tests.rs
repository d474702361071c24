/*!
 * Tests for file utility functions
 */

use anyhow::Result;

use order_translator::file_utils::{FileManager, FileType};
use crate::common;

#[test]
fn test_file_exists_withFileAndDirectory_shouldOnlyAcceptFiles() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let file = common::create_test_file(dir.path(), "orders.csv", "a|b\n")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(dir.path()));
    assert!(!FileManager::file_exists(dir.path().join("absent.csv")));
    Ok(())
}

#[test]
fn test_ensure_parent_dir_withNestedPath_shouldCreateDirectories() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let output = dir.path().join("exports").join("2024").join("English_Order_Export.xlsx");

    FileManager::ensure_parent_dir(&output)?;

    assert!(dir.path().join("exports").join("2024").is_dir());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_ensure_parent_dir_withBareFileName_shouldSucceed() -> Result<()> {
    FileManager::ensure_parent_dir("English_Order_Export.xlsx")?;
    Ok(())
}

#[test]
fn test_remove_file_best_effort_shouldReportRemoval() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let file = common::create_test_file(dir.path(), "CSV_Order_Export.csv", "x\n")?;

    assert!(FileManager::remove_file_best_effort(&file));
    assert!(!file.exists());
    // Second attempt finds nothing and does not fail
    assert!(!FileManager::remove_file_best_effort(&file));
    // A directory cannot be removed as a file; the failure is swallowed
    assert!(!FileManager::remove_file_best_effort(dir.path()));
    Ok(())
}

#[test]
fn test_detect_file_type_withVariousExtensions() {
    assert_eq!(FileManager::detect_file_type("Order_Export.xls"), FileType::LegacyWorkbook);
    assert_eq!(FileManager::detect_file_type("Order_Export.XLS"), FileType::LegacyWorkbook);
    assert_eq!(FileManager::detect_file_type("orders.xlsx"), FileType::Workbook);
    assert_eq!(FileManager::detect_file_type("orders.ods"), FileType::Workbook);
    assert_eq!(FileManager::detect_file_type("Eng_Order_Export.csv"), FileType::Delimited);
    assert_eq!(FileManager::detect_file_type("orders"), FileType::Unknown);

    assert!(FileType::LegacyWorkbook.is_workbook());
    assert!(!FileType::Delimited.is_workbook());
}
