/*!
 * Tests for the intermediate delimited codec
 */

use anyhow::Result;
use std::fs;

use order_translator::delimited::{DelimitedFormat, MissingRendering};
use order_translator::{CellValue, Column, ConversionError, Table};
use crate::common;

fn nan() -> MissingRendering {
    MissingRendering::Token("NaN".to_string())
}

/// Writing with the NaN token and reading back gives the same table
#[test]
fn test_round_trip_withNaNToken_shouldReproduceTable() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("round_trip.csv");
    let table = Table::new(vec![
        Column::new("订单号", vec!["001".into(), "002".into(), "003".into()]),
        Column::new("客户", vec!["张三".into(), CellValue::Missing, "Acme, Inc.".into()]),
        Column::new("备注", vec![CellValue::Missing, "多行\n文本".into(), "a|b".into()]),
    ]);

    let format = DelimitedFormat::default();
    format.write_table(&table, &path, &nan())?;
    let read_back = format.read_table(&path)?;

    assert_eq!(read_back, table);
    assert_eq!(read_back.header().cloned().collect::<Vec<_>>(), vec![
        CellValue::from("订单号"),
        CellValue::from("客户"),
        CellValue::from("备注"),
    ]);
    Ok(())
}

/// The translated stage writes empty fields and reads them back as missing
#[test]
fn test_round_trip_withEmptyRendering_shouldKeepMissing() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("translated.csv");
    let table = Table::new(vec![
        Column::new("Order Number", vec!["001".into()]),
        Column::new("Quantity", vec![CellValue::Missing]),
    ]);

    let format = DelimitedFormat::default();
    format.write_table(&table, &path, &MissingRendering::Empty)?;

    assert_eq!(fs::read_to_string(&path)?, "Order Number|Quantity\n001|\n");
    assert_eq!(format.read_table(&path)?, table);
    Ok(())
}

/// A single-column row with a missing value survives as a row
#[test]
fn test_round_trip_withSingleColumnMissing_shouldKeepRowCount() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("single.csv");
    let table = Table::new(vec![Column::new("备注", vec![CellValue::Missing, "x".into()])]);

    let format = DelimitedFormat::default();
    format.write_table(&table, &path, &MissingRendering::Empty)?;

    assert_eq!(format.read_table(&path)?.row_count(), 2);
    Ok(())
}

#[test]
fn test_read_table_withDuplicateHeaders_shouldMakeUnique() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "dupes.csv", "Name|Name|\n1|2|3\n")?;

    let table = DelimitedFormat::default().read_table(&path)?;

    let names: Vec<CellValue> = table.header().cloned().collect();
    assert_eq!(names, vec![
        CellValue::from("Name"),
        CellValue::from("Name.1"),
        CellValue::from("Unnamed: 2"),
    ]);
    Ok(())
}

#[test]
fn test_read_table_withShortRows_shouldPadWithMissing() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "short.csv", "a|b|c\n1\n1|2|3\n")?;

    let table = DelimitedFormat::default().read_table(&path)?;

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[2].values, vec![CellValue::Missing, CellValue::from("3")]);
    Ok(())
}

#[test]
fn test_read_table_withMissingFile_shouldFailWithReadError() {
    let result = DelimitedFormat::default().read_table("no/such/file.csv");
    assert!(matches!(result, Err(ConversionError::Read { .. })));
}

#[test]
fn test_write_table_intoMissingDirectory_shouldFailWithWriteError() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("missing").join("out.csv");

    let result = DelimitedFormat::default().write_table(&Table::default(), &path, &nan());

    assert!(matches!(result, Err(ConversionError::Write { .. })));
    Ok(())
}

#[test]
fn test_custom_delimiter_shouldBeHonoured() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("tabs.tsv");
    let format = DelimitedFormat {
        delimiter: b'\t',
        na_values: vec!["NULL".to_string()],
    };
    let table = Table::new(vec![
        Column::new("a", vec![CellValue::Missing]),
        Column::new("b", vec!["x|y".into()]),
    ]);

    format.write_table(&table, &path, &MissingRendering::Token("NULL".to_string()))?;

    assert_eq!(fs::read_to_string(&path)?, "a\tb\nNULL\tx|y\n");
    assert_eq!(format.read_table(&path)?, table);
    Ok(())
}
