use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::{Amount, AmountError, Conversion};

/// Errors that can occur when reading amounts from csv
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: invalid amount: {source}")]
    InvalidAmount { line: usize, source: AmountError },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    amount: String,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    amount: String,
    text: &'a str,
}

/// Read amounts from a csv file with an `amount` column.
///
/// Amounts are parsed from their text, never through a float.
pub fn read_amounts(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Amount, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            row.amount
                .parse()
                .map_err(|source| CsvError::InvalidAmount { line, source })
        }))
}

/// Write conversions in csv format
pub fn write_conversions<'a>(
    writer: impl io::Write,
    conversions: impl IntoIterator<Item = &'a Conversion>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for conversion in conversions {
        writer.serialize(OutputRow {
            amount: conversion.amount.to_string(),
            text: &conversion.text,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_amounts_exactly() {
        let file = write_csv("amount\n1234\n33333.75\n0.01\n");
        let amounts: Vec<_> = read_amounts(file.path())
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            amounts,
            [
                Amount::from_baht(1234),
                Amount::from_satang(3_333_375),
                Amount::from_satang(1),
            ]
        );
    }

    #[test]
    fn read_with_whitespace() {
        let file = write_csv("amount\n  21 \n");
        let results: Vec<_> = read_amounts(file.path()).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert_eq!(*results[0].as_ref().unwrap(), Amount::from_baht(21));
    }

    #[test]
    fn read_returns_error_for_invalid_amount() {
        let file = write_csv("amount\nabc\n5\n");
        let results: Vec<_> = read_amounts(file.path()).unwrap().collect();
        assert_eq!(results.len(), 2);
        let err = results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidAmount {
                line: 2,
                source: AmountError::Invalid(_)
            }
        ));
        assert!(results[1].is_ok());
    }

    #[test]
    fn read_returns_error_for_missing_column() {
        let file = write_csv("value\n5\n");
        let results: Vec<_> = read_amounts(file.path()).unwrap().collect();
        assert!(matches!(results[0], Err(CsvError::Parse { line: 2, .. })));
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_amounts(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CsvError::Open { .. })));
    }

    #[test]
    fn write_header_and_rows() {
        let conversions = [
            Conversion::new(Amount::from_baht(21)),
            Conversion::new(Amount::from_satang(3_333_375)),
        ];
        let mut out = Vec::new();
        write_conversions(&mut out, &conversions).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "amount,text",
                "21,ยี่สิบเอ็ดบาทถ้วน",
                "33333.75,สามหมื่นสามพันสามร้อยสามสิบสามบาทเจ็ดสิบห้าสตางค์",
            ]
        );
    }
}
