//! Consumption history import from distributor CSV exports.
//!
//! Expected headers are `reference_month,consumption_kwh`. When months are present the
//! readings are returned most-recent-first whatever the file order; without a month
//! column the file order is kept as-is.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read consumption export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid consumption CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a YYYY-MM reference month")]
    InvalidMonth { row: usize, value: String },
    #[error("row {row}: reference month missing while other rows carry one")]
    MissingMonth { row: usize },
    #[error("reference month {0} appears more than once")]
    DuplicateMonth(String),
    #[error("consumption export contains no readings")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ConsumptionRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    reference_month: Option<String>,
    consumption_kwh: f64,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_month(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.with_day(1);
    }

    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok()
}

pub struct HistoryImporter;

impl HistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<f64>, HistoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut dated: Vec<(NaiveDate, f64)> = Vec::new();
        let mut undated: Vec<f64> = Vec::new();
        let mut seen: HashSet<NaiveDate> = HashSet::new();

        for (index, record) in csv_reader.deserialize::<ConsumptionRow>().enumerate() {
            let row = record?;
            let row_number = index + 1;

            match row.reference_month {
                Some(raw) => {
                    if !undated.is_empty() {
                        return Err(HistoryImportError::MissingMonth {
                            row: row_number - undated.len(),
                        });
                    }
                    let month = parse_month(&raw).ok_or_else(|| HistoryImportError::InvalidMonth {
                        row: row_number,
                        value: raw.clone(),
                    })?;
                    if !seen.insert(month) {
                        return Err(HistoryImportError::DuplicateMonth(
                            month.format("%Y-%m").to_string(),
                        ));
                    }
                    dated.push((month, row.consumption_kwh));
                }
                None => {
                    if !dated.is_empty() {
                        return Err(HistoryImportError::MissingMonth { row: row_number });
                    }
                    undated.push(row.consumption_kwh);
                }
            }
        }

        if dated.is_empty() && undated.is_empty() {
            return Err(HistoryImportError::Empty);
        }

        if dated.is_empty() {
            return Ok(undated);
        }

        dated.sort_by(|left, right| right.0.cmp(&left.0));
        Ok(dated.into_iter().map(|(_, kwh)| kwh).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn import(csv: &str) -> Result<Vec<f64>, HistoryImportError> {
        HistoryImporter::from_reader(Cursor::new(csv.as_bytes().to_vec()))
    }

    #[test]
    fn orders_dated_rows_most_recent_first() {
        let history = import(
            "reference_month,consumption_kwh\n2025-01,100\n2025-03,300\n2024-12,50\n2025-02,200\n",
        )
        .expect("import succeeds");

        assert_eq!(history, vec![300.0, 200.0, 100.0, 50.0]);
    }

    #[test]
    fn keeps_file_order_without_months() {
        let history = import("consumption_kwh\n3878\n9760\n5976\n").expect("import succeeds");

        assert_eq!(history, vec![3878.0, 9760.0, 5976.0]);
    }

    #[test]
    fn accepts_full_dates_as_months() {
        let history = import("reference_month,consumption_kwh\n2025-01-15,10\n2025-02-01,20\n")
            .expect("import succeeds");

        assert_eq!(history, vec![20.0, 10.0]);
    }

    #[test]
    fn rejects_duplicate_months() {
        let error = import("reference_month,consumption_kwh\n2025-01,10\n2025-01-20,20\n")
            .expect_err("duplicate month");

        assert!(matches!(error, HistoryImportError::DuplicateMonth(ref month) if month == "2025-01"));
    }

    #[test]
    fn rejects_unparseable_months() {
        let error = import("reference_month,consumption_kwh\njaneiro,10\n").expect_err("bad month");

        assert!(matches!(error, HistoryImportError::InvalidMonth { row: 1, .. }));
    }

    #[test]
    fn rejects_mixed_dated_and_undated_rows() {
        let error = import("reference_month,consumption_kwh\n2025-01,10\n,20\n")
            .expect_err("missing month");

        assert!(matches!(error, HistoryImportError::MissingMonth { row: 2 }));
    }

    #[test]
    fn rejects_empty_exports() {
        let error = import("reference_month,consumption_kwh\n").expect_err("empty");

        assert!(matches!(error, HistoryImportError::Empty));
    }

    #[test]
    fn surfaces_non_numeric_readings_as_csv_errors() {
        let error = import("consumption_kwh\nmuito\n").expect_err("not a number");

        assert!(matches!(error, HistoryImportError::Csv(_)));
    }
}
