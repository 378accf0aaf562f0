//! Score File Loader Module
//! Reads the score CSV with Polars and validates it into a `ScoreTable`.

use crate::data::record::{ScoreRecord, ScoreValue};
use clap::ValueEnum;
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Columns every score file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "quote", "current_score", "past_score"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Score file has no rows")]
    Empty,
    #[error("Score file is missing column `{0}`")]
    MissingColumn(String),
    #[error("Row {row} has no value in column `{column}`")]
    MalformedRow { row: usize, column: String },
    #[error("Score fetch ended without a result")]
    Disconnected,
}

/// How the "latest" row is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RowSelection {
    /// Trust file order: the first row is the latest.
    #[default]
    First,
    /// Greatest `date` label, compared as text (ISO-8601 dates sort correctly).
    LatestDate,
}

/// Validated rows of one fetch of the score file.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    df: DataFrame,
}

impl ScoreTable {
    /// Validate a DataFrame: all required columns present and at least one row.
    pub fn from_dataframe(df: DataFrame) -> Result<Self, LoaderError> {
        for column in REQUIRED_COLUMNS {
            if df.column(column).is_err() {
                return Err(LoaderError::MissingColumn(column.to_string()));
            }
        }
        if df.height() == 0 {
            return Err(LoaderError::Empty);
        }
        Ok(Self { df })
    }

    /// Build a table from records already in memory.
    pub fn from_records(records: &[ScoreRecord]) -> Result<Self, LoaderError> {
        let text_column = |name: &str, values: Vec<String>| Column::new(name.into(), values);
        let df = DataFrame::new(vec![
            text_column("date", records.iter().map(|r| r.date.clone()).collect()),
            text_column("quote", records.iter().map(|r| r.quote.clone()).collect()),
            text_column(
                "current_score",
                records.iter().map(|r| r.current_score.to_text()).collect(),
            ),
            text_column(
                "past_score",
                records.iter().map(|r| r.past_score.to_text()).collect(),
            ),
        ])?;
        Self::from_dataframe(df)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get a reference to the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Read one row. A null cell in any required column is a malformed row.
    pub fn record(&self, row: usize) -> Result<ScoreRecord, LoaderError> {
        let cell = |column: &str| -> Result<ScoreValue, LoaderError> {
            let value = self.df.column(column)?.get(row)?;
            cell_value(value).ok_or_else(|| LoaderError::MalformedRow {
                row,
                column: column.to_string(),
            })
        };

        Ok(ScoreRecord {
            date: cell("date")?.to_text(),
            quote: cell("quote")?.to_text(),
            current_score: cell("current_score")?,
            past_score: cell("past_score")?,
        })
    }

    /// Row index of the latest reading under the given selection.
    pub fn latest_index(&self, selection: RowSelection) -> Result<usize, LoaderError> {
        match selection {
            RowSelection::First => Ok(0),
            RowSelection::LatestDate => {
                let dates = self.df.column("date")?;
                let mut best: Option<(usize, String)> = None;
                for row in 0..self.df.height() {
                    let Some(date) = cell_value(dates.get(row)?).map(|v| v.to_text()) else {
                        continue;
                    };
                    // Strictly greater keeps the earliest row on ties
                    let is_later = best.as_ref().map_or(true, |(_, d)| date > *d);
                    if is_later {
                        best = Some((row, date));
                    }
                }
                best.map(|(row, _)| row).ok_or(LoaderError::MalformedRow {
                    row: 0,
                    column: "date".to_string(),
                })
            }
        }
    }

    /// The latest record under the given selection.
    pub fn latest(&self, selection: RowSelection) -> Result<ScoreRecord, LoaderError> {
        self.record(self.latest_index(selection)?)
    }

    /// `current_score` of every row in file order, parsed leniently.
    pub fn current_scores(&self) -> Vec<f64> {
        let Ok(column) = self.df.column("current_score") else {
            return Vec::new();
        };
        (0..self.df.height())
            .map(|row| {
                column
                    .get(row)
                    .ok()
                    .and_then(cell_value)
                    .map(|v| v.parse_float())
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

/// Convert a Polars cell into a score value. `None` for null.
fn cell_value(value: AnyValue<'_>) -> Option<ScoreValue> {
    let number = match value {
        AnyValue::Null => return None,
        AnyValue::String(s) => return Some(ScoreValue::Text(s.to_string())),
        AnyValue::StringOwned(s) => return Some(ScoreValue::Text(s.to_string())),
        AnyValue::Float64(v) => v,
        AnyValue::Float32(v) => v as f64,
        AnyValue::Int64(v) => v as f64,
        AnyValue::Int32(v) => v as f64,
        AnyValue::Int16(v) => v as f64,
        AnyValue::Int8(v) => v as f64,
        AnyValue::UInt64(v) => v as f64,
        AnyValue::UInt32(v) => v as f64,
        AnyValue::UInt16(v) => v as f64,
        AnyValue::UInt8(v) => v as f64,
        other => return Some(ScoreValue::Text(other.to_string().trim_matches('"').to_string())),
    };
    Some(ScoreValue::Number(number))
}

/// Read and validate the score file.
///
/// Every column is read as text so a cell like `30.0` is shown as written.
pub fn fetch_scores(path: &Path) -> Result<ScoreTable, LoaderError> {
    if matches!(std::fs::metadata(path), Ok(meta) if meta.len() == 0) {
        return Err(LoaderError::Empty);
    }

    let result = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lazy| lazy.collect());

    let df = match result {
        Ok(df) => df,
        Err(PolarsError::NoData(_)) => return Err(LoaderError::Empty),
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "score file read"
    );
    ScoreTable::from_dataframe(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn test_fetch_keeps_cell_text() {
        let file = write_csv(
            "date,quote,current_score,past_score\n2024-01-01,Buy,42.5,30.0\n2023-12-31,Hold,30.0,12\n",
        );
        let table = fetch_scores(file.path()).expect("fetch");
        assert_eq!(table.len(), 2);

        let record = table.latest(RowSelection::First).expect("latest");
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.quote, "Buy");
        assert_eq!(record.current_score, ScoreValue::Text("42.5".into()));
        assert_eq!(record.past_score.to_text(), "30.0");
    }

    #[test]
    fn test_column_order_is_free() {
        let file = write_csv("past_score,extra,quote,date,current_score\n1,x,Sell,2024-02-02,-5\n");
        let record = fetch_scores(file.path())
            .and_then(|t| t.latest(RowSelection::First))
            .expect("record");
        assert_eq!(record.date, "2024-02-02");
        assert_eq!(record.current_score.parse_float(), -5.0);
        assert_eq!(record.past_score.parse_float(), 1.0);
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = write_csv("date,quote,current_score,past_score\n");
        assert!(matches!(fetch_scores(file.path()), Err(LoaderError::Empty)));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let file = write_csv("");
        assert!(matches!(fetch_scores(file.path()), Err(LoaderError::Empty)));
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("date,quote,current_score\n2024-01-01,Buy,42.5\n");
        match fetch_scores(file.path()) {
            Err(LoaderError::MissingColumn(column)) => assert_eq!(column, "past_score"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_csv_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = fetch_scores(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(LoaderError::CsvError(_))));
    }

    #[test]
    fn test_null_cell_is_malformed() {
        let file = write_csv("date,quote,current_score,past_score\n2024-01-01,,42.5,30\n");
        let table = fetch_scores(file.path()).expect("fetch");
        match table.latest(RowSelection::First) {
            Err(LoaderError::MalformedRow { row, column }) => {
                assert_eq!(row, 0);
                assert_eq!(column, "quote");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_typed_dataframe_values() {
        let df = polars::df!(
            "date" => ["2024-01-01"],
            "quote" => ["Buy"],
            "current_score" => [42.5f64],
            "past_score" => [30i64],
        )
        .expect("df");
        let record = ScoreTable::from_dataframe(df)
            .and_then(|t| t.latest(RowSelection::First))
            .expect("record");
        assert_eq!(record.current_score, ScoreValue::Number(42.5));
        assert_eq!(record.past_score, ScoreValue::Number(30.0));
        assert_eq!(record.current_score.to_text(), "42.5");
    }

    #[test]
    fn test_latest_date_selection() {
        let table = ScoreTable::from_records(&[
            ScoreRecord::new("2024-01-02", "Hold", "10", "5"),
            ScoreRecord::new("2024-01-05", "Sell", "60", "10"),
            ScoreRecord::new("2024-01-05", "Buy", "-80", "60"),
            ScoreRecord::new("2023-12-30", "Buy", "-90", "0"),
        ])
        .expect("table");

        assert_eq!(table.latest_index(RowSelection::First).expect("first"), 0);
        assert_eq!(table.latest_index(RowSelection::LatestDate).expect("latest"), 1);
        assert_eq!(table.latest(RowSelection::LatestDate).expect("rec").quote, "Sell");
    }

    #[test]
    fn test_current_scores_history() {
        let table = ScoreTable::from_records(&[
            ScoreRecord::new("2024-01-03", "Hold", "12.5", "5"),
            ScoreRecord::new("2024-01-02", "Hold", "N/A", "5"),
            ScoreRecord::new("2024-01-01", "Hold", 5.0, "0"),
        ])
        .expect("table");
        let scores = table.current_scores();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 12.5);
        assert!(scores[1].is_nan());
        assert_eq!(scores[2], 5.0);
    }
}
