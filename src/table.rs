use crate::error::{MergeError, MergeResult};
use crate::{SERIES_COLUMN, TIME_COLUMN};
use std::collections::HashMap;

/// A parsed statistics export: the header fields with their positions and
/// the data rows as raw string cells, in input order.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub index: HashMap<String, usize>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse comma-delimited text with a header line and standard quoting.
    /// The header must name the series and time columns, and every data row
    /// must have as many cells as the header.
    pub fn from_csv(raw: &str) -> MergeResult<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(raw.as_bytes());
        let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }
        let table = Table {
            columns,
            index,
            rows,
        };
        table.column(SERIES_COLUMN)?;
        table.column(TIME_COLUMN)?;
        Ok(table)
    }

    /// Position of a required column, MissingColumn when absent.
    pub fn column(&self, name: &'static str) -> MergeResult<usize> {
        match self.index.get(name) {
            Some(&at) => Ok(at),
            None => Err(MergeError::MissingColumn(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let t = Table::from_csv("resolver,ts,queries\ndns1,2023-01-01,10\ndns2,2023-01-01,20\n")
            .unwrap();
        assert_eq!(t.columns, vec!["resolver", "ts", "queries"]);
        assert_eq!(t.index["resolver"], 0);
        assert_eq!(t.index["ts"], 1);
        assert_eq!(t.index["queries"], 2);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0], vec!["dns1", "2023-01-01", "10"]);
    }

    #[test]
    fn keeps_quoted_cells_whole() {
        let t = Table::from_csv("resolver,ts,note\ndns1,2023-01-01,\"slow, spiky\"\n").unwrap();
        assert_eq!(t.rows[0][2], "slow, spiky");
    }

    #[test]
    fn rejects_missing_required_columns() {
        let err = Table::from_csv("foo,bar\n1,2\n").unwrap_err();
        assert!(matches!(err, MergeError::MissingColumn(SERIES_COLUMN)));
        let err = Table::from_csv("resolver,bar\n1,2\n").unwrap_err();
        assert!(matches!(err, MergeError::MissingColumn(TIME_COLUMN)));
    }

    #[test]
    fn rejects_rows_shorter_or_longer_than_the_header() {
        let err = Table::from_csv("resolver,ts,queries\ndns1,2023-01-01\n").unwrap_err();
        assert!(matches!(err, MergeError::MalformedRow(_)));
        let err = Table::from_csv("resolver,ts\ndns1,2023-01-01,10\n").unwrap_err();
        assert!(matches!(err, MergeError::MalformedRow(_)));
    }

    #[test]
    fn rejects_headerless_input() {
        let err = Table::from_csv("").unwrap_err();
        assert!(matches!(err, MergeError::MissingColumn(_)));
    }
}
