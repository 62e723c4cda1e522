//! Dataset loader - delimited file with a header row
//!
//! The label column (usually "Name") is kept aside as row labels; every other
//! column is parsed as a numeric series aligned by row index.

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::LoadError;

/// Where and how to read the dataset
#[derive(Debug, Clone)]
pub struct DatasetSource {
    pub path: PathBuf,
    pub label_column: String,
    pub delimiter: u8,
}

/// A named numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Series>,
    row_labels: Vec<String>,
    loaded_at: DateTime<Local>,
}

impl Dataset {
    /// Read the dataset at `source.path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(source: &DatasetSource) -> Result<Option<Self>, LoadError> {
        let path = source.path.as_path();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Dataset {:?} not found", path);
                return Ok(None);
            }
            Err(e) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(source.delimiter)
            .trim(csv::Trim::All)
            .from_reader(file);

        let csv_err = |e: csv::Error| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        // Without a matching header the first column is the label column
        let label_index = match headers.iter().position(|h| h == source.label_column) {
            Some(idx) => Some(idx),
            None => {
                debug!(
                    "No '{}' column in {:?}, using first column as labels",
                    source.label_column, path
                );
                (!headers.is_empty()).then_some(0)
            }
        };

        let mut columns: Vec<(usize, Series)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != label_index)
            .map(|(i, name)| {
                (
                    i,
                    Series {
                        name: name.to_string(),
                        values: Vec::new(),
                    },
                )
            })
            .collect();

        if columns.is_empty() {
            return Err(LoadError::NoColumns(path.to_path_buf()));
        }

        let mut row_labels = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;
            if let Some(idx) = label_index {
                row_labels.push(record.get(idx).unwrap_or_default().to_string());
            }
            for (idx, series) in columns.iter_mut() {
                let cell = record.get(*idx).unwrap_or_default();
                series.values.push(parse_cell(cell, &series.name, row)?);
            }
        }

        let columns: Vec<Series> = columns.into_iter().map(|(_, s)| s).collect();
        info!(
            "Loaded {:?}: {} rows, {} columns",
            path,
            columns.first().map(|c| c.values.len()).unwrap_or(0),
            columns.len()
        );

        Ok(Some(Self {
            columns,
            row_labels,
            loaded_at: Local::now(),
        }))
    }

    /// Plottable column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Row count, taken from the first column
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }
}

/// Empty cells become NaN so the plot leaves a gap
fn parse_cell(cell: &str, column: &str, row: usize) -> Result<f64, LoadError> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>().map_err(|_| LoadError::Parse {
        column: column.to_string(),
        row: row + 1,
        value: cell.to_string(),
    })
}

impl DatasetSource {
    pub fn new(path: impl AsRef<Path>, label_column: impl Into<String>, delimiter: u8) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            label_column: label_column.into(),
            delimiter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn source(path: &Path) -> DatasetSource {
        DatasetSource::new(path, "Name", b',')
    }

    #[test]
    fn test_label_column_is_excluded() {
        let file = write_csv("Name,A,B\nr1,1,10\nr2,2,20\nr3,3,30\n");
        let data = Dataset::load(&source(file.path())).unwrap().unwrap();

        assert_eq!(data.columns().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(data.len(), 3);
        assert_eq!(data.series("B").unwrap().values, vec![10.0, 20.0, 30.0]);
        assert_eq!(data.row_labels(), &["r1", "r2", "r3"]);
        assert!(data.loaded_at() <= Local::now());
    }

    #[test]
    fn test_label_column_can_be_anywhere() {
        let file = write_csv("A,Name,B\n1,x,2\n");
        let data = Dataset::load(&source(file.path())).unwrap().unwrap();
        assert_eq!(data.columns().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(data.series("Name").is_none());
    }

    #[test]
    fn test_first_column_is_label_when_name_is_absent() {
        let file = write_csv("Frame,A,B\nf1,1,2\nf2,3,4\n");
        let data = Dataset::load(&source(file.path())).unwrap().unwrap();
        assert_eq!(data.columns().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(data.series("Frame").is_none());
        assert_eq!(data.row_labels(), &["f1", "f2"]);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::load(&source(&dir.path().join("absent.csv"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_non_numeric_cell_reports_position() {
        let file = write_csv("Name,A\nr1,1\nr2,oops\n");
        match Dataset::load(&source(file.path())) {
            Err(LoadError::Parse { column, row, value }) => {
                assert_eq!(column, "A");
                assert_eq!(row, 2);
                assert_eq!(value, "oops");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_cell_becomes_nan() {
        let file = write_csv("Name,A\nr1, \nr2,4\n");
        let data = Dataset::load(&source(file.path())).unwrap().unwrap();
        let values = &data.series("A").unwrap().values;
        assert!(values[0].is_nan());
        assert_eq!(values[1], 4.0);
    }

    #[test]
    fn test_only_label_column_is_rejected() {
        let file = write_csv("Name\nr1\n");
        assert!(matches!(
            Dataset::load(&source(file.path())),
            Err(LoadError::NoColumns(_))
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let file = write_csv("Name;A\nr1;1.5\n");
        let src = DatasetSource::new(file.path(), "Name", b';');
        let data = Dataset::load(&src).unwrap().unwrap();
        assert_eq!(data.series("A").unwrap().values, vec![1.5]);
    }
}
