//! Raw table access.
//!
//! The radiative-transfer runs ship as one columnar text table per geometry
//! (`shell.txt`, `cloudy.txt`, `dusty.txt`): a header row naming the columns
//! (`lambda`, `tau`, `tau_att_c`, `tau_att_h`, `f(sca)_c`, ...), then one
//! whitespace-separated numeric row per (wavelength, optical depth, dust
//! type) sample.
//!
//! `TableSource` is the collaborator seam: the model layer only ever sees a
//! [`ColumnTable`], never a path. `DirTableSource` is the shipped filesystem
//! implementation; tests substitute in-memory sources.

use std::fs;
use std::path::PathBuf;

use crate::error::{TableError, TableResult};
use crate::selection::Geometry;

/// A parsed columnar table: named columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ColumnTable {
    /// Build from pre-assembled columns. Column lengths must agree.
    pub fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> TableResult<Self> {
        if names.len() != columns.len() {
            return Err(TableError::ShapeMismatch {
                what: "column count",
                expected: names.len(),
                actual: columns.len(),
            });
        }
        if let Some(first) = columns.first() {
            for col in &columns[1..] {
                if col.len() != first.len() {
                    return Err(TableError::ShapeMismatch {
                        what: "column length",
                        expected: first.len(),
                        actual: col.len(),
                    });
                }
            }
        }
        Ok(Self { names, columns })
    }

    /// Parse columnar text: a header row of column names, then numeric rows.
    /// Blank lines and `#` comment lines are skipped.
    pub fn parse_text(text: &str) -> TableResult<Self> {
        let mut names: Option<Vec<String>> = None;
        let mut columns: Vec<Vec<f64>> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match &names {
                None => {
                    columns = vec![Vec::new(); tokens.len()];
                    names = Some(tokens.iter().map(|s| s.to_string()).collect());
                }
                Some(header) => {
                    if tokens.len() != header.len() {
                        return Err(TableError::Parse {
                            line: idx + 1,
                            message: format!(
                                "expected {} fields, got {}",
                                header.len(),
                                tokens.len()
                            ),
                        });
                    }
                    for (col, tok) in columns.iter_mut().zip(&tokens) {
                        let v: f64 = tok.parse().map_err(|_| TableError::Parse {
                            line: idx + 1,
                            message: format!("not a number: '{tok}'"),
                        })?;
                        col.push(v);
                    }
                }
            }
        }

        match names {
            Some(names) => Ok(Self { names, columns }),
            None => Err(TableError::Parse {
                line: 0,
                message: "empty table: no header row".to_string(),
            }),
        }
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Look up a column by name. The table itself does not know which
    /// geometry it was loaded for, so a miss is reported as `None` and the
    /// caller attaches the selection context to the resulting error.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }
}

/// Source of raw geometry tables. One call per model construction; the core
/// never retries (a missing or corrupt table is a fatal configuration error).
pub trait TableSource {
    fn load(&self, geometry: Geometry) -> TableResult<ColumnTable>;
}

/// Loads `{dir}/{geometry}.txt` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirTableSource {
    dir: PathBuf,
}

impl DirTableSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TableSource for DirTableSource {
    fn load(&self, geometry: Geometry) -> TableResult<ColumnTable> {
        let path = self.dir.join(format!("{}.txt", geometry.file_stem()));
        let text = fs::read_to_string(&path).map_err(|e| TableError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        ColumnTable::parse_text(&text)
    }
}
