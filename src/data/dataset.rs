//! Record set loading and permissive CSV parsing.
//!
//! The loader is deliberately forgiving, matching the upstream survey
//! exports: unparseable or missing numeric cells coerce to `NAN` (the chart
//! skips them), short rows are padded, and extra columns are ignored. Only a
//! missing *header* column is a hard error, because then no row can be
//! interpreted at all.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::dimension::{XDimension, YDimension};

/// Header columns every survey export must carry.
const REQUIRED_COLUMNS: [&str; 9] = [
    "id",
    "state",
    "abbr",
    "poverty",
    "age",
    "income",
    "obesity",
    "smokes",
    "healthcare",
];

/// One survey record: a state plus its six numeric measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub state: String,
    pub abbr: String,
    #[serde(serialize_with = "serialize_measure")]
    pub poverty: f64,
    #[serde(serialize_with = "serialize_measure")]
    pub age: f64,
    #[serde(serialize_with = "serialize_measure")]
    pub income: f64,
    #[serde(serialize_with = "serialize_measure")]
    pub obesity: f64,
    #[serde(serialize_with = "serialize_measure")]
    pub smokes: f64,
    #[serde(serialize_with = "serialize_measure")]
    pub healthcare: f64,
}

/// Coerced `NAN` measures serialize as `null`, never as an error.
fn serialize_measure<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        s.serialize_f64(*v)
    } else {
        s.serialize_none()
    }
}

impl Record {
    /// Value of the given X dimension.
    pub fn x_value(&self, dim: XDimension) -> f64 {
        match dim {
            XDimension::Poverty => self.poverty,
            XDimension::Age => self.age,
            XDimension::Income => self.income,
        }
    }

    /// Value of the given Y dimension.
    pub fn y_value(&self, dim: YDimension) -> f64 {
        match dim {
            YDimension::Obesity => self.obesity,
            YDimension::Smokes => self.smokes,
            YDimension::Healthcare => self.healthcare,
        }
    }
}

/// Errors produced while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is empty (no header row)")]
    Empty,
    #[error("header is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// The loaded record set. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one X dimension across all records, in record order.
    pub fn x_values(&self, dim: XDimension) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.x_value(dim))
    }

    /// Values of one Y dimension across all records, in record order.
    pub fn y_values(&self, dim: YDimension) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.y_value(dim))
    }

    /// Read and parse a survey CSV from disk.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_csv(&text)
    }

    /// Parse a survey CSV from text.
    ///
    /// Fields are split on commas; the survey exports never quote fields.
    pub fn parse_csv(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = lines.next().ok_or(DatasetError::Empty)?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let col = |name: &'static str| -> Result<usize, DatasetError> {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        // Resolve all nine up front so a bad header fails before any row work.
        let mut idx = [0usize; REQUIRED_COLUMNS.len()];
        for (i, name) in REQUIRED_COLUMNS.into_iter().enumerate() {
            idx[i] = col(name)?;
        }
        let [id_c, state_c, abbr_c, poverty_c, age_c, income_c, obesity_c, smokes_c, healthcare_c] =
            idx;

        let mut records = Vec::new();
        let mut coerced = 0usize;
        for line in lines {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            let text_cell = |i: usize| cells.get(i).copied().unwrap_or("").to_string();
            let mut num_cell = |i: usize| -> f64 {
                let v = cells
                    .get(i)
                    .and_then(|c| c.parse::<f64>().ok())
                    .unwrap_or(f64::NAN);
                if v.is_nan() {
                    coerced += 1;
                }
                v
            };
            records.push(Record {
                id: text_cell(id_c),
                state: text_cell(state_c),
                abbr: text_cell(abbr_c),
                poverty: num_cell(poverty_c),
                age: num_cell(age_c),
                income: num_cell(income_c),
                obesity: num_cell(obesity_c),
                smokes: num_cell(smokes_c),
                healthcare: num_cell(healthcare_c),
            });
        }
        if coerced > 0 {
            tracing::warn!(
                cells = coerced,
                "non-numeric cells coerced to NaN; affected points will not be drawn"
            );
        }
        Ok(Self { records })
    }
}
