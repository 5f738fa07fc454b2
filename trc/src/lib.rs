#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod header;
mod samples;

use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use header::PREAMBLE_LINES;

/// One tracked physical point, named in file order. Index `i` in the name
/// list maps to sample columns `3*i + 1 .. 3*i + 4` (0-based, after time).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerName(String);

impl MarkerName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully-loaded TRC marker file. Immutable once parsed.
#[derive(Clone, Serialize, Deserialize)]
pub struct TrcFile {
    pub marker_names: Vec<MarkerName>,
    // Per time sample: [time, x1, y1, z1, x2, y2, z2, ...]. Rectangular, but
    // deliberately not cross-checked against marker_names here; callers doing
    // column arithmetic must validate that relation themselves.
    rows: Vec<Vec<f64>>,
}

impl TrcFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs_err::read_to_string(path.as_ref())?;
        let file = Self::parse(&contents)?;
        info!(
            "Loaded {:?}: {} markers, {} samples",
            path.as_ref(),
            file.marker_names.len(),
            file.rows.len()
        );
        Ok(file)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let marker_names = header::parse_marker_names(contents)?;
        let rows = samples::parse_rows(contents)?;
        Ok(Self { marker_names, rows })
    }

    pub fn num_samples(&self) -> usize {
        self.rows.len()
    }

    /// Columns per sample row: 1 time column plus 3 per marker when the file
    /// is well-formed.
    pub fn num_columns(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn row(&self, n: usize) -> &[f64] {
        &self.rows[n]
    }

    /// The time column, in seconds, one entry per sample.
    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r[0]).collect()
    }
}
