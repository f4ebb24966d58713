//! Keep/drop prediction over sentence feature rows.
//!
//! The summarizer treats its classifier as a black box behind [`Predictor`]:
//! rows of [`FEATURE_COLUMNS`] values in, one keep decision per row out.
//! [`LinearModel`] is the bundled implementation, a logistic scorer
//! deserialized from the JSON bundle the training side exports. A bundle is
//! validated against the feature schema once at load time, never per request.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::FEATURE_COLUMNS;

/// A keep/drop decision source for sentence feature rows.
///
/// `predict` takes immutable input and no `&mut self`, so one loaded
/// predictor can serve any number of concurrent summarizations.
pub trait Predictor: Send + Sync {
    /// One decision per input row, in input order.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<bool>>;
}

/// A logistic scorer: keep when `sigmoid(intercept + w·x) >= threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Feature names in row order. Must equal [`FEATURE_COLUMNS`]; a bundle
    /// trained against a different schema is rejected at load time.
    pub columns: Vec<String>,

    /// One weight per column.
    pub weights: Vec<f64>,

    pub intercept: f64,

    /// Decision boundary on the scored probability. Bundles that omit it
    /// get 0.5.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl LinearModel {
    /// Reads and validates a JSON model bundle.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let model: Self =
            serde_json::from_reader(reader).map_err(|e| Error::ModelError(e.to_string()))?;
        model.validate()
    }

    /// Loads a JSON model bundle from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| Error::ModelError(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    fn validate(self) -> Result<Self> {
        if self.columns != FEATURE_COLUMNS {
            return Err(Error::SchemaError(format!(
                "bundle columns do not match the {} feature columns",
                FEATURE_COLUMNS.len()
            )));
        }
        if self.weights.len() != self.columns.len() {
            return Err(Error::SchemaError(format!(
                "{} weights for {} columns",
                self.weights.len(),
                self.columns.len()
            )));
        }
        Ok(self)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<bool>> {
        rows.iter()
            .map(|row| {
                if row.len() != self.weights.len() {
                    return Err(Error::SchemaError(format!(
                        "feature row has {} values, model expects {}",
                        row.len(),
                        self.weights.len()
                    )));
                }
                let score: f64 = self
                    .weights
                    .iter()
                    .zip(row)
                    .map(|(weight, value)| weight * value)
                    .sum::<f64>()
                    + self.intercept;
                Ok(sigmoid(score) >= self.threshold)
            })
            .collect()
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<bool>> {
        (**self).predict(rows)
    }
}

/// Keeps every sentence. A stand-in for running the pipeline without a
/// trained bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl Predictor for KeepAll {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<bool>> {
        Ok(vec![true; rows.len()])
    }
}
