//! Review Data Loader Module
//! Reads the review CSV with Polars, renames columns to the canonical schema
//! and caches the normalized dataset for the lifetime of the process.

use super::normalizer;
use super::record::{Dataset, RawReview};
use once_cell::sync::Lazy;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Source column → canonical column.
pub const COLUMN_RENAMES: [(&str, &str); 6] = [
    ("app_name", "platform"),
    ("review", "review"),
    ("label", "sentiment"),
    ("at", "date"),
    ("score", "score"),
    ("stemming", "stemming"),
];

static DATASET_CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<Dataset>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// Load the dataset at `path`, reusing the cached copy if this path was
/// already loaded. There is no invalidation: a changed file is only seen
/// after a restart.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<Dataset>, LoaderError> {
    let path = path.as_ref();

    let mut cache = DATASET_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(dataset) = cache.get(path) {
        debug!(path = %path.display(), "dataset cache hit");
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(DataLoader::load_uncached(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&dataset));
    Ok(dataset)
}

/// Handles CSV reading and conversion into typed rows.
pub struct DataLoader;

impl DataLoader {
    /// Read, rename, normalize. Bypasses the cache.
    pub fn load_uncached(path: &Path) -> Result<Dataset, LoaderError> {
        std::fs::metadata(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let df = Self::read_csv(path)?;
        let rows = Self::extract_rows(&df)?;
        info!(path = %path.display(), rows = rows.len(), "loaded review CSV");

        let normalized = normalizer::normalize(rows);
        Ok(Dataset::new(path, normalized.reviews, normalized.report))
    }

    /// Read the CSV and project it onto the canonical column names.
    /// Extra columns are ignored; a missing required column is an error.
    pub fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        let raw = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let present: Vec<String> = raw
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some((missing, _)) = COLUMN_RENAMES
            .iter()
            .find(|(source, _)| !present.iter().any(|p| p == source))
        {
            return Err(LoaderError::MissingColumn(missing.to_string()));
        }

        let projection: Vec<Expr> = COLUMN_RENAMES
            .iter()
            .map(|(source, canonical)| {
                let dtype = if *canonical == "score" {
                    DataType::Float64
                } else {
                    DataType::String
                };
                col(*source).cast(dtype).alias(*canonical)
            })
            .collect();

        let df = raw.lazy().select(projection).collect()?;
        Ok(df)
    }

    /// Convert the canonical-column frame into `RawReview` rows.
    pub fn extract_rows(df: &DataFrame) -> Result<Vec<RawReview>, LoaderError> {
        let platform = df.column("platform")?.str()?;
        let review = df.column("review")?.str()?;
        let sentiment = df.column("sentiment")?.str()?;
        let date = df.column("date")?.str()?;
        let score = df.column("score")?.f64()?;
        let stemming = df.column("stemming")?.str()?;

        let owned = |v: Option<&str>| v.map(str::to_string);

        let rows = (0..df.height())
            .map(|i| RawReview {
                platform: owned(platform.get(i)),
                review: owned(review.get(i)),
                sentiment: owned(sentiment.get(i)),
                date: owned(date.get(i)),
                score: score.get(i).filter(|v| !v.is_nan()),
                stemming: owned(stemming.get(i)),
            })
            .collect();

        Ok(rows)
    }
}
