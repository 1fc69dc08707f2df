//! Review Record Types
//! Canonical row types shared by the loader, the filters and the views.

use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};

/// Mobile banking app a review belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    BcaMobile,
    Brimo,
    /// Value the canonical table does not recognise, kept verbatim.
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::BcaMobile => "BCA Mobile",
            Platform::Brimo => "BRImo",
            Platform::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-supplied review label. Only two classes survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 2] = [Sentiment::Positive, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row as read from the CSV, after column renaming but before any
/// value canonicalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReview {
    pub platform: Option<String>,
    pub review: Option<String>,
    pub sentiment: Option<String>,
    pub date: Option<String>,
    pub score: Option<f64>,
    pub stemming: Option<String>,
}

/// A normalized review.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub platform: Platform,
    pub review: String,
    pub sentiment: Sentiment,
    /// `None` when the source date could not be parsed.
    pub date: Option<NaiveDateTime>,
    pub score: Option<f64>,
    pub stemming: String,
}

impl Review {
    /// Comment length in characters.
    pub fn length(&self) -> usize {
        self.review.chars().count()
    }
}

/// Counters collected while normalizing, logged once after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows_in: usize,
    pub rows_kept: usize,
    pub dropped_sentiment: usize,
    pub unknown_dates: usize,
    pub unknown_platforms: usize,
}

/// The normalized, read-only review table.
///
/// Built once by the loader and shared behind an `Arc`; nothing mutates it
/// afterwards. Filtering always produces borrowed subsets.
#[derive(Debug)]
pub struct Dataset {
    source: PathBuf,
    reviews: Vec<Review>,
    report: NormalizeReport,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, reviews: Vec<Review>, report: NormalizeReport) -> Self {
        Self {
            source: source.into(),
            reviews,
            report,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn report(&self) -> &NormalizeReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_labels() {
        assert_eq!(Platform::BcaMobile.to_string(), "BCA Mobile");
        assert_eq!(Platform::Brimo.to_string(), "BRImo");
        assert_eq!(Platform::Other("Livin".into()).to_string(), "Livin");
    }

    #[test]
    fn test_review_length_counts_characters() {
        let review = Review {
            platform: Platform::Brimo,
            review: "mantap 👍".to_string(),
            sentiment: Sentiment::Positive,
            date: None,
            score: Some(5.0),
            stemming: "mantap".to_string(),
        };
        assert_eq!(review.length(), 8);
    }
}
