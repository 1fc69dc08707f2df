//! Review Normalizer Module
//! Collapses inconsistent label spellings into canonical values and drops
//! rows whose sentiment is not one of the two recognised classes.

use super::record::{NormalizeReport, Platform, RawReview, Review, Sentiment};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

/// Lowercased platform spellings and their canonical value.
const PLATFORM_VARIANTS: [(&str, Platform); 2] = [
    ("bca mobile", Platform::BcaMobile),
    ("brimo", Platform::Brimo),
];

/// Lowercased sentiment spellings (English and Indonesian).
const SENTIMENT_VARIANTS: [(&str, Sentiment); 4] = [
    ("positive", Sentiment::Positive),
    ("positif", Sentiment::Positive),
    ("negative", Sentiment::Negative),
    ("negatif", Sentiment::Negative),
];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Output of a normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub reviews: Vec<Review>,
    pub report: NormalizeReport,
}

/// Map a raw platform value to its canonical form. Unknown values pass
/// through unchanged as `Platform::Other`.
pub fn canonical_platform(raw: &str) -> Platform {
    let key = raw.trim().to_lowercase();
    PLATFORM_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == key)
        .map(|(_, platform)| platform.clone())
        .unwrap_or_else(|| Platform::Other(raw.to_string()))
}

/// Map a raw label to a sentiment class, `None` if unrecognised.
pub fn canonical_sentiment(raw: &str) -> Option<Sentiment> {
    let key = raw.trim().to_lowercase();
    SENTIMENT_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == key)
        .map(|(_, sentiment)| *sentiment)
}

/// Parse a source timestamp. Never fails: anything unparseable is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Run a single canonicalization pass over the raw rows.
pub fn normalize(rows: Vec<RawReview>) -> Normalized {
    let mut report = NormalizeReport {
        rows_in: rows.len(),
        ..Default::default()
    };

    let reviews: Vec<Review> = rows
        .into_iter()
        .filter_map(|raw| {
            let Some(sentiment) = raw.sentiment.as_deref().and_then(canonical_sentiment) else {
                report.dropped_sentiment += 1;
                return None;
            };

            let platform = canonical_platform(raw.platform.as_deref().unwrap_or_default());
            if matches!(platform, Platform::Other(_)) {
                report.unknown_platforms += 1;
            }

            let date = raw.date.as_deref().and_then(parse_date);
            if date.is_none() {
                report.unknown_dates += 1;
            }

            Some(Review {
                platform,
                review: raw.review.unwrap_or_default(),
                sentiment,
                date,
                score: raw.score,
                stemming: raw.stemming.unwrap_or_default(),
            })
        })
        .collect();

    report.rows_kept = reviews.len();

    info!(
        rows_in = report.rows_in,
        rows_kept = report.rows_kept,
        dropped_sentiment = report.dropped_sentiment,
        "normalized reviews"
    );
    if report.unknown_dates > 0 {
        warn!(count = report.unknown_dates, "review dates could not be parsed");
    }
    if report.unknown_platforms > 0 {
        warn!(count = report.unknown_platforms, "unrecognised platform values kept as-is");
    }

    Normalized { reviews, report }
}
