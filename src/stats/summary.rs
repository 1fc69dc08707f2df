//! Review Summary Module
//! Counts, distributions and comment-length statistics over review subsets.

use crate::data::{Platform, Review, Sentiment};
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// Count for one category value of a distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Positive/negative tallies of a subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// One equal-width histogram bin, split by sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthBin {
    pub start: f64,
    pub end: f64,
    pub positive: usize,
    pub negative: usize,
}

impl LengthBin {
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Comment length histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthHistogram {
    pub bin_width: f64,
    pub bins: Vec<LengthBin>,
}

impl LengthHistogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.positive + b.negative).sum()
    }
}

/// Descriptive statistics of comment length for one sentiment.
#[derive(Debug, Clone)]
pub struct LengthStats {
    pub sentiment: Sentiment,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl LengthStats {
    fn empty(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Handles the summary computations behind the Home and Dashboard pages.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Per-platform counts: BCA Mobile, BRImo, then any unrecognised
    /// platforms in name order. Zero-count categories are omitted.
    pub fn platform_distribution<'a>(
        reviews: impl IntoIterator<Item = &'a Review>,
    ) -> Vec<CategoryCount> {
        let mut counts: Vec<(Platform, usize)> = Vec::new();
        for review in reviews {
            match counts.iter_mut().find(|(p, _)| *p == review.platform) {
                Some((_, n)) => *n += 1,
                None => counts.push((review.platform.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| a.0.cmp(&b.0));

        counts
            .into_iter()
            .map(|(platform, count)| CategoryCount {
                label: platform.to_string(),
                count,
            })
            .collect()
    }

    /// Count of reviews for one platform.
    pub fn platform_count<'a>(
        reviews: impl IntoIterator<Item = &'a Review>,
        platform: &Platform,
    ) -> usize {
        reviews
            .into_iter()
            .filter(|r| r.platform == *platform)
            .count()
    }

    pub fn sentiment_counts<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> SentimentCounts {
        reviews
            .into_iter()
            .fold(SentimentCounts::default(), |mut acc, r| {
                match r.sentiment {
                    Sentiment::Positive => acc.positive += 1,
                    Sentiment::Negative => acc.negative += 1,
                }
                acc
            })
    }

    /// Sentiment pie data, positive first. Zero-count classes are omitted.
    pub fn sentiment_distribution(counts: SentimentCounts) -> Vec<CategoryCount> {
        [
            (Sentiment::Positive, counts.positive),
            (Sentiment::Negative, counts.negative),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(sentiment, count)| CategoryCount {
            label: sentiment.to_string(),
            count,
        })
        .collect()
    }

    /// Bucket comment lengths into `bins` equal-width bins spanning the
    /// subset's min..=max. Returns `None` for an empty subset.
    pub fn length_histogram(subset: &[&Review], bins: usize) -> Option<LengthHistogram> {
        let lengths: Vec<(f64, Sentiment)> = subset
            .iter()
            .map(|r| (r.length() as f64, r.sentiment))
            .collect();

        let min = lengths.iter().map(|(l, _)| *l).reduce(f64::min)?;
        let max = lengths.iter().map(|(l, _)| *l).reduce(f64::max)?;

        let bins = bins.max(1);
        let bin_width = if max > min {
            (max - min) / bins as f64
        } else {
            1.0
        };

        let mut out: Vec<LengthBin> = (0..bins)
            .map(|i| LengthBin {
                start: min + i as f64 * bin_width,
                end: min + (i + 1) as f64 * bin_width,
                positive: 0,
                negative: 0,
            })
            .collect();

        for (length, sentiment) in lengths {
            // Last bin is closed so that `max` lands inside it
            let idx = (((length - min) / bin_width).floor() as usize).min(bins - 1);
            match sentiment {
                Sentiment::Positive => out[idx].positive += 1,
                Sentiment::Negative => out[idx].negative += 1,
            }
        }

        Some(LengthHistogram {
            bin_width,
            bins: out,
        })
    }

    /// Compute descriptive statistics for an array of lengths.
    pub fn compute_length_stats(sentiment: Sentiment, lengths: &[f64]) -> LengthStats {
        let n = lengths.len();
        if n == 0 {
            return LengthStats::empty(sentiment);
        }

        let mut sorted = lengths.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let std = if n > 1 { lengths.iter().std_dev() } else { 0.0 };

        LengthStats {
            sentiment,
            count: n,
            mean: lengths.iter().mean(),
            median,
            std,
            min: sorted[0],
            max: sorted[n - 1],
        }
    }

    /// Length statistics for each sentiment class, computed in parallel.
    pub fn length_stats_parallel(subset: &[&Review]) -> Vec<LengthStats> {
        Sentiment::ALL[..]
            .par_iter()
            .map(|&sentiment| {
                let lengths: Vec<f64> = subset
                    .iter()
                    .filter(|r| r.sentiment == sentiment)
                    .map(|r| r.length() as f64)
                    .collect();
                Self::compute_length_stats(sentiment, &lengths)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn review(platform: Platform, sentiment: Sentiment, text: &str) -> Review {
        Review {
            platform,
            review: text.to_string(),
            sentiment,
            date: None,
            score: None,
            stemming: text.to_string(),
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            review(Platform::BcaMobile, Sentiment::Positive, "ok"),
            review(Platform::Brimo, Sentiment::Negative, "sering gagal"),
            review(Platform::Brimo, Sentiment::Positive, "mantap sekali"),
            review(Platform::Other("Livin".into()), Sentiment::Negative, "lambat"),
            review(Platform::Brimo, Sentiment::Negative, "error terus saat transfer"),
        ]
    }

    #[test]
    fn test_platform_distribution_order() {
        let rows = sample();
        let dist = SummaryCalculator::platform_distribution(&rows);
        assert_eq!(
            dist,
            vec![
                CategoryCount { label: "BCA Mobile".into(), count: 1 },
                CategoryCount { label: "BRImo".into(), count: 3 },
                CategoryCount { label: "Livin".into(), count: 1 },
            ]
        );
        assert_eq!(SummaryCalculator::platform_count(&rows, &Platform::Brimo), 3);
    }

    #[test]
    fn test_sentiment_counts_and_distribution() {
        let rows = sample();
        let counts = SummaryCalculator::sentiment_counts(&rows);
        assert_eq!(counts, SentimentCounts { positive: 2, negative: 3 });
        assert_eq!(counts.total(), rows.len());

        let only_negative = SentimentCounts { positive: 0, negative: 4 };
        let dist = SummaryCalculator::sentiment_distribution(only_negative);
        assert_eq!(dist, vec![CategoryCount { label: "negative".into(), count: 4 }]);
    }

    #[test]
    fn test_histogram_covers_every_row() {
        let rows = sample();
        let subset: Vec<&Review> = rows.iter().collect();

        let hist = SummaryCalculator::length_histogram(&subset, 50).unwrap();

        assert_eq!(hist.bins.len(), 50);
        assert_eq!(hist.total(), rows.len());
        assert_eq!(hist.bins[0].start, 2.0);
        assert!((hist.bins[49].end - 25.0).abs() < 1e-9);
        assert_eq!(hist.bins[49].negative, 1);
        assert_eq!(hist.bins[0].positive, 1);
    }

    #[test]
    fn test_histogram_single_length() {
        let rows = vec![
            review(Platform::Brimo, Sentiment::Positive, "abc"),
            review(Platform::Brimo, Sentiment::Negative, "xyz"),
        ];
        let subset: Vec<&Review> = rows.iter().collect();

        let hist = SummaryCalculator::length_histogram(&subset, 10).unwrap();

        assert_eq!(hist.bin_width, 1.0);
        assert_eq!(hist.bins[0].positive, 1);
        assert_eq!(hist.bins[0].negative, 1);
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_histogram_empty_subset() {
        assert!(SummaryCalculator::length_histogram(&[], 50).is_none());
    }

    #[test]
    fn test_length_stats() {
        let stats = SummaryCalculator::compute_length_stats(Sentiment::Positive, &[2.0, 4.0, 9.0]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.std - 13.0_f64.sqrt()).abs() < 1e-9);

        let empty = SummaryCalculator::compute_length_stats(Sentiment::Negative, &[]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());
    }

    #[test]
    fn test_length_stats_parallel_per_sentiment() {
        let rows = sample();
        let subset: Vec<&Review> = rows.iter().collect();

        let stats = SummaryCalculator::length_stats_parallel(&subset);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].sentiment, Sentiment::Positive);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].sentiment, Sentiment::Negative);
        assert_eq!(stats[1].count, 3);
    }
}
