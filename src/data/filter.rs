//! Dashboard Filters
//! Conjunctive row predicates over the normalized dataset.

use super::record::{Platform, Review, Sentiment};

/// Platform dropdown: `All` places no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    BcaMobile,
    Brimo,
}

impl PlatformFilter {
    pub const OPTIONS: [PlatformFilter; 3] = [
        PlatformFilter::All,
        PlatformFilter::BcaMobile,
        PlatformFilter::Brimo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlatformFilter::All => "All",
            PlatformFilter::BcaMobile => "BCA Mobile",
            PlatformFilter::Brimo => "BRImo",
        }
    }

    pub fn matches(&self, platform: &Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::BcaMobile => *platform == Platform::BcaMobile,
            PlatformFilter::Brimo => *platform == Platform::Brimo,
        }
    }
}

/// Sentiment dropdown: `All` places no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
}

impl SentimentFilter {
    pub const OPTIONS: [SentimentFilter; 3] = [
        SentimentFilter::All,
        SentimentFilter::Positive,
        SentimentFilter::Negative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Positive => "positive",
            SentimentFilter::Negative => "negative",
        }
    }

    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
        }
    }
}

/// Both dashboard dropdowns, AND'd together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardFilter {
    pub platform: PlatformFilter,
    pub sentiment: SentimentFilter,
}

impl DashboardFilter {
    pub fn new(platform: PlatformFilter, sentiment: SentimentFilter) -> Self {
        Self {
            platform,
            sentiment,
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.platform.matches(&review.platform) && self.sentiment.matches(review.sentiment)
    }

    /// Borrowed subset of `reviews` matching both selections, in source order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(platform: Platform, sentiment: Sentiment) -> Review {
        Review {
            platform,
            review: "ulasan".to_string(),
            sentiment,
            date: None,
            score: None,
            stemming: "ulas".to_string(),
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            review(Platform::BcaMobile, Sentiment::Positive),
            review(Platform::BcaMobile, Sentiment::Negative),
            review(Platform::Brimo, Sentiment::Negative),
            review(Platform::Brimo, Sentiment::Negative),
            review(Platform::Other("Livin".into()), Sentiment::Positive),
        ]
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let rows = sample();
        let subset = DashboardFilter::default().apply(&rows);
        assert_eq!(subset.len(), rows.len());
        assert!(subset.iter().zip(rows.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let rows = sample();

        let subset =
            DashboardFilter::new(PlatformFilter::Brimo, SentimentFilter::Negative).apply(&rows);
        assert_eq!(subset.len(), 2);

        let subset =
            DashboardFilter::new(PlatformFilter::Brimo, SentimentFilter::Positive).apply(&rows);
        assert!(subset.is_empty());

        let subset =
            DashboardFilter::new(PlatformFilter::All, SentimentFilter::Positive).apply(&rows);
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn test_unknown_platform_only_matches_all() {
        let other = review(Platform::Other("Livin".into()), Sentiment::Positive);
        assert!(PlatformFilter::All.matches(&other.platform));
        assert!(!PlatformFilter::BcaMobile.matches(&other.platform));
        assert!(!PlatformFilter::Brimo.matches(&other.platform));
    }

    #[test]
    fn test_option_labels() {
        let labels: Vec<_> = PlatformFilter::OPTIONS.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["All", "BCA Mobile", "BRImo"]);
        let labels: Vec<_> = SentimentFilter::OPTIONS.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["All", "positive", "negative"]);
    }
}
