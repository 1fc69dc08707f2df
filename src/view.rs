//! Page View Models
//! `render` turns the shared dataset plus the current UI state into the
//! data a page needs. It never touches the dataset, so it can run on
//! every frame.

use crate::data::{DashboardFilter, Dataset, Platform, Review};
use crate::stats::{
    CategoryCount, LengthHistogram, LengthStats, SentimentCounts, SummaryCalculator,
};

/// Sidebar menu entries. Any page is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Data,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Dashboard, Page::Data, Page::About];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Data => "Data",
            Page::About => "About",
        }
    }
}

/// Everything the user can change between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub page: Page,
    pub filter: DashboardFilter,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub total: usize,
    pub bca_mobile: usize,
    pub brimo: usize,
    pub platform_distribution: Vec<CategoryCount>,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub subset_len: usize,
    pub counts: SentimentCounts,
    /// `None` when the filtered subset is empty.
    pub sentiment_distribution: Option<Vec<CategoryCount>>,
    pub length_histogram: Option<LengthHistogram>,
    pub length_stats: Vec<LengthStats>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.subset_len == 0
    }
}

/// Read-only table over the full dataset.
#[derive(Debug, Clone, Copy)]
pub struct DataView<'a> {
    pub rows: &'a [Review],
}

impl DataView<'_> {
    pub const HEADERS: [&'static str; 4] = ["Aplikasi", "Review", "Sentimen", "Cleaned Text"];

    /// Display cells for row `idx` in header order.
    pub fn cells(&self, idx: usize) -> Option<[&str; 4]> {
        self.rows.get(idx).map(|r| {
            [
                r.platform.as_str(),
                r.review.as_str(),
                r.sentiment.as_str(),
                r.stemming.as_str(),
            ]
        })
    }
}

#[derive(Debug, Clone)]
pub enum PageView<'a> {
    Home(HomeView),
    Dashboard(DashboardView),
    Data(DataView<'a>),
    About,
}

/// Build the view for the current page.
pub fn render<'a>(
    dataset: &'a Dataset,
    state: &ViewState,
    histogram_bins: usize,
) -> PageView<'a> {
    match state.page {
        Page::Home => PageView::Home(home_view(dataset)),
        Page::Dashboard => {
            PageView::Dashboard(dashboard_view(dataset, &state.filter, histogram_bins))
        }
        Page::Data => PageView::Data(DataView {
            rows: dataset.reviews(),
        }),
        Page::About => PageView::About,
    }
}

pub fn home_view(dataset: &Dataset) -> HomeView {
    let reviews = dataset.reviews();
    HomeView {
        total: reviews.len(),
        bca_mobile: SummaryCalculator::platform_count(reviews, &Platform::BcaMobile),
        brimo: SummaryCalculator::platform_count(reviews, &Platform::Brimo),
        platform_distribution: SummaryCalculator::platform_distribution(reviews),
    }
}

pub fn dashboard_view(
    dataset: &Dataset,
    filter: &DashboardFilter,
    histogram_bins: usize,
) -> DashboardView {
    let subset = filter.apply(dataset.reviews());
    let counts = SummaryCalculator::sentiment_counts(subset.iter().copied());

    let sentiment_distribution = if subset.is_empty() {
        None
    } else {
        Some(SummaryCalculator::sentiment_distribution(counts))
    };

    DashboardView {
        subset_len: subset.len(),
        counts,
        sentiment_distribution,
        length_histogram: SummaryCalculator::length_histogram(&subset, histogram_bins),
        length_stats: if subset.is_empty() {
            Vec::new()
        } else {
            SummaryCalculator::length_stats_parallel(&subset)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PlatformFilter, Sentiment, SentimentFilter};

    fn review(platform: Platform, sentiment: Sentiment, text: &str) -> Review {
        Review {
            platform,
            review: text.to_string(),
            sentiment,
            date: None,
            score: Some(4.0),
            stemming: text.to_string(),
        }
    }

    /// BCA Mobile has only positive reviews, so BCA Mobile + negative is empty.
    fn dataset() -> Dataset {
        let reviews = vec![
            review(Platform::BcaMobile, Sentiment::Positive, "mudah dipakai"),
            review(Platform::BcaMobile, Sentiment::Positive, "cepat"),
            review(Platform::Brimo, Sentiment::Negative, "sering logout sendiri"),
            review(Platform::Brimo, Sentiment::Positive, "bagus"),
            review(Platform::Brimo, Sentiment::Negative, "otp tidak masuk"),
        ];
        Dataset::new("memory.csv", reviews, Default::default())
    }

    #[test]
    fn test_home_counts() {
        let ds = dataset();
        let home = home_view(&ds);
        assert_eq!(home.total, 5);
        assert_eq!(home.bca_mobile, 2);
        assert_eq!(home.brimo, 3);
        assert_eq!(home.platform_distribution.len(), 2);
    }

    #[test]
    fn test_counts_sum_to_subset_for_every_filter() {
        let ds = dataset();
        for platform in PlatformFilter::OPTIONS {
            for sentiment in SentimentFilter::OPTIONS {
                let filter = DashboardFilter::new(platform, sentiment);
                let view = dashboard_view(&ds, &filter, 50);
                assert_eq!(
                    view.counts.positive + view.counts.negative,
                    view.subset_len,
                    "{filter:?}"
                );
                assert_eq!(view.subset_len, filter.apply(ds.reviews()).len());
            }
        }
    }

    #[test]
    fn test_all_all_is_full_dataset() {
        let ds = dataset();
        let view = dashboard_view(&ds, &DashboardFilter::default(), 50);
        assert_eq!(view.subset_len, ds.len());
        assert_eq!(view.counts, SummaryCalculator::sentiment_counts(ds.reviews()));
        assert_eq!(view.length_histogram.map(|h| h.total()), Some(ds.len()));
    }

    #[test]
    fn test_empty_subset_yields_placeholder() {
        let ds = dataset();
        let filter = DashboardFilter::new(PlatformFilter::BcaMobile, SentimentFilter::Negative);

        let view = dashboard_view(&ds, &filter, 50);

        assert!(view.is_empty());
        assert_eq!(view.counts, SentimentCounts::default());
        assert!(view.sentiment_distribution.is_none());
        assert!(view.length_histogram.is_none());
        assert!(view.length_stats.is_empty());
    }

    #[test]
    fn test_render_dispatches_on_page() {
        let ds = dataset();
        let mut state = ViewState::default();
        assert!(matches!(render(&ds, &state, 50), PageView::Home(_)));

        state.page = Page::Data;
        match render(&ds, &state, 50) {
            PageView::Data(view) => {
                assert_eq!(view.rows.len(), 5);
                assert_eq!(
                    view.cells(2),
                    Some(["BRImo", "sering logout sendiri", "negative", "sering logout sendiri"])
                );
                assert_eq!(view.cells(5), None);
            }
            other => panic!("unexpected view {other:?}"),
        }

        state.page = Page::About;
        assert!(matches!(render(&ds, &state, 50), PageView::About));
    }

    #[test]
    fn test_render_leaves_dataset_untouched() {
        let ds = dataset();
        let before: Vec<Review> = ds.reviews().to_vec();
        let state = ViewState {
            page: Page::Dashboard,
            filter: DashboardFilter::new(PlatformFilter::Brimo, SentimentFilter::Negative),
        };

        let _ = render(&ds, &state, 10);

        assert_eq!(ds.reviews(), before.as_slice());
    }
}
