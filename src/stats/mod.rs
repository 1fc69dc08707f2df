//! Stats module - review counts and comment length statistics

mod summary;

pub use summary::{
    CategoryCount, LengthBin, LengthHistogram, LengthStats, SentimentCounts, SummaryCalculator,
};
