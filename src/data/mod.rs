//! Data module - review loading, normalization and filtering

mod filter;
mod loader;
mod normalizer;
mod record;

pub use filter::{DashboardFilter, PlatformFilter, SentimentFilter};
pub use loader::{load, LoaderError};
pub use record::{Dataset, Platform, Review, Sentiment};
