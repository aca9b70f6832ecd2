//! Static air-quality news bulletins.
//!
//! Bulletins live in `packages/analytics/data/news.toml` and are baked into
//! the binary at compile time.

use serde::Deserialize;
use ward_air_analytics_models::{NewsCategory, NewsItem};

use crate::AnalyticsError;

const NEWS_TOML: &str = include_str!("../data/news.toml");

/// Number of embedded bulletins (used in tests).
#[cfg(test)]
const EXPECTED_NEWS_COUNT: usize = 20;

#[derive(Deserialize)]
struct NewsFile {
    items: Vec<NewsItem>,
}

/// Parses a bulletin list from TOML.
///
/// # Errors
///
/// Returns [`AnalyticsError::Parse`] if the TOML is malformed.
pub fn parse_news_toml(toml_str: &str) -> Result<Vec<NewsItem>, AnalyticsError> {
    let file: NewsFile = toml::de::from_str(toml_str)?;
    Ok(file.items)
}

/// Returns every embedded bulletin, newest first.
///
/// # Panics
///
/// Panics if the embedded TOML is invalid. It is a compile-time constant,
/// so a failure indicates a development error and is caught by the tests
/// below.
#[must_use]
pub fn all_news() -> Vec<NewsItem> {
    parse_news_toml(NEWS_TOML).unwrap_or_else(|e| panic!("Failed to parse news.toml: {e}"))
}

/// Bulletins in `category`, or all of them for `None`.
#[must_use]
pub fn news_feed(category: Option<NewsCategory>) -> Vec<NewsItem> {
    let items = all_news();
    match category {
        Some(category) => {
            let filtered: Vec<NewsItem> =
                items.into_iter().filter(|n| n.category == category).collect();
            log::debug!("News feed filtered to {category}: {} bulletins", filtered.len());
            filtered
        }
        None => items,
    }
}
