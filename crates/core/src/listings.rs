//! Listings
//!
//! Filters and orderings behind the public product pages.

use std::{cmp::Reverse, str::FromStr};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Products with more votes than this appear in the trending view.
pub const TRENDING_MIN_VOTES: u32 = 100;

/// Products created within this many days count as recently launched.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// A product as far as listings are concerned.
pub trait Listing {
    /// Display name in the served locale.
    fn name(&self) -> &str;

    /// Current vote count.
    fn vote_count(&self) -> u32;

    /// Creation time.
    fn created_at(&self) -> Timestamp;
}

/// Ordering of the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExploreSort {
    /// Newest first.
    #[default]
    Recent,

    /// Only products above [`TRENDING_MIN_VOTES`], most voted first.
    Trending,
}

/// Explore sort parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreSortError {
    /// Neither `recent` nor `trending`.
    #[error("unknown sort order: {0}")]
    Unknown(String),
}

impl FromStr for ExploreSort {
    type Err = ExploreSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "trending" => Ok(Self::Trending),
            _ => Err(ExploreSortError::Unknown(s.to_owned())),
        }
    }
}

/// Explore page query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExploreQuery {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,

    /// Ordering.
    pub sort: ExploreSort,
}

/// Earliest creation time that still counts as recently launched at `now`.
#[must_use]
pub fn recent_cutoff(now: Timestamp) -> Timestamp {
    now.checked_sub(SignedDuration::from_hours(RECENT_WINDOW_DAYS * 24))
        .unwrap_or(Timestamp::MIN)
}

/// Whether `item` was launched within the recent window ending at `now`.
pub fn is_recent<T: Listing>(item: &T, now: Timestamp) -> bool {
    item.created_at() >= recent_cutoff(now)
}

/// Apply an explore query to a set of products.
pub fn explore<T: Listing>(items: Vec<T>, query: &ExploreQuery) -> Vec<T> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<T> = items
        .into_iter()
        .filter(|item| {
            needle
                .as_deref()
                .is_none_or(|needle| item.name().to_lowercase().contains(needle))
        })
        .collect();

    match query.sort {
        ExploreSort::Recent => {
            matched.sort_by_key(|item| Reverse(item.created_at()));
        }
        ExploreSort::Trending => {
            matched.retain(|item| item.vote_count() > TRENDING_MIN_VOTES);
            matched.sort_by_key(|item| Reverse(item.vote_count()));
        }
    }

    matched
}
