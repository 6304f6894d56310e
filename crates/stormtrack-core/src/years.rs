//! YearIndex — the selectable years derived from the landfall snapshot.
//!
//! Years are compared as integers, never lexically, so `"999"` is dropped
//! and `"2004"` sorts above `"1935"`. Recompute after every landfall load;
//! the index holds no reference back to the store.

use crate::normalize::year_number;
use crate::store::LandfallStore;
use std::collections::BTreeMap;

/// Oldest year offered for selection.
pub const MIN_YEAR: i32 = 1900;

/// Used as the selected year when no landfall years are loaded.
pub const FALLBACK_YEAR: &str = "1900";

/// Distinct landfall years, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearIndex {
    years: Vec<String>,
}

impl YearIndex {
    /// Index the years in `store`, keeping those ≥ [`MIN_YEAR`].
    pub fn compute(store: &LandfallStore) -> Self {
        Self::compute_with_min(store, MIN_YEAR)
    }

    /// Like [`YearIndex::compute`] with a later cutoff. Cutoffs before
    /// [`MIN_YEAR`] are raised to it.
    pub fn compute_with_min(store: &LandfallStore, min_year: i32) -> Self {
        Self::from_years(store.iter().map(|e| e.year.as_str()), min_year)
    }

    /// Build from raw year strings. Non-numeric years are skipped; years
    /// equal as integers collapse to the first spelling seen. The cutoff is
    /// never below [`MIN_YEAR`].
    pub fn from_years<'a>(years: impl IntoIterator<Item = &'a str>, min_year: i32) -> Self {
        let min_year = min_year.max(MIN_YEAR);
        let mut distinct: BTreeMap<i32, String> = BTreeMap::new();
        for raw in years {
            match year_number(raw) {
                Some(n) if n >= min_year => {
                    distinct.entry(n).or_insert_with(|| raw.trim().to_string());
                }
                Some(_) => {}
                None => tracing::debug!(year = raw, "skipping non-numeric landfall year"),
            }
        }
        Self {
            years: distinct.into_values().rev().collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.years
    }

    pub fn contains(&self, year: &str) -> bool {
        self.years.iter().any(|y| y == year)
    }

    /// The most recent year.
    pub fn latest(&self) -> Option<&str> {
        self.years.first().map(String::as_str)
    }

    /// Year to select by default: the most recent one, or `fallback` when
    /// the index is empty.
    pub fn default_year<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.latest().unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
