//! Ranking and filtering of listing collections.
//!
//! Every function here is a pure transform over a borrowed slice: the input
//! is never mutated or retained, and the result is a freshly allocated
//! `Vec`. Compose them as `rank(&filter(records, query), key)`, or use
//! [`browse`] to apply a whole [`SearchCriteria`] at once.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing_error::ListingError;
use crate::listing_model::{Listing, ListingType, PropertyType};

/// Ordering applied to a listing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// `created_at` descending.
    #[default]
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// `price` ascending.
    PriceLow,
    /// `price` descending.
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Newest, SortKey::Oldest, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }

    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Oldest => a.created_at.cmp(&b.created_at),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
        }
    }
}

impl FromStr for SortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ListingError::InvalidSortKey(s.to_string()))
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured search coming from the landing page search card.
///
/// Every `None` (or empty `location`) matches all listings, so
/// `ListingFilters::default()` is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingFilters {
    pub location: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum bedroom count.
    pub bedrooms: Option<u32>,
    /// Minimum bathroom count.
    pub bathrooms: Option<f32>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
}

impl ListingFilters {
    pub fn is_empty(&self) -> bool {
        *self == ListingFilters::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let location = self.location.trim();
        if !location.is_empty() && !contains_ignore_case(&listing.location, location) {
            return false;
        }
        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| listing.price > max) {
            return false;
        }
        if self.bedrooms.is_some_and(|min| listing.bedrooms < min) {
            return false;
        }
        if self.bathrooms.is_some_and(|min| listing.bathrooms < min) {
            return false;
        }
        if self.property_type.is_some_and(|kind| listing.property_type != kind) {
            return false;
        }
        if self.listing_type.is_some_and(|kind| listing.listing_type != kind) {
            return false;
        }
        true
    }

    /// Keeps matching listings in input order.
    pub fn apply(&self, records: &[Listing]) -> Vec<Listing> {
        records.iter().filter(|listing| self.matches(listing)).cloned().collect()
    }
}

/// Query text, sort order and optional structured filters for one view of
/// the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub query: String,
    pub sort_by: SortKey,
    pub filters: ListingFilters,
}

impl SearchCriteria {
    pub fn new(query: impl Into<String>, sort_by: SortKey) -> Self {
        Self {
            query: query.into(),
            sort_by,
            filters: ListingFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: ListingFilters) -> Self {
        self.filters = filters;
        self
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Listings whose title or location contains `query`, ignoring case.
///
/// An empty query returns every record in its original order. Matching is a
/// plain substring test; there is no tokenization or relevance scoring.
pub fn filter(records: &[Listing], query: &str) -> Vec<Listing> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|listing| {
            listing.title.to_lowercase().contains(&needle) || listing.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sorts a copy of `records` by `key`.
///
/// The sort is stable: listings with equal sort values keep their relative
/// input order.
pub fn rank(records: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| key.compare(a, b));
    ranked
}

/// [`rank`] driven by a sort key name such as `"price-low"`.
///
/// Unknown names fail with [`ListingError::InvalidSortKey`] before any
/// sorting happens.
pub fn rank_by(records: &[Listing], key: &str) -> Result<Vec<Listing>, ListingError> {
    let key = key.parse::<SortKey>()?;
    Ok(rank(records, key))
}

/// Applies query, structured filters and sort order in that sequence.
pub fn browse(records: &[Listing], criteria: &SearchCriteria) -> Vec<Listing> {
    let matched = filter(records, &criteria.query);
    let matched = if criteria.filters.is_empty() {
        matched
    } else {
        criteria.filters.apply(&matched)
    };
    rank(&matched, criteria.sort_by)
}
