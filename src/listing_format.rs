//! Display helpers shared by the grid card, the detail view and the admin
//! tables.

use serde::Serialize;

use crate::listing_model::{Listing, ListingType};

/// Formats a price for display: `$750,000` for a sale, `$2,500/mo` for a
/// rental.
pub fn format_price(price: f64, listing_type: ListingType) -> String {
    match listing_type {
        ListingType::Rent => format!("${}/mo", group_thousands(price)),
        ListingType::Sale => format!("${}", group_thousands(price)),
    }
}

/// `1,200 sqft`
pub fn format_area(sqft: u32) -> String {
    format!("{} sqft", group_thousands(f64::from(sqft)))
}

/// Renders a number with comma thousands separators and at most three
/// fraction digits, dropping trailing fractional zeros. Halves round away
/// from zero (`1.0625` renders as `1.063`).
///
/// ```rust
/// use realty_listing_core::listing_format::group_thousands;
///
/// assert_eq!(group_thousands(1200000.0), "1,200,000");
/// assert_eq!(group_thousands(1234.5), "1,234.5");
/// ```
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", (value.abs() * 1000.0).round() / 1000.0);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + fraction.len() + 2);
    // Rounding can turn -0.0001 into "0.000"; no sign in that case.
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Leading amenity labels plus a count of the ones left out, as shown on a
/// listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePreview {
    pub shown: Vec<String>,
    pub hidden: usize,
}

impl FeaturePreview {
    /// `+3 more`, or `None` when nothing was hidden.
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

pub fn feature_preview(features: &[String], limit: usize) -> FeaturePreview {
    let shown: Vec<String> = features.iter().take(limit).cloned().collect();
    FeaturePreview {
        hidden: features.len() - shown.len(),
        shown,
    }
}

/// Gallery cursor after "next", wrapping from the last image to the first.
pub fn next_image_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Gallery cursor after "previous", wrapping from the first image to the
/// last.
pub fn previous_image_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Grid card view of a listing with its display strings precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price_label: String,
    pub area_label: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub listing_type: ListingType,
    pub cover_image: Option<String>,
    pub features: FeaturePreview,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing, feature_limit: usize) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            price_label: format_price(listing.price, listing.listing_type),
            area_label: format_area(listing.sqft),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            listing_type: listing.listing_type,
            cover_image: listing.cover_image().map(str::to_string),
            features: feature_preview(&listing.features, feature_limit),
        }
    }
}
