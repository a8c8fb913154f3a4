//! Data model definitions for property listings.
//!
//! This module defines [`Listing`], the record every other part of the crate
//! operates on, together with its closed enumerations ([`PropertyType`],
//! [`ListingType`]) and the agent [`ContactInfo`] sub-record. All types
//! serialize to the camelCase JSON shape the browser front end exchanges.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of building being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    /// Looks up a variant by its wire name. Matching is exact: `"House"` is
    /// not a property type.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
        }
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a listing is offered for purchase or as a monthly rental.
///
/// Determines how [`Listing::price`] is read: a total sale price for
/// [`ListingType::Sale`], a monthly rent for [`ListingType::Rent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::Sale, ListingType::Rent];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

impl Display for ListingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing agent details. All three fields are required on a published
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub agent: String,
    pub phone: String,
    pub email: String,
}

/// A property offered for sale or rent.
///
/// # Structure
///
/// - **id**: opaque identifier, unique within a catalog and never changed
///   after creation
/// - **price**: total sale price or monthly rent, see [`ListingType`]
/// - **images**: ordered image references; the first one is the cover
/// - **features**: amenity labels in display order
/// - **created_at / updated_at**: `updated_at` is refreshed on every edit and
///   never precedes `created_at`
///
/// # Examples
///
/// ```rust
/// use realty_listing_core::listing_model::Listing;
///
/// let json = r#"{
///     "id": "1",
///     "title": "Modern Downtown Apartment",
///     "price": 750000,
///     "location": "Downtown, Seattle",
///     "address": "123 Pike Street, Seattle, WA 98101",
///     "bedrooms": 2,
///     "bathrooms": 2,
///     "sqft": 1200,
///     "images": ["https://images.example.com/1.jpg"],
///     "description": "Stunning modern apartment.",
///     "propertyType": "apartment",
///     "listingType": "sale",
///     "features": ["City Views"],
///     "contactInfo": {"agent": "Sarah Johnson", "phone": "(206) 555-0123", "email": "sarah@realty.com"},
///     "createdAt": "2024-01-15",
///     "updatedAt": "2024-01-15"
/// }"#;
///
/// let listing: Listing = serde_json::from_str(json)?;
/// assert_eq!(listing.year_built, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub location: String,
    pub address: String,
    pub bedrooms: u32,
    /// May be fractional, e.g. `2.5` for two full baths and a half bath.
    pub bathrooms: f32,
    pub sqft: u32,
    pub images: Vec<String>,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    pub contact_info: ContactInfo,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// A listing is publishable once it carries at least one image.
    pub fn is_published(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Timestamp wire format.
///
/// Written as RFC 3339 UTC with millisecond precision
/// (`2024-01-15T00:00:00.000Z`). Read from either a full RFC 3339 string or a
/// bare `YYYY-MM-DD` date, which is taken as midnight UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or_else(|| format!("invalid timestamp '{raw}': expected RFC 3339 or YYYY-MM-DD"))
    }
}
