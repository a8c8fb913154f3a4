//! Create/edit form state and its validation rules.
//!
//! [`ListingDraft`] holds the editable fields exactly as the form collects
//! them: text may be blank, numbers may be missing and the two enumerations
//! are still free text. [`ListingDraft::validate`] reports every failing
//! field at once; a draft only becomes a [`Listing`] once that report is
//! empty.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::listing_error::{FieldErrors, ListingError};
use crate::listing_model::{ContactInfo, Listing, ListingType, PropertyType};

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
    static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9\s+\-()]+$").expect("phone pattern compiles");
}

/// Candidate values for every editable listing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    pub title: String,
    pub price: Option<f64>,
    pub location: String,
    pub address: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub sqft: Option<u32>,
    pub description: String,
    pub property_type: String,
    pub listing_type: String,
    pub year_built: Option<u32>,
    pub lot_size: Option<u32>,
    pub features: Vec<String>,
    pub contact_info: ContactInfo,
    pub images: Vec<String>,
}

fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), format!("{label} is required"));
        return false;
    }
    true
}

fn require_number<T>(errors: &mut FieldErrors, field: &str, value: Option<T>, label: &str) {
    if value.is_none() {
        errors.insert(field.to_string(), format!("{label} is required"));
    }
}

impl ListingDraft {
    /// Prefills a draft from an existing listing for the edit form.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            price: Some(listing.price),
            location: listing.location.clone(),
            address: listing.address.clone(),
            bedrooms: Some(listing.bedrooms),
            bathrooms: Some(listing.bathrooms),
            sqft: Some(listing.sqft),
            description: listing.description.clone(),
            property_type: listing.property_type.as_str().to_string(),
            listing_type: listing.listing_type.as_str().to_string(),
            year_built: listing.year_built,
            lot_size: listing.lot_size,
            features: listing.features.clone(),
            contact_info: listing.contact_info.clone(),
            images: listing.images.clone(),
        }
    }

    /// Checks every field and returns one message per failing field.
    ///
    /// An empty map means the draft is valid. Range checks (negative prices
    /// and the like) are not performed.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "Title");
        require_number(&mut errors, "price", self.price, "Price");
        require_text(&mut errors, "location", &self.location, "Location");
        require_text(&mut errors, "address", &self.address, "Address");
        require_number(&mut errors, "bedrooms", self.bedrooms, "Bedrooms");
        require_number(&mut errors, "bathrooms", self.bathrooms, "Bathrooms");
        require_number(&mut errors, "sqft", self.sqft, "Square footage");
        require_text(&mut errors, "description", &self.description, "Description");

        if require_text(&mut errors, "propertyType", &self.property_type, "Property type")
            && PropertyType::from_name(&self.property_type).is_none()
        {
            errors.insert(
                "propertyType".to_string(),
                "Property type must be one of house, apartment, condo, townhouse".to_string(),
            );
        }
        if require_text(&mut errors, "listingType", &self.listing_type, "Listing type")
            && ListingType::from_name(&self.listing_type).is_none()
        {
            errors.insert("listingType".to_string(), "Listing type must be one of sale, rent".to_string());
        }

        let contact = &self.contact_info;
        require_text(&mut errors, "agent", &contact.agent, "Agent name");
        if require_text(&mut errors, "phone", &contact.phone, "Phone") && !PHONE_PATTERN.is_match(&contact.phone) {
            errors.insert("phone".to_string(), "Please enter a valid phone number".to_string());
        }
        if require_text(&mut errors, "email", &contact.email, "Email") && !EMAIL_PATTERN.is_match(&contact.email) {
            errors.insert("email".to_string(), "Please enter a valid email address".to_string());
        }

        if self.images.is_empty() {
            errors.insert("images".to_string(), "At least one image is required".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Builds a new listing stamped with `id` and `now`.
    pub fn into_listing(self, id: impl Into<String>, now: DateTime<Utc>) -> Result<Listing, ListingError> {
        let fields = self.checked()?;
        Ok(Listing {
            id: id.into(),
            title: self.title,
            price: fields.price,
            location: self.location,
            address: self.address,
            bedrooms: fields.bedrooms,
            bathrooms: fields.bathrooms,
            sqft: fields.sqft,
            images: self.images,
            description: self.description,
            property_type: fields.property_type,
            listing_type: fields.listing_type,
            year_built: self.year_built,
            lot_size: self.lot_size,
            features: self.features,
            contact_info: self.contact_info,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the editable fields of `listing`, keeping its `id` and
    /// `created_at`. `updated_at` becomes `now`, clamped so it never
    /// precedes `created_at`.
    pub fn apply_to(self, listing: &mut Listing, now: DateTime<Utc>) -> Result<(), ListingError> {
        let fields = self.checked()?;
        listing.title = self.title;
        listing.price = fields.price;
        listing.location = self.location;
        listing.address = self.address;
        listing.bedrooms = fields.bedrooms;
        listing.bathrooms = fields.bathrooms;
        listing.sqft = fields.sqft;
        listing.images = self.images;
        listing.description = self.description;
        listing.property_type = fields.property_type;
        listing.listing_type = fields.listing_type;
        listing.year_built = self.year_built;
        listing.lot_size = self.lot_size;
        listing.features = self.features;
        listing.contact_info = self.contact_info;
        listing.updated_at = now.max(listing.created_at);
        Ok(())
    }

    fn checked(&self) -> Result<CheckedFields, ListingError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ListingError::ValidationFailed(errors));
        }

        // Unreachable after a clean validate().
        let missing = |field: &str| {
            let mut errors = FieldErrors::new();
            errors.insert(field.to_string(), "Value is required".to_string());
            ListingError::ValidationFailed(errors)
        };
        Ok(CheckedFields {
            price: self.price.ok_or_else(|| missing("price"))?,
            bedrooms: self.bedrooms.ok_or_else(|| missing("bedrooms"))?,
            bathrooms: self.bathrooms.ok_or_else(|| missing("bathrooms"))?,
            sqft: self.sqft.ok_or_else(|| missing("sqft"))?,
            property_type: PropertyType::from_name(&self.property_type).ok_or_else(|| missing("propertyType"))?,
            listing_type: ListingType::from_name(&self.listing_type).ok_or_else(|| missing("listingType"))?,
        })
    }

    /// Adds an amenity label, trimmed. Blank and duplicate labels are
    /// ignored; returns whether the label was added.
    pub fn add_feature(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.features.iter().any(|existing| existing == label) {
            return false;
        }
        self.features.push(label.to_string());
        true
    }

    pub fn remove_feature(&mut self, label: &str) -> bool {
        let before = self.features.len();
        self.features.retain(|existing| existing != label);
        self.features.len() != before
    }

    pub fn add_image(&mut self, reference: impl Into<String>) {
        self.images.push(reference.into());
    }

    /// Removes the image at `index`; out-of-range indexes are ignored.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }
}

struct CheckedFields {
    price: f64,
    bedrooms: u32,
    bathrooms: f32,
    sqft: u32,
    property_type: PropertyType,
    listing_type: ListingType,
}

/// Free-function form of [`ListingDraft::validate`].
pub fn validate(draft: &ListingDraft) -> FieldErrors {
    draft.validate()
}
