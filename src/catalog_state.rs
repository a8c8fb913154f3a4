//! In-memory listing catalog.
//!
//! [`CatalogState`] is the caller-owned collection the browser and the admin
//! dashboard work against: a flat list keyed by `id`, newest additions
//! first. Nothing is persisted; dropping the state drops the listings.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing_error::{FieldErrors, ListingError};
use crate::listing_form::ListingDraft;
use crate::listing_format::ListingCard;
use crate::listing_model::{Listing, ListingType};
use crate::listing_ranker::{self, SearchCriteria};
use crate::sample_data::sample_listings;
use crate::session::Session;

/// Catalog settings, read from JSON with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub name: String,
    /// Load [`sample_listings`] on init and on reset.
    pub seed_sample_data: bool,
    /// How many listings the dashboard's "recent" panel shows.
    pub recent_limit: usize,
    /// How many amenity labels a listing card shows before "+N more".
    pub feature_preview_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name: "listings".to_string(),
            seed_sample_data: true,
            recent_limit: 4,
            feature_preview_limit: 2,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_listings: usize,
    pub for_sale: usize,
    pub for_rent: usize,
    pub recent: Vec<Listing>,
}

pub struct CatalogState {
    config: CatalogConfig,
    listings: Vec<Listing>,
}

impl CatalogState {
    pub fn init(config: CatalogConfig) -> Self {
        let listings = if config.seed_sample_data {
            sample_listings()
        } else {
            Vec::new()
        };
        info!("Catalog '{}' initialized with {} listings", config.name, listings.len());
        Self { config, listings }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Creates a listing from a validated draft with a fresh id and the
    /// current time.
    pub fn post(&mut self, session: &Session, draft: ListingDraft) -> Result<Listing, ListingError> {
        self.post_at(session, draft, Utc::now())
    }

    pub fn post_at(&mut self, session: &Session, draft: ListingDraft, now: DateTime<Utc>) -> Result<Listing, ListingError> {
        session.require_admin()?;

        let mut id = Uuid::new_v4().to_string();
        while self.position(&id).is_some() {
            warn!("Generated listing id {id} already in use, drawing another");
            id = Uuid::new_v4().to_string();
        }

        let listing = draft.into_listing(id, now)?;
        info!("Created listing {} ({})", listing.id, listing.title);
        self.listings.insert(0, listing.clone());
        Ok(listing)
    }

    /// Imports a complete listing, keeping its id and timestamps.
    ///
    /// Fails when the id is blank or already present, when the listing has
    /// no images, or when `updated_at` precedes `created_at`.
    pub fn push(&mut self, listing: Listing) -> Result<Listing, ListingError> {
        if self.position(&listing.id).is_some() {
            return Err(ListingError::DuplicateId(listing.id));
        }

        let mut errors = FieldErrors::new();
        if listing.id.trim().is_empty() {
            errors.insert("id".to_string(), "Id is required".to_string());
        }
        if !listing.is_published() {
            errors.insert("images".to_string(), "At least one image is required".to_string());
        }
        if listing.updated_at < listing.created_at {
            errors.insert("updatedAt".to_string(), "Updated time precedes creation time".to_string());
        }
        if !errors.is_empty() {
            return Err(ListingError::ValidationFailed(errors));
        }

        debug!("Imported listing {}", listing.id);
        self.listings.push(listing.clone());
        Ok(listing)
    }

    /// Replaces the editable fields of listing `id`. `Ok(None)` when no such
    /// listing exists.
    pub fn put(&mut self, session: &Session, id: &str, draft: ListingDraft) -> Result<Option<Listing>, ListingError> {
        self.put_at(session, id, draft, Utc::now())
    }

    pub fn put_at(
        &mut self,
        session: &Session,
        id: &str,
        draft: ListingDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Listing>, ListingError> {
        session.require_admin()?;

        let Some(index) = self.position(id) else {
            debug!("No listing {id} to update");
            return Ok(None);
        };

        let listing = &mut self.listings[index];
        draft.apply_to(listing, now)?;
        info!("Updated listing {}", listing.id);
        Ok(Some(listing.clone()))
    }

    pub fn delete_by_id(&mut self, session: &Session, id: &str) -> Result<bool, ListingError> {
        session.require_admin()?;

        match self.position(id) {
            Some(index) => {
                self.listings.remove(index);
                info!("Deleted listing {id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// All listings in catalog order.
    pub fn get(&self) -> &[Listing] {
        &self.listings
    }

    pub fn browse(&self, criteria: &SearchCriteria) -> Vec<Listing> {
        listing_ranker::browse(&self.listings, criteria)
    }

    /// [`browse`](Self::browse) rendered as grid cards.
    pub fn cards(&self, criteria: &SearchCriteria) -> Vec<ListingCard> {
        self.browse(criteria)
            .iter()
            .map(|listing| ListingCard::from_listing(listing, self.config.feature_preview_limit))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let count = |kind: ListingType| self.listings.iter().filter(|listing| listing.listing_type == kind).count();
        CatalogStats {
            total_listings: self.listings.len(),
            for_sale: count(ListingType::Sale),
            for_rent: count(ListingType::Rent),
            recent: self.listings.iter().take(self.config.recent_limit).cloned().collect(),
        }
    }

    /// Removes every listing; returns how many were removed.
    pub fn clear_all_records(&mut self, session: &Session) -> Result<usize, ListingError> {
        session.require_admin()?;

        let removed = self.listings.len();
        self.listings.clear();
        info!("Cleared {removed} listings from catalog '{}'", self.config.name);
        Ok(removed)
    }

    /// Clears the catalog and re-seeds it per the config; returns the new
    /// listing count.
    pub fn reset(&mut self, session: &Session) -> Result<usize, ListingError> {
        self.clear_all_records(session)?;
        if self.config.seed_sample_data {
            self.listings = sample_listings();
        }
        info!("Catalog '{}' reset to {} listings", self.config.name, self.listings.len());
        Ok(self.listings.len())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.listings.iter().position(|listing| listing.id == id)
    }
}
