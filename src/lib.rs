//! # Realty Listing Core
//!
//! The listing logic behind a real-estate browser: ranking and searching a
//! property collection, price and area formatting, create/edit form
//! validation, and an in-memory catalog the admin dashboard mutates. The
//! crate builds as a static/dynamic library so web, desktop and mobile
//! shells share one implementation through a C-compatible surface.
//!
//! ## Features
//!
//! - **Pure ranking**: stable sorting by date or price and case-insensitive
//!   substring search, see [`listing_ranker`]
//! - **Form validation**: every failing field reported at once, see
//!   [`listing_form`]
//! - **Explicit sessions**: admin-only mutations take a [`session::Session`]
//!   instead of reading a global flag
//! - **JSON envelopes**: every FFI call returns a serialized `AppResponse`
//!   (`{"Ok": ...}`, `{"ValidationError": ...}`, ...)
//!
//! ## Quick Start
//!
//! ```no_run
//! use realty_listing_core::{create_catalog, browse_catalog, free_response};
//! use std::ffi::CString;
//!
//! let config = CString::new(r#"{"name":"main","seedSampleData":true}"#).unwrap();
//! let catalog = create_catalog(config.as_ptr());
//!
//! let criteria = CString::new(r#"{"query":"seattle","sortBy":"price-high"}"#).unwrap();
//! let response = browse_catalog(catalog, criteria.as_ptr());
//! free_response(response);
//! ```
//!
//! ## FFI Functions
//!
//! - [`create_catalog`] / [`close_catalog`] - catalog lifecycle
//! - [`post_listing`], [`put_listing`], [`delete_listing`] - admin mutations
//! - [`get_listing_by_id`], [`get_all_listings`] - lookups
//! - [`browse_catalog`], [`browse_catalog_cards`] - ranked and filtered views
//! - [`catalog_stats`] - dashboard figures
//! - [`clear_all_listings`], [`reset_catalog`] - bulk admin operations
//! - [`filter_listings`], [`rank_listings`], [`validate_listing`],
//!   [`format_listing_price`] - stateless helpers
//! - [`free_response`] - releases any string returned above

pub mod catalog_state;
pub mod listing_error;
pub mod listing_form;
pub mod listing_format;
pub mod listing_model;
pub mod listing_ranker;
pub mod sample_data;
pub mod session;
mod app_response;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::catalog_state::{CatalogConfig, CatalogState};
use crate::listing_form::ListingDraft;
use crate::listing_model::{Listing, ListingType};
use crate::listing_ranker::SearchCriteria;
use crate::session::Session;

/// Creates a new catalog.
///
/// # Parameters
///
/// * `config_json` - Null-terminated JSON [`CatalogConfig`]; every field is
///   optional. A null pointer means the default configuration.
///
/// # Returns
///
/// An owning pointer to the [`CatalogState`], or null when the config is
/// not valid UTF-8 or not valid JSON. Release it with [`close_catalog`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_catalog(config_json: *const c_char) -> *mut CatalogState {
    let config = if config_json.is_null() {
        CatalogConfig::default()
    } else {
        let raw = match unsafe { CStr::from_ptr(config_json).to_str() } {
            Ok(s) => s,
            Err(e) => {
                warn!("Invalid UTF-8 in catalog config: {e}");
                return std::ptr::null_mut();
            }
        };
        match CatalogConfig::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Rejected catalog config: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    info!("Creating catalog '{}'", config.name);
    Box::into_raw(Box::new(CatalogState::init(config)))
}

/// Creates a listing from a form draft.
///
/// # Parameters
///
/// * `state` - Catalog pointer from [`create_catalog`]
/// * `user_type` - The host's stored user type; only `"admin"` may create.
///   Null is treated as a visitor.
/// * `draft_json` - JSON [`ListingDraft`]
///
/// # Returns
///
/// `Ok` with the created listing JSON, `ValidationError` with the field
/// map, `Unauthorized`, or `BadRequest`/`SerializationError` for bad input.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use realty_listing_core::{create_catalog, post_listing};
///
/// let catalog = create_catalog(std::ptr::null());
/// let admin = CString::new("admin").unwrap();
/// let draft = CString::new(r#"{"title":"Loft"}"#).unwrap();
/// let response = post_listing(catalog, admin.as_ptr(), draft.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn post_listing(state: *mut CatalogState, user_type: *const c_char, draft_json: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to post_listing".to_string())),
    };

    let session = match session_from_ptr(user_type) {
        Ok(session) => session,
        Err(error_ptr) => return error_ptr,
    };

    let draft: ListingDraft = match parse_json_arg(draft_json, "draft") {
        Ok(draft) => draft,
        Err(error_ptr) => return error_ptr,
    };

    match state.post(&session, draft) {
        Ok(listing) => response_to_c_string(&AppResponse::json(&listing)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Replaces the editable fields of an existing listing.
///
/// The listing keeps its id and creation time; its update time is
/// refreshed. Returns `NotFound` when `id` is unknown.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn put_listing(
    state: *mut CatalogState,
    user_type: *const c_char,
    id: *const c_char,
    draft_json: *const c_char,
) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to put_listing".to_string())),
    };

    let session = match session_from_ptr(user_type) {
        Ok(session) => session,
        Err(error_ptr) => return error_ptr,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    let draft: ListingDraft = match parse_json_arg(draft_json, "draft") {
        Ok(draft) => draft,
        Err(error_ptr) => return error_ptr,
    };

    match state.put(&session, &id_str, draft) {
        Ok(Some(listing)) => response_to_c_string(&AppResponse::json(&listing)),
        Ok(None) => response_to_c_string(&AppResponse::NotFound(format!("No listing found with id: {id_str}"))),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Deletes a listing by id.
///
/// # Returns
///
/// `Ok` on deletion, `NotFound` when no listing has that id, `Unauthorized`
/// for non-admin callers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_listing(state: *mut CatalogState, user_type: *const c_char, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to delete_listing".to_string())),
    };

    let session = match session_from_ptr(user_type) {
        Ok(session) => session,
        Err(error_ptr) => return error_ptr,
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.delete_by_id(&session, &id_str) {
        Ok(true) => response_to_c_string(&AppResponse::success("Listing deleted successfully")),
        Ok(false) => response_to_c_string(&AppResponse::NotFound(format!("No listing found with id: {id_str}"))),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Retrieves one listing by id.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_listing_by_id(state: *mut CatalogState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to get_listing_by_id".to_string())),
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.get_by_id(&id_str) {
        Some(listing) => response_to_c_string(&AppResponse::json(listing)),
        None => response_to_c_string(&AppResponse::NotFound(format!("No listing found with id: {id_str}"))),
    }
}

/// Retrieves every listing in catalog order (newest additions first).
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all_listings(state: *mut CatalogState) -> *const c_char {
    match unsafe { state.as_ref() } {
        Some(state) => response_to_c_string(&AppResponse::json(state.get())),
        None => response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to get_all_listings".to_string())),
    }
}

/// Returns the catalog filtered and ranked by a JSON [`SearchCriteria`].
///
/// # Criteria Format
///
/// ```json
/// {
///   "query": "seattle",
///   "sortBy": "price-high",
///   "filters": { "listingType": "sale", "minPrice": 500000 }
/// }
/// ```
///
/// Every field is optional; a null pointer means "everything, newest
/// first". An unknown `sortBy` yields `BadRequest`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn browse_catalog(state: *mut CatalogState, criteria_json: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to browse_catalog".to_string())),
    };

    let criteria = match criteria_from_ptr(criteria_json) {
        Ok(criteria) => criteria,
        Err(error_ptr) => return error_ptr,
    };

    response_to_c_string(&AppResponse::json(&state.browse(&criteria)))
}

/// Like [`browse_catalog`], but returns grid cards with formatted price,
/// area and feature preview.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn browse_catalog_cards(state: *mut CatalogState, criteria_json: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to browse_catalog_cards".to_string())),
    };

    let criteria = match criteria_from_ptr(criteria_json) {
        Ok(criteria) => criteria,
        Err(error_ptr) => return error_ptr,
    };

    response_to_c_string(&AppResponse::json(&state.cards(&criteria)))
}

/// Dashboard figures: totals per listing type and the most recent listings.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn catalog_stats(state: *mut CatalogState) -> *const c_char {
    match unsafe { state.as_ref() } {
        Some(state) => response_to_c_string(&AppResponse::json(&state.stats())),
        None => response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to catalog_stats".to_string())),
    }
}

/// Removes every listing. The catalog stays usable.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn clear_all_listings(state: *mut CatalogState, user_type: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to clear_all_listings".to_string())),
    };

    let session = match session_from_ptr(user_type) {
        Ok(session) => session,
        Err(error_ptr) => return error_ptr,
    };

    match state.clear_all_records(&session) {
        Ok(removed) => response_to_c_string(&AppResponse::success(format!("{removed} listings cleared"))),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Clears the catalog and re-seeds it according to its configuration.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn reset_catalog(state: *mut CatalogState, user_type: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to reset_catalog".to_string())),
    };

    let session = match session_from_ptr(user_type) {
        Ok(session) => session,
        Err(error_ptr) => return error_ptr,
    };

    match state.reset(&session) {
        Ok(count) => response_to_c_string(&AppResponse::success(format!("Catalog reset with {count} listings"))),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Drops a catalog created by [`create_catalog`].
///
/// The pointer must not be used afterwards. Closing a null pointer returns
/// `BadRequest`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_catalog(state: *mut CatalogState) -> *const c_char {
    if state.is_null() {
        return response_to_c_string(&AppResponse::BadRequest("Null state pointer passed to close_catalog".to_string()));
    }

    let state = unsafe { Box::from_raw(state) };
    info!("Closing catalog '{}' with {} listings", state.config().name, state.len());
    drop(state);
    response_to_c_string(&AppResponse::success("Catalog closed successfully"))
}

/// Filters a JSON array of listings by a case-insensitive title/location
/// query. An empty query returns the array unchanged.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn filter_listings(records_json: *const c_char, query: *const c_char) -> *const c_char {
    let records: Vec<Listing> = match parse_json_arg(records_json, "records") {
        Ok(records) => records,
        Err(error_ptr) => return error_ptr,
    };

    let query = match c_ptr_to_string(query, "query") {
        Ok(query) => query,
        Err(error_ptr) => return error_ptr,
    };

    response_to_c_string(&AppResponse::json(&listing_ranker::filter(&records, &query)))
}

/// Sorts a JSON array of listings by `newest`, `oldest`, `price-low` or
/// `price-high`. Any other key yields `BadRequest` and no listings.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn rank_listings(records_json: *const c_char, sort_key: *const c_char) -> *const c_char {
    let records: Vec<Listing> = match parse_json_arg(records_json, "records") {
        Ok(records) => records,
        Err(error_ptr) => return error_ptr,
    };

    let sort_key = match c_ptr_to_string(sort_key, "sort key") {
        Ok(key) => key,
        Err(error_ptr) => return error_ptr,
    };

    match listing_ranker::rank_by(&records, &sort_key) {
        Ok(ranked) => response_to_c_string(&AppResponse::json(&ranked)),
        Err(e) => {
            warn!("Rejected sort key '{sort_key}'");
            response_to_c_string(&AppResponse::from(e))
        }
    }
}

/// Validates a JSON [`ListingDraft`].
///
/// `Ok("{}")` when valid, otherwise `ValidationError` whose payload is a JSON
/// object mapping field names to messages.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn validate_listing(draft_json: *const c_char) -> *const c_char {
    let draft: ListingDraft = match parse_json_arg(draft_json, "draft") {
        Ok(draft) => draft,
        Err(error_ptr) => return error_ptr,
    };

    let errors = draft.validate();
    if errors.is_empty() {
        response_to_c_string(&AppResponse::json(&errors))
    } else {
        response_to_c_string(&AppResponse::from(listing_error::ListingError::ValidationFailed(errors)))
    }
}

/// Formats a price for display (`$750,000`, `$2,500/mo`).
///
/// `listing_type` must be `sale` or `rent`; anything else yields
/// `BadRequest`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn format_listing_price(price: f64, listing_type: *const c_char) -> *const c_char {
    let listing_type = match c_ptr_to_string(listing_type, "listing type") {
        Ok(name) => name,
        Err(error_ptr) => return error_ptr,
    };

    match ListingType::from_name(&listing_type) {
        Some(kind) => response_to_c_string(&AppResponse::Ok(listing_format::format_price(price, kind))),
        None => response_to_c_string(&AppResponse::BadRequest(format!("Unknown listing type: {listing_type}"))),
    }
}

/// Releases a string returned by any function in this crate. Null is
/// ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr as *mut c_char) });
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// Returns null if serialization or C string creation fails. The caller
/// owns the returned memory and releases it with [`free_response`].
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String.
///
/// * `Ok(String)` - If conversion was successful
/// * `Err(*const c_char)` - A ready `BadRequest` response for null pointers
///   and invalid UTF-8
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}

/// Reads and deserializes a JSON argument, mapping failures onto ready
/// error responses.
fn parse_json_arg<T: serde::de::DeserializeOwned>(ptr: *const c_char, field_name: &str) -> Result<T, *const c_char> {
    let json = c_ptr_to_string(ptr, field_name)?;
    serde_json::from_str(&json).map_err(|e| {
        let error = AppResponse::SerializationError(format!("Invalid {field_name} JSON: {e}"));
        response_to_c_string(&error)
    })
}

/// A null user type is an anonymous visitor.
fn session_from_ptr(user_type: *const c_char) -> Result<Session, *const c_char> {
    if user_type.is_null() {
        return Ok(Session::visitor());
    }
    let user_type = c_ptr_to_string(user_type, "user type")?;
    Ok(Session::from_user_type(Some(&user_type)))
}

/// Null criteria means the default view. Sort keys are checked here so an
/// unknown one is reported as `BadRequest` rather than a JSON error.
fn criteria_from_ptr(criteria_json: *const c_char) -> Result<SearchCriteria, *const c_char> {
    if criteria_json.is_null() {
        return Ok(SearchCriteria::default());
    }

    let raw: serde_json::Value = parse_json_arg(criteria_json, "criteria")?;
    if let Some(key) = raw.get("sortBy").and_then(serde_json::Value::as_str) {
        if let Err(e) = key.parse::<listing_ranker::SortKey>() {
            return Err(response_to_c_string(&AppResponse::from(e)));
        }
    }

    serde_json::from_value(raw).map_err(|e| {
        let error = AppResponse::SerializationError(format!("Invalid criteria JSON: {e}"));
        response_to_c_string(&error)
    })
}
