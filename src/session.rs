//! Explicit authorization context for admin-only catalog mutations.
//!
//! The host decides who the user is and hands a [`Session`] to the catalog;
//! nothing in this crate reads ambient state to find out. Ranking,
//! filtering, formatting and validation never look at a session.

use serde::{Deserialize, Serialize};

use crate::listing_error::ListingError;

/// User type value the host stores for administrators.
pub const ADMIN_USER_TYPE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Visitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn admin() -> Self {
        Self { role: Role::Admin }
    }

    pub fn visitor() -> Self {
        Self { role: Role::Visitor }
    }

    /// Maps the host's stored user type onto a session. Only an exact
    /// `"admin"` grants the admin role; anything else, including no value at
    /// all, is a visitor.
    pub fn from_user_type(user_type: Option<&str>) -> Self {
        match user_type {
            Some(ADMIN_USER_TYPE) => Self::admin(),
            _ => Self::visitor(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), ListingError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ListingError::Unauthorized("admin session required".to_string()))
        }
    }
}
