//! Shared public types for the portfolio core.
//!
//! This module is the source of truth for the error taxonomy and the
//! category filter used by the store and backend layers.

use thiserror::Error;

use crate::models::Category;

/// Equality filter for list queries. The document store supports filtering on
/// exactly one field (category); everything else is presentation-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Failure reported by an external collaborator (document store or object
/// storage). Transport is out of scope, so the payload is the provider's
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("document store error: {0}")]
    Store(String),
    #[error("object storage error: {0}")]
    Storage(String),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Error type for portfolio operations.
///
/// None of these is fatal: validation and backend failures leave the editing
/// session open for retry, fetch failures substitute fixture data, and
/// `Unauthorized` resolves to a redirect in the surface layer.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// A draft field violated the record contract. Raised before any network
    /// effect; no partial submission occurs.
    #[error("validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// One staged asset failed to transfer. Uploads that completed earlier in
    /// the same submit are orphaned in object storage, not rolled back.
    #[error("upload failed for {filename}: {source}")]
    Upload {
        filename: String,
        source: BackendError,
    },
    /// The document store rejected a create, update, or delete.
    #[error("document write rejected: {0}")]
    DocumentWrite(BackendError),
    /// A list read failed. The store substitutes fixture data instead of
    /// surfacing this to the public site.
    #[error("list fetch failed: {0}")]
    Fetch(BackendError),
    /// A non-admin identity reached an admin surface.
    #[error("unauthorized")]
    Unauthorized,
    /// A locale tag outside the supported set; the active locale is unchanged.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    /// An operation was invoked outside its lifecycle slot (double submit,
    /// delete-confirm without a mark).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}
