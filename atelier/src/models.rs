//! Core data models for the portfolio store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::interface::PortfolioError;

/// Portfolio discipline. The document store filters on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Graphic,
    Motion,
    UiUx,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Graphic, Category::Motion, Category::UiUx];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Graphic => "graphic",
            Category::Motion => "motion",
            Category::UiUx => "ui-ux",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "graphic" => Some(Category::Graphic),
            "motion" => Some(Category::Motion),
            "ui-ux" => Some(Category::UiUx),
            _ => None,
        }
    }
}

/// A persisted portfolio project. The id and creation time are assigned by
/// the document store on insert; `updated_at` appears on the first update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Ordered asset URLs. A persisted project always has at least one.
    pub images: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Mutable form fields of a create/edit session.
///
/// The at-least-one-image rule is enforced against the session's preview
/// sequence at submit time, since staged assets have no URL yet.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProjectDraft {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    pub category: Category,
    pub featured: bool,
}

impl ProjectDraft {
    /// Check the field contract, reporting the first offending field.
    pub fn check(&self) -> Result<(), PortfolioError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let (field, message) = errors
                    .field_errors()
                    .into_iter()
                    .next()
                    .map(|(field, errs)| {
                        let message = errs
                            .first()
                            .and_then(|e| e.message.clone())
                            .map(|m| m.into_owned())
                            .unwrap_or_else(|| "invalid value".to_string());
                        (field, message)
                    })
                    .unwrap_or(("draft", "invalid value".to_string()));
                Err(PortfolioError::Validation { field, message })
            }
        }
    }
}

/// A staged binary not yet uploaded to durable storage. Owned by the editing
/// session; discarded after upload in favor of the returned remote URL.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedAsset {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Locally generated preview handle, valid only for this session.
    pub preview_ref: String,
}

impl StagedAsset {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
            preview_ref: format!("memory://{}", Uuid::new_v4()),
        }
    }
}

/// One slot in an editing session's ordered preview sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewImage {
    /// Already persisted in object storage.
    Remote { url: String },
    /// Staged locally, awaiting upload.
    Staged { asset: StagedAsset },
}

impl PreviewImage {
    /// The reference the preview layer renders.
    pub fn display_ref(&self) -> &str {
        match self {
            PreviewImage::Remote { url } => url,
            PreviewImage::Staged { asset } => &asset.preview_ref,
        }
    }
}
