//! External collaborator seams: the project document store and the binary
//! object storage, plus in-memory reference implementations.
//!
//! Both traits are object-safe and `Send + Sync` so the store can hold them
//! behind `Arc<dyn _>` and tests can substitute failure doubles.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::interface::{BackendError, CategoryFilter};
use crate::models::{Category, Project, ProjectDraft};

/// The wire shape of a project write. Identity and creation time are owned by
/// the document store; `updated_at` is present only on updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectDocument {
    pub fn new(draft: &ProjectDraft, images: Vec<String>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category,
            images,
            featured: draft.featured,
            updated_at,
        }
    }
}

/// Project record persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List projects matching the filter, newest first where the backend
    /// defines an order.
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<Project>, BackendError>;
    /// Persist a new record; the store assigns the id and creation time.
    async fn insert(&self, document: ProjectDocument) -> Result<Project, BackendError>;
    /// Overwrite an existing record's fields.
    async fn update(&self, id: &str, document: ProjectDocument) -> Result<Project, BackendError>;
    /// Remove a record permanently.
    async fn delete(&self, id: &str) -> Result<(), BackendError>;
}

/// Durable binary storage for project assets.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store the payload under `key` and return its public URL.
    async fn upload(&self, key: &str, bytes: Vec<u8>) -> Result<String, BackendError>;
}

/// Collision-resistant storage key for an uploaded asset: millisecond
/// timestamp prefix under a fixed `projects/` folder, original filename kept
/// for operator legibility.
pub fn asset_key(filename: &str) -> String {
    format!("projects/{}_{}", Utc::now().timestamp_millis(), filename)
}

/// In-memory document store, the reference implementation for tests and
/// offline runs.
#[derive(Default)]
pub struct MemoryDocumentStore {
    projects: Mutex<Vec<Project>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<Project>, BackendError> {
        Ok(self
            .projects
            .lock()
            .iter()
            .filter(|p| filter.matches(p.category))
            .cloned()
            .collect())
    }

    async fn insert(&self, document: ProjectDocument) -> Result<Project, BackendError> {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: document.title,
            description: document.description,
            category: document.category,
            images: document.images,
            featured: document.featured,
            created_at: Utc::now(),
            updated_at: document.updated_at,
        };
        self.projects.lock().push(project.clone());
        Ok(project)
    }

    async fn update(&self, id: &str, document: ProjectDocument) -> Result<Project, BackendError> {
        let mut projects = self.projects.lock();
        let existing = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        existing.title = document.title;
        existing.description = document.description;
        existing.category = document.category;
        existing.images = document.images;
        existing.featured = document.featured;
        existing.updated_at = document.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), BackendError> {
        let mut projects = self.projects.lock();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(BackendError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// In-memory object storage that mints deterministic URLs and records every
/// accepted upload.
#[derive(Default)]
pub struct MemoryObjectStorage {
    uploads: Mutex<Vec<(String, usize)>>,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys of every accepted upload, in order.
    pub fn keys(&self) -> Vec<String> {
        self.uploads.lock().iter().map(|(k, _)| k.clone()).collect()
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn upload(&self, key: &str, bytes: Vec<u8>) -> Result<String, BackendError> {
        if bytes.is_empty() {
            return Err(BackendError::Storage(format!("empty payload for {key}")));
        }
        let url = format!("https://storage.invalid/{key}");
        Url::parse(&url).map_err(|e| BackendError::Storage(e.to_string()))?;
        self.uploads.lock().push((key.to_string(), bytes.len()));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(title: &str, category: Category) -> ProjectDocument {
        ProjectDocument {
            title: title.to_string(),
            description: "A project with a long enough description.".to_string(),
            category,
            images: vec!["https://storage.invalid/projects/1_a.png".to_string()],
            featured: false,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_creation_time() {
        let store = MemoryDocumentStore::new();
        let a = store.insert(document("A", Category::Graphic)).await.unwrap();
        let b = store.insert(document("B", Category::Motion)).await.unwrap();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.updated_at.is_none());
    }

    #[tokio::test]
    async fn seeded_store_serves_existing_records() {
        let store = MemoryDocumentStore::with_projects(crate::fixtures::admin_samples());
        let all = store.list(CategoryFilter::All).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "1");

        store.delete("2").await.unwrap();
        assert_eq!(store.list(CategoryFilter::All).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_applies_category_filter() {
        let store = MemoryDocumentStore::new();
        store.insert(document("A", Category::Graphic)).await.unwrap();
        store.insert(document("B", Category::Motion)).await.unwrap();
        store.insert(document("C", Category::Motion)).await.unwrap();

        let all = store.list(CategoryFilter::All).await.unwrap();
        assert_eq!(all.len(), 3);
        let motion = store
            .list(CategoryFilter::Only(Category::Motion))
            .await
            .unwrap();
        assert_eq!(motion.len(), 2);
        assert!(motion.iter().all(|p| p.category == Category::Motion));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_identity() {
        let store = MemoryDocumentStore::new();
        let original = store.insert(document("A", Category::Graphic)).await.unwrap();

        let mut changed = document("A2", Category::UiUx);
        changed.updated_at = Some(Utc::now());
        let updated = store.update(&original.id, changed).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "A2");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryDocumentStore::new();
        let err = store
            .update("missing", document("A", Category::Graphic))
            .await
            .unwrap_err();
        assert_eq!(err, BackendError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = MemoryDocumentStore::new();
        let a = store.insert(document("A", Category::Graphic)).await.unwrap();
        store.insert(document("B", Category::Motion)).await.unwrap();

        store.delete(&a.id).await.unwrap();
        let remaining = store.list(CategoryFilter::All).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_ne!(remaining[0].id, a.id);

        let err = store.delete(&a.id).await.unwrap_err();
        assert_eq!(err, BackendError::NotFound(a.id));
    }

    #[tokio::test]
    async fn upload_returns_url_containing_key() {
        let storage = MemoryObjectStorage::new();
        let key = asset_key("poster.png");
        assert!(key.starts_with("projects/"));
        assert!(key.ends_with("_poster.png"));

        let url = storage.upload(&key, vec![1, 2, 3]).await.unwrap();
        assert_eq!(url, format!("https://storage.invalid/{key}"));
        assert_eq!(storage.keys(), vec![key]);
    }

    #[tokio::test]
    async fn empty_payload_is_rejected() {
        let storage = MemoryObjectStorage::new();
        let err = storage.upload("projects/1_x.png", vec![]).await.unwrap_err();
        assert!(matches!(err, BackendError::Storage(_)));
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn document_serializes_camel_case() {
        let json = serde_json::to_value(document("A", Category::UiUx)).unwrap();
        assert_eq!(json["category"], "ui-ux");
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("images").is_some());
    }
}
