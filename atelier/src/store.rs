//! The portfolio store: a local project cache synchronized against the
//! document store and object storage, plus the editing-session lifecycle.
//!
//! Submission is a strict pipeline: validate, upload staged assets one by
//! one, compose the final image list, write the document, reconcile the
//! cache. A failure at any stage leaves the session open for retry; assets
//! uploaded before the failure stay in object storage (they are orphaned,
//! not rolled back).

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{error, info, warn};

use crate::backend::{asset_key, DocumentStore, ObjectStorage, ProjectDocument};
use crate::fixtures::{FixtureSet, FixtureStore};
use crate::interface::{CategoryFilter, PortfolioError};
use crate::models::{PreviewImage, Project, ProjectDraft, StagedAsset};

/// Lifecycle of an editing session. Absence of a session is the idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Open for field edits and image staging.
    Editing,
    /// A submit is in flight; further submits are rejected.
    Submitting,
    /// The submit landed; the session is finished.
    Committed,
    /// The last submit failed; the session stays open for retry.
    Failed,
}

/// A create or edit session owned by the caller. The draft and the ordered
/// preview sequence are mutated locally; nothing reaches a collaborator until
/// [`PortfolioStore::submit`].
pub struct EditSession {
    target: Option<Project>,
    pub draft: ProjectDraft,
    preview: Vec<PreviewImage>,
    state: SessionState,
}

impl EditSession {
    /// Start a session for a new project with an empty draft.
    pub fn create() -> Self {
        Self {
            target: None,
            draft: ProjectDraft::default(),
            preview: Vec::new(),
            state: SessionState::Editing,
        }
    }

    /// Start a session over an existing project. The draft is seeded from the
    /// record and every persisted image becomes a remote preview slot.
    pub fn edit(project: &Project) -> Self {
        Self {
            target: Some(project.clone()),
            draft: ProjectDraft {
                title: project.title.clone(),
                description: project.description.clone(),
                category: project.category,
                featured: project.featured,
            },
            preview: project
                .images
                .iter()
                .map(|url| PreviewImage::Remote { url: url.clone() })
                .collect(),
            state: SessionState::Editing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The ordered preview sequence as the surface layer renders it.
    pub fn preview(&self) -> &[PreviewImage] {
        &self.preview
    }

    /// Append a locally staged asset to the preview sequence.
    pub fn stage_asset(&mut self, asset: StagedAsset) {
        self.preview.push(PreviewImage::Staged { asset });
    }

    /// Remove one preview slot. Purely local: a removed remote image is only
    /// dropped from the record at submit, and its stored object is kept.
    pub fn remove_image(&mut self, index: usize) -> Option<PreviewImage> {
        if index < self.preview.len() {
            Some(self.preview.remove(index))
        } else {
            None
        }
    }

    fn staged_assets(&self) -> impl Iterator<Item = &StagedAsset> {
        self.preview.iter().filter_map(|p| match p {
            PreviewImage::Staged { asset } => Some(asset),
            PreviewImage::Remote { .. } => None,
        })
    }

    fn remote_urls(&self) -> Vec<&str> {
        self.preview
            .iter()
            .filter_map(|p| match p {
                PreviewImage::Remote { url } => Some(url.as_str()),
                PreviewImage::Staged { .. } => None,
            })
            .collect()
    }
}

/// Project cache and write coordinator over the external collaborators.
pub struct PortfolioStore {
    documents: Arc<dyn DocumentStore>,
    storage: Arc<dyn ObjectStorage>,
    fallback: FixtureStore,
    projects: RwLock<Vec<Project>>,
    pending_delete: RwLock<Option<String>>,
}

impl PortfolioStore {
    /// Store for the public portfolio surface: fetch failures substitute the
    /// full sample set.
    pub fn portfolio(documents: Arc<dyn DocumentStore>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self::new(documents, storage, FixtureSet::Portfolio)
    }

    /// Store for the admin surface: fetch failures substitute the trimmed
    /// sample set.
    pub fn admin(documents: Arc<dyn DocumentStore>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self::new(documents, storage, FixtureSet::Admin)
    }

    fn new(
        documents: Arc<dyn DocumentStore>,
        storage: Arc<dyn ObjectStorage>,
        fixtures: FixtureSet,
    ) -> Self {
        Self {
            documents,
            storage,
            fallback: FixtureStore::new(fixtures),
            projects: RwLock::new(Vec::new()),
            pending_delete: RwLock::new(None),
        }
    }

    /// Snapshot of the current cache.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.read().clone()
    }

    /// Fetch without substitution; the public refresh path wraps this.
    pub async fn fetch(&self, filter: CategoryFilter) -> Result<Vec<Project>, PortfolioError> {
        self.documents
            .list(filter)
            .await
            .map_err(PortfolioError::Fetch)
    }

    /// Reload the cache from the document store. On failure the sample set is
    /// substituted so the surface never renders empty.
    pub async fn refresh(&self, filter: CategoryFilter) -> Vec<Project> {
        let projects = match self.fetch(filter).await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(error = %e, "project fetch failed, substituting sample data");
                // Substitution always loads the full set; category filtering
                // of samples stays presentation-side.
                self.fallback
                    .list(CategoryFilter::All)
                    .await
                    .unwrap_or_default()
            }
        };
        *self.projects.write() = projects.clone();
        projects
    }

    pub fn begin_create(&self) -> EditSession {
        EditSession::create()
    }

    pub fn begin_edit(&self, project: &Project) -> EditSession {
        EditSession::edit(project)
    }

    /// Run the submit pipeline for a session. On success the session is
    /// committed and the cache reconciled; on failure the session is left in
    /// `Failed` with its draft and staged assets intact.
    pub async fn submit(&self, session: &mut EditSession) -> Result<Project, PortfolioError> {
        match session.state {
            SessionState::Submitting => {
                return Err(PortfolioError::InvalidState("submit already in flight"))
            }
            SessionState::Committed => {
                return Err(PortfolioError::InvalidState("session already committed"))
            }
            SessionState::Editing | SessionState::Failed => {}
        }
        session.state = SessionState::Submitting;

        match self.run_pipeline(session).await {
            Ok(project) => {
                session.state = SessionState::Committed;
                info!(id = %project.id, title = %project.title, "project submitted");
                Ok(project)
            }
            Err(e) => {
                session.state = SessionState::Failed;
                error!(error = %e, "project submit failed");
                Err(e)
            }
        }
    }

    async fn run_pipeline(&self, session: &EditSession) -> Result<Project, PortfolioError> {
        Self::validate(session)?;
        let uploaded = self.upload_staged(session).await?;
        let images = Self::compose_images(session, uploaded);
        let project = self.write_document(session, images).await?;
        self.reconcile(&project);
        Ok(project)
    }

    fn validate(session: &EditSession) -> Result<(), PortfolioError> {
        session.draft.check()?;
        if session.preview.is_empty() {
            return Err(PortfolioError::Validation {
                field: "images",
                message: "at least one image is required".to_string(),
            });
        }
        Ok(())
    }

    /// Upload staged assets strictly in preview order, one at a time. The
    /// first failure aborts the submit; earlier uploads are not rolled back.
    async fn upload_staged(&self, session: &EditSession) -> Result<Vec<String>, PortfolioError> {
        let mut uploaded = Vec::new();
        for asset in session.staged_assets() {
            let key = asset_key(&asset.filename);
            let url = self
                .storage
                .upload(&key, asset.bytes.clone())
                .await
                .map_err(|source| PortfolioError::Upload {
                    filename: asset.filename.clone(),
                    source,
                })?;
            uploaded.push(url);
        }
        Ok(uploaded)
    }

    /// Final image list: for an edit, the original URLs still present in the
    /// preview (original order preserved) followed by the new uploads; for a
    /// create, the uploads alone.
    fn compose_images(session: &EditSession, uploaded: Vec<String>) -> Vec<String> {
        let mut images = match &session.target {
            Some(original) => {
                let kept = session.remote_urls();
                original
                    .images
                    .iter()
                    .filter(|url| kept.contains(&url.as_str()))
                    .cloned()
                    .collect()
            }
            None => Vec::new(),
        };
        images.extend(uploaded);
        images
    }

    async fn write_document(
        &self,
        session: &EditSession,
        images: Vec<String>,
    ) -> Result<Project, PortfolioError> {
        match &session.target {
            Some(original) => {
                let document = ProjectDocument::new(&session.draft, images, Some(Utc::now()));
                self.documents
                    .update(&original.id, document)
                    .await
                    .map_err(PortfolioError::DocumentWrite)
            }
            None => {
                let document = ProjectDocument::new(&session.draft, images, None);
                self.documents
                    .insert(document)
                    .await
                    .map_err(PortfolioError::DocumentWrite)
            }
        }
    }

    fn reconcile(&self, project: &Project) {
        let mut projects = self.projects.write();
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => *slot = project.clone(),
            None => projects.push(project.clone()),
        }
    }

    /// First step of the two-step delete: remember which project the caller
    /// intends to remove.
    pub fn mark_for_delete(&self, id: impl Into<String>) {
        *self.pending_delete.write() = Some(id.into());
    }

    pub fn cancel_delete(&self) {
        *self.pending_delete.write() = None;
    }

    /// Second step of the two-step delete. A remote failure keeps the mark
    /// and the cached record so the caller can retry or cancel.
    pub async fn confirm_delete(&self) -> Result<(), PortfolioError> {
        let id = self
            .pending_delete
            .read()
            .clone()
            .ok_or(PortfolioError::InvalidState("no project marked for deletion"))?;

        self.documents
            .delete(&id)
            .await
            .map_err(PortfolioError::DocumentWrite)?;

        self.projects.write().retain(|p| p.id != id);
        *self.pending_delete.write() = None;
        info!(%id, "project deleted");
        Ok(())
    }
}
