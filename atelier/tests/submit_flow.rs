//! End-to-end project lifecycle against the in-memory backends: create,
//! refresh, edit, delete, exercised only through the public API.

use std::sync::Arc;

use atelier::backend::{MemoryDocumentStore, MemoryObjectStorage};
use atelier::models::{Category, ProjectDraft, StagedAsset};
use atelier::{CategoryFilter, PortfolioStore, SessionState};

fn draft(title: &str, category: Category) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A portfolio piece with a real description.".to_string(),
        category,
        featured: true,
    }
}

#[tokio::test]
async fn full_project_lifecycle() {
    let documents = Arc::new(MemoryDocumentStore::new());
    let storage = Arc::new(MemoryObjectStorage::new());
    let admin = PortfolioStore::admin(documents.clone(), storage.clone());

    // Create a project with two staged images.
    let mut session = admin.begin_create();
    session.draft = draft("Rebrand Case Study", Category::Graphic);
    session.stage_asset(StagedAsset::new("hero.png", vec![0xAA; 64]));
    session.stage_asset(StagedAsset::new("grid.png", vec![0xBB; 64]));
    let created = admin.submit(&mut session).await.unwrap();
    assert_eq!(session.state(), SessionState::Committed);
    assert_eq!(created.images.len(), 2);
    assert!(created.updated_at.is_none());

    // The public portfolio sees it after a refresh, and the category filter
    // is honored when the backend is reachable.
    let portfolio = PortfolioStore::portfolio(documents.clone(), storage.clone());
    assert_eq!(portfolio.refresh(CategoryFilter::All).await.len(), 1);
    assert!(portfolio
        .refresh(CategoryFilter::Only(Category::Motion))
        .await
        .is_empty());

    // Edit: drop the first image, change the title.
    let mut session = admin.begin_edit(&created);
    session.draft.title = "Rebrand Case Study II".to_string();
    session.remove_image(0);
    let updated = admin.submit(&mut session).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.images, created.images[1..]);
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.created_at, created.created_at);

    // Delete through the two-step flow; the backend and the cache agree.
    admin.mark_for_delete(updated.id.clone());
    admin.confirm_delete().await.unwrap();
    assert!(admin.projects().is_empty());
    assert!(portfolio.refresh(CategoryFilter::All).await.is_empty());

    // Both original uploads remain in object storage: removal from a record
    // never deletes stored objects.
    assert_eq!(storage.keys().len(), 2);
}
