//! Built-in sample projects, substituted when the document store cannot be
//! reached so the public site never renders empty.
//!
//! `FixtureStore` also implements `DocumentStore` read-only, which lets the
//! portfolio run entirely offline in demos and tests.

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use crate::backend::{DocumentStore, ObjectStorage, ProjectDocument};
use crate::interface::{BackendError, CategoryFilter};
use crate::models::{Category, Project};

struct SampleProject {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    images: &'static [&'static str],
    featured: bool,
    created_on: &'static str,
}

/// The admin surface shows a smaller fixture set: the first three samples.
const ADMIN_SAMPLE_COUNT: usize = 3;

static SAMPLES: &[SampleProject] = &[
    SampleProject {
        id: "1",
        title: "Brand Identity Design",
        description: "Complete brand identity design for a tech startup including logo, color palette, typography, and brand guidelines.",
        category: Category::Graphic,
        images: &[
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1600775508114-5c30cf911a40?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: true,
        created_on: "2023-10-15",
    },
    SampleProject {
        id: "2",
        title: "Motion Graphics Explainer",
        description: "Animated explainer video for a financial services company explaining their product offerings in an engaging way.",
        category: Category::Motion,
        images: &[
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: true,
        created_on: "2023-11-20",
    },
    SampleProject {
        id: "3",
        title: "Mobile App UI Design",
        description: "User interface design for a fitness tracking mobile application with a focus on user experience and accessibility.",
        category: Category::UiUx,
        images: &[
            "https://images.unsplash.com/photo-1555774698-0b77e0d5fac6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1616469829941-c7200edec809?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: true,
        created_on: "2023-12-05",
    },
    SampleProject {
        id: "4",
        title: "Product Packaging Design",
        description: "Creative packaging design for an organic skincare brand that emphasizes sustainability and natural ingredients.",
        category: Category::Graphic,
        images: &[
            "https://images.unsplash.com/photo-1586495777744-4413f21062fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1605236453806-6ff36851218e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: false,
        created_on: "2024-01-10",
    },
    SampleProject {
        id: "5",
        title: "Character Animation",
        description: "Character design and animation for a children's educational series teaching basic science concepts.",
        category: Category::Motion,
        images: &[
            "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1634152962476-4b8a00e1915c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: false,
        created_on: "2024-02-15",
    },
    SampleProject {
        id: "6",
        title: "E-commerce Website Redesign",
        description: "Complete redesign of an e-commerce platform focusing on improving conversion rates and user experience.",
        category: Category::UiUx,
        images: &[
            "https://images.unsplash.com/photo-1563986768609-322da13575f3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        featured: false,
        created_on: "2024-03-20",
    },
];

fn materialize(sample: &SampleProject) -> Project {
    let created_at = NaiveDate::parse_from_str(sample.created_on, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or_else(Utc::now);
    Project {
        id: sample.id.to_string(),
        title: sample.title.to_string(),
        description: sample.description.to_string(),
        category: sample.category,
        images: sample.images.iter().map(|s| s.to_string()).collect(),
        featured: sample.featured,
        created_at,
        updated_at: None,
    }
}

/// The full six-project sample set shown on the public portfolio.
pub fn portfolio_samples() -> Vec<Project> {
    SAMPLES.iter().map(materialize).collect()
}

/// The trimmed sample set shown on the admin surface.
pub fn admin_samples() -> Vec<Project> {
    SAMPLES[..ADMIN_SAMPLE_COUNT].iter().map(materialize).collect()
}

/// Which fixture set a store substitutes on fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSet {
    Portfolio,
    Admin,
}

/// Read-only `DocumentStore` over the built-in samples. Writes are rejected.
pub struct FixtureStore {
    set: FixtureSet,
}

impl FixtureStore {
    pub fn new(set: FixtureSet) -> Self {
        Self { set }
    }

    fn samples(&self) -> Vec<Project> {
        match self.set {
            FixtureSet::Portfolio => portfolio_samples(),
            FixtureSet::Admin => admin_samples(),
        }
    }
}

#[async_trait]
impl DocumentStore for FixtureStore {
    async fn list(&self, filter: CategoryFilter) -> Result<Vec<Project>, BackendError> {
        Ok(self
            .samples()
            .into_iter()
            .filter(|p| filter.matches(p.category))
            .collect())
    }

    async fn insert(&self, _document: ProjectDocument) -> Result<Project, BackendError> {
        Err(BackendError::Store("fixture data is read-only".to_string()))
    }

    async fn update(&self, _id: &str, _document: ProjectDocument) -> Result<Project, BackendError> {
        Err(BackendError::Store("fixture data is read-only".to_string()))
    }

    async fn delete(&self, _id: &str) -> Result<(), BackendError> {
        Err(BackendError::Store("fixture data is read-only".to_string()))
    }
}

/// Object storage stub paired with `FixtureStore` for fully offline runs.
pub struct NullObjectStorage;

#[async_trait]
impl ObjectStorage for NullObjectStorage {
    async fn upload(&self, _key: &str, _bytes: Vec<u8>) -> Result<String, BackendError> {
        Err(BackendError::Storage(
            "object storage is unavailable offline".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_set_has_six_projects_in_seed_order() {
        let samples = portfolio_samples();
        assert_eq!(samples.len(), 6);
        let ids: Vec<&str> = samples.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn admin_set_is_a_prefix_of_the_portfolio_set() {
        let admin = admin_samples();
        assert_eq!(admin.len(), 3);
        assert_eq!(admin, portfolio_samples()[..3]);
    }

    #[test]
    fn sample_content_is_the_shipped_dataset() {
        let samples = portfolio_samples();
        assert_eq!(
            samples[1].description,
            "Animated explainer video for a financial services company \
             explaining their product offerings in an engaging way."
        );
        assert_eq!(
            samples[0].images[1],
            "https://images.unsplash.com/photo-1600775508114-5c30cf911a40?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
        );
        for project in &samples {
            for url in &project.images {
                assert!(url.starts_with("https://images.unsplash.com/photo-"));
                assert!(url.ends_with("?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"));
            }
        }
    }

    #[test]
    fn samples_are_valid_records() {
        for project in portfolio_samples() {
            assert!(!project.title.is_empty());
            assert!(project.description.len() >= 10);
            assert_eq!(project.images.len(), 2);
            assert!(project.updated_at.is_none());
        }
        assert_eq!(
            portfolio_samples().iter().filter(|p| p.featured).count(),
            3
        );
    }

    #[tokio::test]
    async fn fixture_store_lists_with_filter() {
        let store = FixtureStore::new(FixtureSet::Portfolio);
        let motion = store
            .list(CategoryFilter::Only(Category::Motion))
            .await
            .unwrap();
        assert_eq!(motion.len(), 2);
        assert!(motion.iter().all(|p| p.category == Category::Motion));
    }

    #[tokio::test]
    async fn fixture_store_rejects_writes() {
        let store = FixtureStore::new(FixtureSet::Admin);
        assert!(store.delete("1").await.is_err());
        let err = store
            .update("1", ProjectDocument::new(&Default::default(), vec![], None))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Store(_)));
    }
}
