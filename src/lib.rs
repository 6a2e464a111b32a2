pub mod browse;
pub mod catalog;
pub mod error;
pub mod model;
pub mod navigation;
pub mod providers;
pub mod quiz;
pub mod session;
pub mod store;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::browse::{BrowseSnapshot, CourseBrowser};
    pub use crate::catalog::{CourseOverview, Listing};
    pub use crate::error::{FetchError, SessionError};
    pub use crate::model::{
        CodeSnippet, Course, CourseStatus, Lesson, LessonKind, Quiz, QuizOption, Resource,
        Section, Thumbnail,
    };
    pub use crate::navigation::Navigation;
    pub use crate::providers::{CourseProvider, CourseQuery, StaticProvider};
    pub use crate::quiz::QuizSession;
    pub use crate::session::CourseSession;
    pub use crate::store::{CatalogStore, MemoryStore};
    pub use crate::Lectern;
}

use std::sync::Arc;

use crate::browse::CourseBrowser;
use crate::catalog::{CourseOverview, Listing};
use crate::error::{FetchError, SessionError};
use crate::model::CourseStatus;
use crate::providers::{CourseProvider, CourseQuery};
use crate::session::CourseSession;
use crate::store::{CatalogStore, MemoryStore};

/// Library entry point. Owns the provider boundary and the injectable
/// listing store; hands out per-session browse and course-view state.
pub struct Lectern {
    provider: Arc<dyn CourseProvider>,
    store: Arc<dyn CatalogStore>,
}

impl Lectern {
    pub fn new(provider: Arc<dyn CourseProvider>, store: Arc<dyn CatalogStore>) -> Self {
        tracing::info!(provider = provider.name(), "lectern initialized");
        Self { provider, store }
    }

    /// Entry point with a session-lifetime in-memory store.
    pub fn with_memory_store(provider: Arc<dyn CourseProvider>) -> Self {
        Self::new(provider, Arc::new(MemoryStore::new()))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Listing session over the active catalog.
    pub fn catalog_browser(&self) -> CourseBrowser {
        self.browser(Some(CourseStatus::Active))
    }

    /// Listing session over retired courses. Archive overviews force the
    /// "Free" price label.
    pub fn archive_browser(&self) -> CourseBrowser {
        self.browser(Some(CourseStatus::Inactive))
    }

    pub fn browser(&self, status: Option<CourseStatus>) -> CourseBrowser {
        CourseBrowser::new(self.provider.clone(), self.store.clone(), status)
    }

    /// Open a course-view session by identity; `None` surfaces the
    /// missing-selector error for callers that lost their route state.
    pub async fn open_course(&self, selector: Option<&str>) -> Result<CourseSession, SessionError> {
        CourseSession::open(self.provider.clone(), selector).await
    }

    /// One-shot listing projected to card-ready overviews.
    pub async fn course_overviews(
        &self,
        query: &CourseQuery,
    ) -> Result<Vec<CourseOverview>, FetchError> {
        let listing = Listing::for_status(query.status);
        let courses = self.provider.list_courses(query).await?;
        Ok(courses.iter().map(|c| CourseOverview::of(c, listing)).collect())
    }
}
