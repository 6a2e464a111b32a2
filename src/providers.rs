//! Content provider boundary. The collaborator owns storage, validation,
//! and asset hosting; this crate only consumes course snapshots through the
//! [`CourseProvider`] seam and treats every URL it hands back as opaque.

pub mod config;
pub mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::{Course, CourseStatus};

/// Listing/search selector: an optional status filter plus a keyword that
/// is only ever sent on explicit confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub status: Option<CourseStatus>,
    pub keyword: String,
}

impl CourseQuery {
    pub fn status(status: CourseStatus) -> Self {
        Self { status: Some(status), keyword: String::new() }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Stable cache key for the listing this query produces.
    pub fn cache_key(&self) -> String {
        let status = match self.status {
            Some(s) => s.to_string(),
            None => "any".to_string(),
        };
        format!("courses|{}|{}", status, norm_keyword(&self.keyword))
    }
}

fn norm_keyword(q: &str) -> String {
    let trimmed = q.trim().to_ascii_lowercase();
    let mut out = String::with_capacity(trimmed.len());
    let mut last_space = false;
    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out
}

/// The one capability the consumption engine depends on.
#[async_trait]
pub trait CourseProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch one course snapshot by identity.
    async fn fetch_course(&self, course_id: &str) -> Result<Course, FetchError>;

    /// List courses matching a status/keyword selector.
    async fn list_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, FetchError>;

    /// Resolve a lesson's video key into a playable embed URL.
    async fn resolve_video(&self, video_key: &str) -> Result<String, FetchError>;
}

/// Provider backed by an in-memory course list. Used in tests and demos,
/// and by embedders that preview authored content without a collaborator.
pub struct StaticProvider {
    name: String,
    courses: Vec<Course>,
}

impl StaticProvider {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { name: "static".to_string(), courses }
    }

    pub fn named(name: impl Into<String>, courses: Vec<Course>) -> Self {
        Self { name: name.into(), courses }
    }
}

#[async_trait]
impl CourseProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, FetchError> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| FetchError::Api(format!("course {course_id} not found")))
    }

    async fn list_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, FetchError> {
        let keyword = norm_keyword(&query.keyword);
        Ok(self
            .courses
            .iter()
            .filter(|c| query.status.map_or(true, |s| c.status == s))
            .filter(|c| {
                keyword.is_empty()
                    || c.title.to_ascii_lowercase().contains(&keyword)
                    || c.category.as_deref().is_some_and(|cat| cat.to_ascii_lowercase().contains(&keyword))
            })
            .cloned()
            .collect())
    }

    async fn resolve_video(&self, video_key: &str) -> Result<String, FetchError> {
        Ok(format!("mock://video/{video_key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseStatus, Section};

    fn course(id: &str, title: &str, status: CourseStatus) -> Course {
        Course {
            id: id.into(),
            title: title.into(),
            description: None,
            category: Some("Programming".into()),
            price: 0.0,
            rating: None,
            enrolled_count: 0,
            thumbnail: None,
            status,
            sections: Vec::<Section>::new(),
            updated_at: None,
        }
    }

    #[test]
    fn cache_key_normalizes_keyword_whitespace_and_case() {
        let a = CourseQuery::status(CourseStatus::Active).with_keyword("  Rust   Basics ");
        let b = CourseQuery::status(CourseStatus::Active).with_keyword("rust basics");
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "courses|Active|rust basics");
    }

    #[tokio::test]
    async fn static_provider_filters_by_status_and_keyword() {
        let provider = StaticProvider::new(vec![
            course("c1", "Intro to Rust", CourseStatus::Active),
            course("c2", "Advanced Go", CourseStatus::Active),
            course("c3", "Old Rust Course", CourseStatus::Inactive),
        ]);

        let active = CourseQuery::status(CourseStatus::Active);
        let all = provider.list_courses(&active).await.unwrap();
        assert_eq!(all.len(), 2);

        let rust = provider.list_courses(&active.clone().with_keyword("RUST")).await.unwrap();
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].id, "c1");

        let archive = CourseQuery::status(CourseStatus::Inactive).with_keyword("rust");
        assert_eq!(provider.list_courses(&archive).await.unwrap()[0].id, "c3");
    }

    #[tokio::test]
    async fn static_provider_reports_missing_courses_as_api_errors() {
        let provider = StaticProvider::new(vec![]);
        let err = provider.fetch_course("nope").await.unwrap_err();
        assert_eq!(err.message(), "course nope not found");
    }
}
