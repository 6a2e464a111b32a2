//! Keyword-driven course listing: the cycle between a search box and the
//! collaborator. Keywords are only sent on explicit confirmation (no
//! debounce timer anywhere; the confirm gesture bounds the request rate).
//! Superseded fetches are not cancelled; their responses are discarded on
//! arrival.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::model::{Course, CourseStatus};
use crate::providers::{CourseProvider, CourseQuery};
use crate::store::CatalogStore;

/// Immutable view of the listing state for the rendering layer.
#[derive(Debug, Clone, Default)]
pub struct BrowseSnapshot {
    pub keyword: String,
    pub courses: Vec<Course>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BrowseSnapshot {
    /// Successful fetch, zero matches: the empty-state view, not an error.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.courses.is_empty()
    }
}

#[derive(Default)]
struct BrowseState {
    keyword: String,
    courses: Vec<Course>,
    loading: bool,
    error: Option<String>,
    applied_seq: u64,
}

/// One course-list session.
pub struct CourseBrowser {
    provider: Arc<dyn CourseProvider>,
    store: Arc<dyn CatalogStore>,
    status: Option<CourseStatus>,
    state: Mutex<BrowseState>,
    seq: AtomicU64,
    loaded: AtomicBool,
}

impl CourseBrowser {
    pub fn new(
        provider: Arc<dyn CourseProvider>,
        store: Arc<dyn CatalogStore>,
        status: Option<CourseStatus>,
    ) -> Self {
        Self {
            provider,
            store,
            status,
            state: Mutex::new(BrowseState::default()),
            seq: AtomicU64::new(0),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn status(&self) -> Option<CourseStatus> {
        self.status
    }

    /// Unfiltered initial load, once per session. Consults the injected
    /// store first; a cached listing short-circuits the collaborator.
    pub async fn load(&self) -> BrowseSnapshot {
        if self.loaded.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }
        let query = self.query("");
        if let Ok(Some(payload)) = self.store.get(&query.cache_key()).await {
            if let Ok(courses) = serde_json::from_str::<Vec<Course>>(&payload) {
                tracing::debug!(key = %query.cache_key(), "listing served from store");
                let mut st = self.state.lock().unwrap();
                st.courses = courses;
                return snapshot_of(&st);
            }
        }
        self.fetch(String::new()).await
    }

    /// Confirmed keyword search.
    pub async fn search(&self, keyword: &str) -> BrowseSnapshot {
        self.fetch(keyword.trim().to_string()).await
    }

    /// Back to the unfiltered listing.
    pub async fn clear(&self) -> BrowseSnapshot {
        self.fetch(String::new()).await
    }

    /// Re-issue the last submitted keyword after a failure.
    pub async fn retry(&self) -> BrowseSnapshot {
        let keyword = self.state.lock().unwrap().keyword.clone();
        self.fetch(keyword).await
    }

    pub fn snapshot(&self) -> BrowseSnapshot {
        snapshot_of(&self.state.lock().unwrap())
    }

    fn query(&self, keyword: &str) -> CourseQuery {
        CourseQuery { status: self.status, keyword: keyword.to_string() }
    }

    async fn fetch(&self, keyword: String) -> BrowseSnapshot {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut st = self.state.lock().unwrap();
            st.keyword = keyword.clone();
            st.loading = true;
            st.error = None;
        }
        let query = self.query(&keyword);
        tracing::debug!(seq, keyword = %query.keyword, "listing fetch issued");
        let result = self.provider.list_courses(&query).await;
        self.apply(seq, &query, result).await;
        self.snapshot()
    }

    /// Last-resolved-wins: a response only lands if nothing newer landed
    /// first, so a slow superseded request can never clobber a fresher
    /// listing.
    async fn apply(&self, seq: u64, query: &CourseQuery, result: Result<Vec<Course>, FetchError>) {
        match result {
            Ok(courses) => {
                {
                    let mut st = self.state.lock().unwrap();
                    if seq < st.applied_seq {
                        tracing::debug!(seq, applied = st.applied_seq, "stale listing discarded");
                        return;
                    }
                    st.applied_seq = seq;
                    st.courses = courses.clone();
                    st.loading = false;
                    st.error = None;
                }
                if let Ok(payload) = serde_json::to_string(&courses) {
                    let _ = self.store.put(&query.cache_key(), &payload).await;
                }
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "listing fetch failed");
                let mut st = self.state.lock().unwrap();
                if seq < st.applied_seq {
                    return;
                }
                st.applied_seq = seq;
                st.loading = false;
                // courses stay as they were; the error view offers retry
                st.error = Some(err.message());
            }
        }
    }
}

fn snapshot_of(st: &BrowseState) -> BrowseSnapshot {
    BrowseSnapshot {
        keyword: st.keyword.clone(),
        courses: st.courses.clone(),
        loading: st.loading,
        error: st.error.clone(),
    }
}
