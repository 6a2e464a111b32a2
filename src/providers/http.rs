use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::FetchError;
use crate::model::Course;
use crate::providers::config::ProviderConfig;
use crate::providers::{CourseProvider, CourseQuery};

/// Collaborator REST client:
/// `GET courses?status=&keyword=`, `GET courses/{id}`, `GET videos/{key}`.
pub struct HttpProvider {
    name: String,
    base: Url,
    client: reqwest::Client,
}

/// Error payload shape the collaborator uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoResolution {
    embed_url: String,
}

impl HttpProvider {
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        // trailing slash so Url::join keeps the base path
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(
                config
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| format!("lectern/{}", env!("CARGO_PKG_VERSION"))),
            )
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()?;
        Ok(Self { name: "http".to_string(), base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|e| FetchError::Transport(Box::new(e)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(%url, %request_id, "collaborator request");
        let resp = self
            .client
            .get(url)
            .query(query)
            .header("x-request-id", &request_id)
            .send()
            .await
            .map_err(|e| FetchError::Transport(Box::new(e)))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            tracing::warn!(%status, %request_id, ?message, "collaborator request failed");
            return Err(match message {
                Some(m) => FetchError::Api(m),
                None => FetchError::Status(status.as_u16()),
            });
        }

        resp.json().await.map_err(|e| FetchError::Transport(Box::new(e)))
    }
}

#[async_trait]
impl CourseProvider for HttpProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_course(&self, course_id: &str) -> Result<Course, FetchError> {
        let url = self.endpoint(&format!("courses/{course_id}"))?;
        self.get_json(url, &[]).await
    }

    async fn list_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, FetchError> {
        let url = self.endpoint("courses")?;
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        if !query.keyword.trim().is_empty() {
            params.push(("keyword", query.keyword.trim().to_string()));
        }
        self.get_json(url, &params).await
    }

    async fn resolve_video(&self, video_key: &str) -> Result<String, FetchError> {
        let url = self.endpoint(&format!("videos/{video_key}"))?;
        let resolved: VideoResolution = self.get_json(url, &[]).await?;
        Ok(resolved.embed_url)
    }
}
