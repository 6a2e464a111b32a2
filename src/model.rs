use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a course in the collaborator catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    Draft,
    Active,
    Inactive,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "Draft"),
            CourseStatus::Active => write!(f, "Active"),
            CourseStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Course thumbnail as delivered by the collaborator: either a bare URL
/// string or an upload record carrying one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Thumbnail {
    Url(String),
    Upload(UploadedThumbnail),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedThumbnail {
    pub url: String,
}

impl Thumbnail {
    pub fn url(&self) -> &str {
        match self {
            Thumbnail::Url(u) => u,
            Thumbnail::Upload(up) => &up.url,
        }
    }
}

/// One course snapshot. The collaborator constructs the whole tree and a new
/// fetch replaces it wholesale; nothing in this crate edits it in place.
/// Section order is curriculum order and is preserved end-to-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub enrolled_count: u64,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    pub status: CourseStatus,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    /// All lessons in curriculum order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.sections.iter().flat_map(|s| s.lessons.iter())
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons().find(|l| l.id == lesson_id)
    }
}

/// Ordered grouping of lessons. A section with zero lessons is legal and
/// contributes nothing to counts or durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Text,
    Quiz,
}

/// Atomic content unit. A `video` lesson is expected to carry a video key,
/// but its absence is tolerated and rendered as a placeholder downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub kind: LessonKind,
    #[serde(default)]
    pub video_key: Option<String>,
    /// Whole seconds.
    #[serde(default)]
    pub video_duration: u64,
    #[serde(default)]
    pub free_preview: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// Downloadable attachment. The stored URL may lack a scheme; consumers
/// normalize it before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub id: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

impl Quiz {
    /// Index of the answer key. Authoring guarantees exactly one flagged
    /// option; if the data carries more, the first flagged option wins.
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}
