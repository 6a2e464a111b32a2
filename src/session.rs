//! One course-view session: a course snapshot plus the navigation and quiz
//! state that live and die with it. Nothing here is persisted; navigating
//! away drops the whole session.

use std::sync::Arc;

use crate::catalog::{self, CourseOverview, Listing};
use crate::error::{FetchError, SessionError};
use crate::model::{Course, Lesson, LessonKind, Quiz, Resource};
use crate::navigation::Navigation;
use crate::providers::CourseProvider;
use crate::quiz::QuizSession;

type LessonChangeHook = Box<dyn Fn() + Send + Sync>;

pub struct CourseSession {
    provider: Arc<dyn CourseProvider>,
    course: Course,
    nav: Navigation,
    quiz: QuizSession,
    /// Presentation obligation: reset the viewport scroll on every lesson
    /// selection.
    lesson_change_hook: Option<LessonChangeHook>,
}

impl std::fmt::Debug for CourseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseSession")
            .field("provider", &self.provider.name())
            .field("course", &self.course)
            .field("nav", &self.nav)
            .field("quiz", &self.quiz)
            .field(
                "lesson_change_hook",
                &self.lesson_change_hook.as_ref().map(|_| "<hook>"),
            )
            .finish()
    }
}

impl CourseSession {
    /// Open a single-course view. `None` means no course identity was
    /// available, the `MissingSelector` terminal error for this view.
    pub async fn open(
        provider: Arc<dyn CourseProvider>,
        selector: Option<&str>,
    ) -> Result<Self, SessionError> {
        let course_id = selector.ok_or(SessionError::MissingSelector)?;
        let course = provider.fetch_course(course_id).await?;
        tracing::info!(course = %course.id, provider = provider.name(), "course session opened");
        Ok(Self {
            nav: Navigation::for_course(&course),
            quiz: QuizSession::new(),
            course,
            provider,
            lesson_change_hook: None,
        })
    }

    pub fn on_lesson_change(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.lesson_change_hook = Some(Box::new(hook));
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn toggle_section(&mut self, section_id: &str) {
        self.nav = std::mem::take(&mut self.nav).toggle_section(section_id);
    }

    /// Make a lesson active. Rebuilds the quiz state only when the active
    /// lesson actually changed (reselecting the same lesson keeps answers),
    /// and fires the scroll hook on every selection. Returns `false` when
    /// the id is not part of this course's tree.
    pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
        let Some(lesson) = self.course.find_lesson(lesson_id).cloned() else {
            tracing::warn!(lesson = lesson_id, "select for unknown lesson ignored");
            return false;
        };
        let changed = self.nav.active_lesson() != Some(lesson_id);
        self.nav = std::mem::take(&mut self.nav).select_lesson(&lesson);
        if changed {
            self.quiz = QuizSession::new();
        }
        if let Some(hook) = &self.lesson_change_hook {
            hook();
        }
        true
    }

    pub fn active_lesson(&self) -> Option<&Lesson> {
        self.nav.active_lesson().and_then(|id| self.course.find_lesson(id))
    }

    /// Quizzes of the active lesson, in authored order.
    pub fn active_quizzes(&self) -> &[Quiz] {
        self.active_lesson().map(|l| l.quizzes.as_slice()).unwrap_or(&[])
    }

    pub fn answer(&mut self, question: usize, option: usize) {
        self.quiz = std::mem::take(&mut self.quiz).select_option(question, option);
    }

    pub fn submit_answer(&mut self, question: usize) {
        self.quiz = std::mem::take(&mut self.quiz).submit(question);
    }

    pub fn is_answer_correct(&self, question: usize) -> Option<bool> {
        let quiz = self.active_quizzes().get(question)?;
        self.quiz.is_correct(question, quiz)
    }

    pub fn reveals_correct(&self, question: usize, option: usize) -> Option<bool> {
        let quiz = self.active_quizzes().get(question)?;
        self.quiz.reveals_correct(question, quiz, option)
    }

    /// Embed URL for the active lesson's video, resolved through the
    /// provider. `Ok(None)` covers non-video lessons and the tolerated
    /// video-without-key case, which renders as a placeholder.
    pub async fn video_embed_url(&self) -> Result<Option<String>, FetchError> {
        let Some(lesson) = self.active_lesson() else {
            return Ok(None);
        };
        if lesson.kind != LessonKind::Video {
            return Ok(None);
        }
        let Some(key) = &lesson.video_key else {
            tracing::debug!(lesson = %lesson.id, "video lesson without key, placeholder");
            return Ok(None);
        };
        Ok(Some(self.provider.resolve_video(key).await?))
    }

    /// Active lesson's attachments with scheme-normalized URLs.
    pub fn resources(&self) -> Vec<Resource> {
        self.active_lesson()
            .map(|l| {
                l.resources
                    .iter()
                    .map(|r| Resource {
                        id: r.id.clone(),
                        title: r.title.clone(),
                        url: catalog::normalize_asset_url(&r.url),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn overview(&self) -> CourseOverview {
        CourseOverview::of(&self.course, Listing::for_status(Some(self.course.status)))
    }

    pub fn section_duration(&self, section_id: &str) -> Option<String> {
        self.course
            .find_section(section_id)
            .map(|s| catalog::total_duration(&s.lessons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseStatus, QuizOption, Section};
    use crate::providers::StaticProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quiz_lesson(id: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: id.into(),
            kind: LessonKind::Quiz,
            video_key: None,
            video_duration: 0,
            free_preview: false,
            description: None,
            resources: vec![Resource {
                id: "r1".into(),
                title: "Slides".into(),
                url: "cdn.example.com/slides.pdf".into(),
            }],
            code_snippets: vec![],
            quizzes: vec![Quiz {
                id: format!("{id}-q"),
                question: "?".into(),
                options: vec![
                    QuizOption { id: "o0".into(), text: "wrong".into(), correct: false },
                    QuizOption { id: "o1".into(), text: "right".into(), correct: true },
                ],
            }],
        }
    }

    fn video_lesson(id: &str, key: Option<&str>) -> Lesson {
        Lesson {
            id: id.into(),
            title: id.into(),
            kind: LessonKind::Video,
            video_key: key.map(Into::into),
            video_duration: 60,
            free_preview: false,
            description: None,
            resources: vec![],
            code_snippets: vec![],
            quizzes: vec![],
        }
    }

    fn fixture() -> Course {
        Course {
            id: "c1".into(),
            title: "Testing in Rust".into(),
            description: None,
            category: None,
            price: 0.0,
            rating: None,
            enrolled_count: 0,
            thumbnail: None,
            status: CourseStatus::Active,
            sections: vec![
                Section {
                    id: "s1".into(),
                    title: "Start".into(),
                    lessons: vec![video_lesson("l1", Some("vk-1")), quiz_lesson("l2")],
                },
                Section {
                    id: "s2".into(),
                    title: "More".into(),
                    lessons: vec![video_lesson("l3", None)],
                },
            ],
            updated_at: None,
        }
    }

    async fn open_fixture() -> CourseSession {
        let provider = Arc::new(StaticProvider::new(vec![fixture()]));
        CourseSession::open(provider, Some("c1")).await.unwrap()
    }

    #[tokio::test]
    async fn missing_selector_is_terminal() {
        let provider = Arc::new(StaticProvider::new(vec![fixture()]));
        let err = CourseSession::open(provider, None).await.unwrap_err();
        assert!(matches!(err, SessionError::MissingSelector));
    }

    #[tokio::test]
    async fn opens_with_first_lesson_active() {
        let session = open_fixture().await;
        assert_eq!(session.active_lesson().unwrap().id, "l1");
        assert!(session.navigation().is_expanded("s1"));
        assert!(!session.navigation().is_expanded("s2"));
    }

    #[tokio::test]
    async fn lesson_change_resets_quiz_state_and_fires_hook() {
        let mut session = open_fixture().await;
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        session.on_lesson_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.select_lesson("l2");
        session.answer(0, 1);
        session.submit_answer(0);
        assert_eq!(session.is_answer_correct(0), Some(true));

        // reselecting the same lesson keeps the submitted state
        session.select_lesson("l2");
        assert!(session.quiz().is_submitted(0));

        // moving to another lesson rebuilds it
        session.select_lesson("l3");
        assert!(!session.quiz().is_submitted(0));

        assert_eq!(fired.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn unknown_lesson_selection_is_ignored() {
        let mut session = open_fixture().await;
        assert!(!session.select_lesson("ghost"));
        assert_eq!(session.active_lesson().unwrap().id, "l1");
    }

    #[tokio::test]
    async fn grading_reveals_the_answer_key() {
        let mut session = open_fixture().await;
        session.select_lesson("l2");
        session.answer(0, 0);
        session.submit_answer(0);
        assert_eq!(session.is_answer_correct(0), Some(false));
        assert_eq!(session.reveals_correct(0, 1), Some(true));
    }

    #[tokio::test]
    async fn video_resolution_and_placeholder_cases() {
        let mut session = open_fixture().await;
        let url = session.video_embed_url().await.unwrap();
        assert_eq!(url.as_deref(), Some("mock://video/vk-1"));

        // tolerated: video lesson without a key resolves to a placeholder
        session.select_lesson("l3");
        assert_eq!(session.video_embed_url().await.unwrap(), None);

        // non-video lessons have no embed
        session.select_lesson("l2");
        assert_eq!(session.video_embed_url().await.unwrap(), None);
    }

    #[tokio::test]
    async fn resources_come_back_normalized() {
        let mut session = open_fixture().await;
        session.select_lesson("l2");
        let resources = session.resources();
        assert_eq!(resources[0].url, "https://cdn.example.com/slides.pdf");
    }

    #[tokio::test]
    async fn section_durations_sum_per_section() {
        let session = open_fixture().await;
        assert_eq!(session.section_duration("s1").as_deref(), Some("1m 0s"));
        assert_eq!(session.section_duration("ghost"), None);
    }
}
