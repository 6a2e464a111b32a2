//! Sidebar navigation state for one course-view session: which sections are
//! expanded and which lesson is active. Transitions are by-value snapshot
//! functions; the rendering layer observes replaced snapshots.

use std::collections::HashSet;

use crate::model::{Course, Lesson};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    active_lesson: Option<String>,
    expanded: HashSet<String>,
}

impl Navigation {
    /// Initial state for a freshly loaded course: first section expanded and
    /// its first lesson active. A course without sections yields the empty
    /// state, which is a valid "no content" display, not an error.
    pub fn for_course(course: &Course) -> Self {
        let mut nav = Self::default();
        if let Some(first) = course.sections.first() {
            nav.expanded.insert(first.id.clone());
            if let Some(lesson) = first.lessons.first() {
                nav.active_lesson = Some(lesson.id.clone());
            }
        }
        tracing::debug!(course = %course.id, active = ?nav.active_lesson, "navigation initialized");
        nav
    }

    /// Symmetric-difference membership update. Any number of sections may be
    /// expanded at once.
    #[must_use]
    pub fn toggle_section(mut self, section_id: &str) -> Self {
        if !self.expanded.remove(section_id) {
            self.expanded.insert(section_id.to_string());
        }
        self
    }

    /// Unconditionally makes the given lesson the active one. The caller is
    /// trusted to pass a lesson from the current course tree.
    #[must_use]
    pub fn select_lesson(mut self, lesson: &Lesson) -> Self {
        tracing::debug!(lesson = %lesson.id, "lesson selected");
        self.active_lesson = Some(lesson.id.clone());
        self
    }

    pub fn active_lesson(&self) -> Option<&str> {
        self.active_lesson.as_deref()
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.contains(section_id)
    }

    pub fn expanded_sections(&self) -> &HashSet<String> {
        &self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseStatus, LessonKind, Section};

    fn lesson(id: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: id.into(),
            kind: LessonKind::Text,
            video_key: None,
            video_duration: 0,
            free_preview: false,
            description: None,
            resources: vec![],
            code_snippets: vec![],
            quizzes: vec![],
        }
    }

    fn course(sections: Vec<Section>) -> Course {
        Course {
            id: "c1".into(),
            title: "Course".into(),
            description: None,
            category: None,
            price: 0.0,
            rating: None,
            enrolled_count: 0,
            thumbnail: None,
            status: CourseStatus::Active,
            sections,
            updated_at: None,
        }
    }

    fn two_sections() -> Course {
        course(vec![
            Section { id: "A".into(), title: "A".into(), lessons: vec![lesson("L1"), lesson("L2")] },
            Section { id: "B".into(), title: "B".into(), lessons: vec![lesson("L3")] },
        ])
    }

    #[test]
    fn initializes_to_first_section_and_lesson() {
        let nav = Navigation::for_course(&two_sections());
        assert!(nav.is_expanded("A"));
        assert!(!nav.is_expanded("B"));
        assert_eq!(nav.active_lesson(), Some("L1"));
    }

    #[test]
    fn empty_course_initializes_empty() {
        let nav = Navigation::for_course(&course(vec![]));
        assert_eq!(nav.active_lesson(), None);
        assert!(nav.expanded_sections().is_empty());
    }

    #[test]
    fn first_section_without_lessons_still_expands() {
        let nav = Navigation::for_course(&course(vec![Section {
            id: "A".into(),
            title: "A".into(),
            lessons: vec![],
        }]));
        assert!(nav.is_expanded("A"));
        assert_eq!(nav.active_lesson(), None);
    }

    #[test]
    fn double_toggle_restores_expanded_set() {
        let nav = Navigation::for_course(&two_sections());
        let before = nav.expanded_sections().clone();
        let nav = nav.toggle_section("B").toggle_section("B");
        assert_eq!(nav.expanded_sections(), &before);
    }

    #[test]
    fn multiple_sections_expand_independently() {
        let nav = Navigation::for_course(&two_sections()).toggle_section("B");
        assert!(nav.is_expanded("A"));
        assert!(nav.is_expanded("B"));
        let nav = nav.toggle_section("A");
        assert!(!nav.is_expanded("A"));
        assert!(nav.is_expanded("B"));
    }

    #[test]
    fn select_lesson_replaces_active_unconditionally() {
        let c = two_sections();
        let nav = Navigation::for_course(&c);
        let l3 = c.find_lesson("L3").unwrap();
        let nav = nav.select_lesson(l3);
        assert_eq!(nav.active_lesson(), Some("L3"));
        // collapsing a section never clears the active lesson
        let nav = nav.toggle_section("B");
        assert_eq!(nav.active_lesson(), Some("L3"));
    }
}
