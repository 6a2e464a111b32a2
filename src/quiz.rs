//! Quiz answering and grading state for the active lesson. Owned by the
//! lesson-view session: switching lessons rebuilds it from scratch.
//!
//! Questions and options are addressed by index into the lesson's quiz list.
//! Submission is one-way: once a question is submitted it can never be
//! re-answered within the session.

use std::collections::{HashMap, HashSet};

use crate::model::Quiz;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    answers: HashMap<usize, usize>,
    submitted: HashSet<usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the chosen option. A no-op for submitted
    /// questions; answers may change freely before submission.
    #[must_use]
    pub fn select_option(mut self, question: usize, option: usize) -> Self {
        if self.submitted.contains(&question) {
            return self;
        }
        self.answers.insert(question, option);
        self
    }

    /// A question can be submitted once it has a recorded answer, and only
    /// once.
    pub fn can_submit(&self, question: usize) -> bool {
        self.answers.contains_key(&question) && !self.submitted.contains(&question)
    }

    /// Lock the question for grading. Rejected (no state change) without a
    /// recorded answer; irreversible afterwards.
    #[must_use]
    pub fn submit(mut self, question: usize) -> Self {
        if !self.can_submit(question) {
            return self;
        }
        tracing::debug!(question, "answer submitted");
        self.submitted.insert(question);
        self
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn is_submitted(&self, question: usize) -> bool {
        self.submitted.contains(&question)
    }

    /// Whether the submitted answer hit the answer key. `None` until the
    /// question is submitted. The key is the quiz's first flagged option,
    /// so extra flagged options grade as incorrect.
    pub fn is_correct(&self, question: usize, quiz: &Quiz) -> Option<bool> {
        if !self.is_submitted(question) {
            return None;
        }
        let selected = self.selected(question)?;
        Some(quiz.correct_option() == Some(selected))
    }

    /// Per-option reveal after submission: the answer key shows as correct
    /// on every option row regardless of what was chosen.
    pub fn reveals_correct(&self, question: usize, quiz: &Quiz, option: usize) -> Option<bool> {
        if !self.is_submitted(question) {
            return None;
        }
        Some(quiz.correct_option() == Some(option))
    }
}
