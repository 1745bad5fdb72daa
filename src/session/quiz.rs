use log::{debug, warn};
use serde::Serialize;

use super::{GradeReport, Question, SelectionError, SelectionStore};
use crate::content::QuizQuestion;

/// How an option should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Idle,
    Selected,
    /// graded, option is flagged correct
    Correct,
    /// graded, the user's pick is wrong
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    InProgress,
    Graded,
}

/// A quiz being answered. Picks stay open until [`QuizSession::submit`],
/// after which they are frozen and correctness is revealed everywhere.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    store: SelectionStore,
    report: Option<GradeReport>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let store = SelectionStore::new(questions.iter().map(|q| q.options.len()).collect());
        Self {
            questions,
            store,
            report: None,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn state(&self) -> QuizState {
        if self.report.is_some() {
            QuizState::Graded
        } else {
            QuizState::InProgress
        }
    }

    pub fn is_graded(&self) -> bool {
        self.report.is_some()
    }

    pub fn select(&mut self, question: usize, option: usize) -> Result<(), SelectionError> {
        self.store.select(question, option).inspect_err(|e| {
            warn!("quiz selection ({}, {}) ignored: {}", question, option, e);
        })
    }

    pub fn is_selected(&self, question: usize, option: usize) -> bool {
        self.store.is_selected(question, option)
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.store.selected(question)
    }

    pub fn answered(&self) -> usize {
        self.store.answered()
    }

    /// Submission is offered once every question has a pick, whatever the
    /// picks are.
    pub fn can_submit(&self) -> bool {
        !self.is_graded() && self.store.is_complete()
    }

    /// Grades the quiz and freezes the picks. Submitting again returns the
    /// report computed the first time.
    pub fn submit(&mut self) -> GradeReport {
        if let Some(report) = self.report {
            return report;
        }

        self.store.freeze();
        let report = GradeReport::grade(&self.questions, self.store.selections());
        debug!(
            "quiz graded: {}/{} correct, score {}",
            report.correct, report.total, report.score
        );
        self.report = Some(report);
        report
    }

    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    pub fn option_mark(&self, question: usize, option: usize) -> OptionMark {
        let selected = self.store.is_selected(question, option);
        if !self.is_graded() {
            return if selected {
                OptionMark::Selected
            } else {
                OptionMark::Idle
            };
        }

        let is_correct = self
            .questions
            .get(question)
            .and_then(|q| q.options().get(option))
            .is_some_and(|o| o.is_correct);
        match (is_correct, selected) {
            (true, _) => OptionMark::Correct,
            (false, true) => OptionMark::Incorrect,
            (false, false) => OptionMark::Idle,
        }
    }

    /// Explanations are shown for every question once graded.
    pub fn explanation(&self, question: usize) -> Option<&str> {
        if !self.is_graded() {
            return None;
        }
        self.questions.get(question).map(|q| q.explanation())
    }
}
