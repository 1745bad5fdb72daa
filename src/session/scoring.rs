use serde::Serialize;
use std::fmt;

use super::SelectionMap;
use crate::content::{Exercise, QuizOption, QuizQuestion};

/// Anything with an ordered option list that can be answered and graded.
pub trait Question {
    fn prompt(&self) -> &str;
    fn options(&self) -> &[QuizOption];
    fn explanation(&self) -> &str;
}

impl Question for QuizQuestion {
    fn prompt(&self) -> &str {
        &self.question
    }

    fn options(&self) -> &[QuizOption] {
        &self.options
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl Question for Exercise {
    fn prompt(&self) -> &str {
        &self.problem
    }

    fn options(&self) -> &[QuizOption] {
        &self.options
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Number of questions whose selected option is flagged correct. Questions
/// may carry several correct options, any of them counts.
pub fn correct_count<Q: Question>(questions: &[Q], selections: &SelectionMap) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            selections
                .get(index)
                .and_then(|&option| question.options().get(option))
                .is_some_and(|option| option.is_correct)
        })
        .count()
}

/// Percentage of correct answers in `0..=100`, ties rounded up. Unanswered
/// questions count as wrong and an empty question list scores 0.
pub fn score<Q: Question>(questions: &[Q], selections: &SelectionMap) -> u8 {
    percentage(correct_count(questions, selections), questions.len())
}

fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (2 * total)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    KeepPracticing,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Verdict::Excellent
        } else if score >= 60 {
            Verdict::Good
        } else {
            Verdict::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Excellent => "¡Excelente trabajo!",
            Verdict::Good => "¡Buen trabajo!",
            Verdict::KeepPracticing => "Sigue practicando",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of grading a quiz, fixed at the moment of submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub correct: usize,
    pub total: usize,
    pub score: u8,
    pub verdict: Verdict,
}

impl GradeReport {
    pub fn grade<Q: Question>(questions: &[Q], selections: &SelectionMap) -> Self {
        let correct = correct_count(questions, selections);
        let score = percentage(correct, questions.len());
        Self {
            correct,
            total: questions.len(),
            score,
            verdict: Verdict::from_score(score),
        }
    }
}
