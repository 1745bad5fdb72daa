use log::warn;

use super::{OptionMark, Question, SelectionError, SelectionStore};
use crate::content::Exercise;

/// Learning or practice exercises. Each exercise reveals its explanation as
/// soon as it has a pick, and picks stay changeable afterwards.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    exercises: Vec<Exercise>,
    store: SelectionStore,
}

impl ExerciseSession {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let store = SelectionStore::new(exercises.iter().map(|e| e.options.len()).collect());
        Self { exercises, store }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn select(&mut self, exercise: usize, option: usize) -> Result<(), SelectionError> {
        self.store.select(exercise, option).inspect_err(|e| {
            warn!("exercise selection ({}, {}) ignored: {}", exercise, option, e);
        })
    }

    pub fn is_selected(&self, exercise: usize, option: usize) -> bool {
        self.store.is_selected(exercise, option)
    }

    pub fn selected(&self, exercise: usize) -> Option<usize> {
        self.store.selected(exercise)
    }

    pub fn is_revealed(&self, exercise: usize) -> bool {
        self.store.has_selection(exercise)
    }

    pub fn explanation(&self, exercise: usize) -> Option<&str> {
        if !self.is_revealed(exercise) {
            return None;
        }
        self.exercises.get(exercise).map(|e| e.explanation())
    }

    pub fn option_mark(&self, exercise: usize, option: usize) -> OptionMark {
        if self.store.is_selected(exercise, option) {
            OptionMark::Selected
        } else {
            OptionMark::Idle
        }
    }
}
