use std::collections::BTreeMap;
use thiserror::Error;

/// Question index to chosen option index.
pub type SelectionMap = BTreeMap<usize, usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("question {question} does not exist, there are {count} questions")]
    QuestionOutOfRange { question: usize, count: usize },

    #[error("question {question} has {count} options, option {option} does not exist")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        count: usize,
    },

    #[error("selections are frozen")]
    Frozen,
}

/// The single current pick per question for one screen session.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    option_counts: Vec<usize>,
    selections: SelectionMap,
    frozen: bool,
}

impl SelectionStore {
    /// `option_counts[i]` is the number of options of question `i`.
    pub fn new(option_counts: Vec<usize>) -> Self {
        Self {
            option_counts,
            selections: SelectionMap::new(),
            frozen: false,
        }
    }

    /// Sets the pick for `question`, replacing any earlier one. On error the
    /// store is left untouched.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), SelectionError> {
        if self.frozen {
            return Err(SelectionError::Frozen);
        }
        let count = *self
            .option_counts
            .get(question)
            .ok_or(SelectionError::QuestionOutOfRange {
                question,
                count: self.option_counts.len(),
            })?;
        if option >= count {
            return Err(SelectionError::OptionOutOfRange {
                question,
                option,
                count,
            });
        }

        self.selections.insert(question, option);
        Ok(())
    }

    pub fn is_selected(&self, question: usize, option: usize) -> bool {
        self.selections.get(&question) == Some(&option)
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    pub fn has_selection(&self, question: usize) -> bool {
        self.selections.contains_key(&question)
    }

    pub fn answered(&self) -> usize {
        self.selections.len()
    }

    pub fn question_count(&self) -> usize {
        self.option_counts.len()
    }

    /// Every question in `0..question_count` has a pick.
    pub fn is_complete(&self) -> bool {
        (0..self.question_count()).all(|q| self.has_selection(q))
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn selections(&self) -> &SelectionMap {
        &self.selections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselect_overwrites() {
        let mut store = SelectionStore::new(vec![3, 2]);
        store.select(0, 1).unwrap();
        store.select(0, 2).unwrap();

        assert!(store.is_selected(0, 2));
        assert!(!store.is_selected(0, 1));
        assert_eq!(store.answered(), 1);
        assert!(!store.has_selection(1));
    }

    #[test]
    fn select_touches_only_its_question() {
        let mut store = SelectionStore::new(vec![2, 2, 2]);
        store.select(0, 0).unwrap();
        store.select(2, 1).unwrap();
        store.select(1, 1).unwrap();

        assert_eq!(store.selected(0), Some(0));
        assert_eq!(store.selected(1), Some(1));
        assert_eq!(store.selected(2), Some(1));
    }

    #[test]
    fn out_of_range_is_rejected_without_change() {
        let mut store = SelectionStore::new(vec![2]);
        store.select(0, 1).unwrap();

        assert_eq!(
            store.select(0, 2),
            Err(SelectionError::OptionOutOfRange {
                question: 0,
                option: 2,
                count: 2
            })
        );
        assert_eq!(
            store.select(1, 0),
            Err(SelectionError::QuestionOutOfRange {
                question: 1,
                count: 1
            })
        );
        assert_eq!(store.selected(0), Some(1));
        assert_eq!(store.answered(), 1);
    }

    #[test]
    fn frozen_store_keeps_selections() {
        let mut store = SelectionStore::new(vec![2, 2]);
        store.select(0, 0).unwrap();
        store.freeze();

        assert_eq!(store.select(0, 1), Err(SelectionError::Frozen));
        assert_eq!(store.select(1, 1), Err(SelectionError::Frozen));
        assert!(store.is_selected(0, 0));
        assert!(!store.has_selection(1));
    }

    #[test]
    fn completeness() {
        let mut store = SelectionStore::new(vec![2, 2, 2]);
        store.select(0, 0).unwrap();
        store.select(2, 0).unwrap();
        assert!(!store.is_complete());
        store.select(1, 1).unwrap();
        assert!(store.is_complete());

        assert!(SelectionStore::new(Vec::new()).is_complete());
    }
}
