mod exercise;
mod quiz;
mod screen;
mod scoring;
mod selection;

pub use exercise::ExerciseSession;
pub use quiz::{OptionMark, QuizSession, QuizState};
pub use screen::{LoadTicket, Screen, ScreenSlot, SlotState};
pub use scoring::{correct_count, score, GradeReport, Question, Verdict};
pub use selection::{SelectionError, SelectionMap, SelectionStore};
