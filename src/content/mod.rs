mod blocks;
mod curriculum;
mod model;
mod outline;

pub use blocks::{parse, DisplayBlock};
pub use curriculum::{Grade, Module, Topic};
pub use model::{
    option_index, option_label, Content, ContentType, Difficulty, Exercise, GlossaryTerm,
    QuizOption, QuizQuestion, UnknownContentType,
};
pub use outline::{outline, Heading};
