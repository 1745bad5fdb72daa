use log::{debug, warn};

use super::{ExerciseSession, QuizSession};
use crate::content::{
    outline, parse, Content, ContentType, DisplayBlock, GlossaryTerm, Heading,
};

/// Everything one mounted content screen needs to render and interact.
#[derive(Debug, Clone)]
pub enum Screen {
    Glossary(Vec<GlossaryTerm>),
    Theory {
        blocks: Vec<DisplayBlock>,
        outline: Vec<Heading>,
    },
    Exercises {
        kind: ContentType,
        session: ExerciseSession,
    },
    Quiz(QuizSession),
    /// the payload does not carry what its content type promises
    Empty,
}

impl From<Content> for Screen {
    fn from(content: Content) -> Self {
        if content.is_empty() {
            debug!(
                "content '{}' of module {} has nothing to render",
                content.content_type, content.module_id
            );
            return Screen::Empty;
        }

        match content.content_type {
            ContentType::Glossary => Screen::Glossary(content.glossary_terms),
            ContentType::Theory => {
                let blocks = parse(content.theory_content.as_deref().unwrap_or_default());
                let outline = outline(&blocks);
                Screen::Theory { blocks, outline }
            }
            kind @ (ContentType::LearningExercises | ContentType::PracticeExercises) => {
                Screen::Exercises {
                    kind,
                    session: ExerciseSession::new(content.exercises),
                }
            }
            ContentType::Quiz => Screen::Quiz(QuizSession::new(content.quiz_questions)),
        }
    }
}

/// Identifies one content request issued by a [`ScreenSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub enum SlotState {
    Loading,
    Ready(Screen),
    NotFound,
}

/// State owned by one mounted screen. Responses that arrive for an older
/// request, or after the screen was unmounted, are dropped.
#[derive(Debug, Clone)]
pub struct ScreenSlot {
    generation: u64,
    mounted: bool,
    state: SlotState,
}

impl Default for ScreenSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenSlot {
    pub fn new() -> Self {
        Self {
            generation: 0,
            mounted: true,
            state: SlotState::Loading,
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = SlotState::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a fetch result. `None` covers both a missing document and a
    /// failed request. Returns false when the result was dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, content: Option<Content>) -> bool {
        if !self.mounted {
            warn!("content arrived after unmount, dropping it");
            return false;
        }
        if ticket.0 != self.generation {
            warn!(
                "stale content response {} (current {}), dropping it",
                ticket.0, self.generation
            );
            return false;
        }

        self.state = match content {
            Some(content) => SlotState::Ready(Screen::from(content)),
            None => SlotState::NotFound,
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn screen(&self) -> Option<&Screen> {
        match &self.state {
            SlotState::Ready(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn screen_mut(&mut self) -> Option<&mut Screen> {
        match &mut self.state {
            SlotState::Ready(screen) => Some(screen),
            _ => None,
        }
    }
}
