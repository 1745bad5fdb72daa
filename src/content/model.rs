use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Which rendering/interaction path a piece of module content takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Glossary,
    Theory,
    LearningExercises,
    PracticeExercises,
    Quiz,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Glossary,
        ContentType::Theory,
        ContentType::LearningExercises,
        ContentType::PracticeExercises,
        ContentType::Quiz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Glossary => "glossary",
            ContentType::Theory => "theory",
            ContentType::LearningExercises => "learning_exercises",
            ContentType::PracticeExercises => "practice_exercises",
            ContentType::Quiz => "quiz",
        }
    }

    pub fn is_exercises(&self) -> bool {
        matches!(
            self,
            ContentType::LearningExercises | ContentType::PracticeExercises
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown content type '{0}', expected one of glossary, theory, learning_exercises, practice_exercises, quiz")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    #[serde(rename = "option_text")]
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Difficulty label of an exercise. Labels the backend does not know about
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(s),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
            Difficulty::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub problem: String,
    pub options: Vec<QuizOption>,
    pub difficulty: Difficulty,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

/// One piece of module content, keyed by `(module_id, content_type)`.
///
/// Only the field matching `content_type` is expected to be populated; the
/// others deserialize as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub module_id: String,

    pub content_type: ContentType,

    #[serde(default)]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub glossary_terms: Vec<GlossaryTerm>,

    #[serde(default)]
    pub theory_content: Option<String>,

    /// learning and practice exercises share this field
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exercises: Vec<Exercise>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub quiz_questions: Vec<QuizQuestion>,
}

impl Content {
    /// True when the field selected by `content_type` has nothing to render.
    pub fn is_empty(&self) -> bool {
        match self.content_type {
            ContentType::Glossary => self.glossary_terms.is_empty(),
            ContentType::Theory => self.theory_content.as_deref().map_or(true, str::is_empty),
            ContentType::LearningExercises | ContentType::PracticeExercises => {
                self.exercises.is_empty()
            }
            ContentType::Quiz => self.quiz_questions.is_empty(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Display label of an option: `A`, `B`, ... and plain numbers past `Z`.
pub fn option_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Inverse of [`option_label`], bounded by `option_count`. Letters are
/// case-insensitive and 1-based numbers are accepted for any option, which
/// is the only way to reach options past `Z`.
pub fn option_index(label: &str, option_count: usize) -> Option<usize> {
    let label = label.trim();
    let index = if let Ok(number) = label.parse::<usize>() {
        number.checked_sub(1)?
    } else {
        let mut chars = label.chars();
        let c = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() || !c.is_ascii_uppercase() {
            return None;
        }
        (c as u8 - b'A') as usize
    };
    (index < option_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_wire_names() {
        for t in ContentType::ALL {
            assert_eq!(t.as_str().parse::<ContentType>(), Ok(t));
            assert_eq!(
                serde_json::to_string(&t).unwrap(),
                format!("\"{}\"", t.as_str())
            );
        }
        assert_eq!(
            "lesson".parse::<ContentType>(),
            Err(UnknownContentType("lesson".to_string()))
        );
    }

    #[test]
    fn deserializes_backend_quiz() {
        let json = r#"{
            "_id": "665f1c2e9b1e8a0012345678",
            "module_id": "665f1c2e9b1e8a0000000001",
            "content_type": "quiz",
            "title": "Quiz de evaluación",
            "glossary_terms": [],
            "theory_content": null,
            "exercises": null,
            "quiz_questions": [
                {
                    "question": "¿Cuál es el opuesto de -5?",
                    "options": [
                        {"option_text": "-5", "is_correct": false},
                        {"option_text": "5", "is_correct": true}
                    ],
                    "explanation": "El opuesto cambia el signo."
                }
            ],
            "created_at": "2024-06-04T12:00:00"
        }"#;

        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.content_type, ContentType::Quiz);
        assert_eq!(content.id.as_deref(), Some("665f1c2e9b1e8a0012345678"));
        assert!(content.exercises.is_empty());
        assert_eq!(content.quiz_questions.len(), 1);
        assert_eq!(content.quiz_questions[0].options[1].text, "5");
        assert!(content.quiz_questions[0].options[1].is_correct);
        assert!(!content.is_empty());
    }

    #[test]
    fn mismatched_shape_is_empty() {
        let json = r#"{"module_id": "m1", "content_type": "quiz", "title": "Quiz"}"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert!(content.is_empty());

        let json = r#"{"module_id": "m1", "content_type": "theory", "theory_content": ""}"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn difficulty_keeps_unknown_labels() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        let d: Difficulty = serde_json::from_str("\"challenge\"").unwrap();
        assert_eq!(d, Difficulty::Other("challenge".to_string()));
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"challenge\"");
    }

    #[test]
    fn option_labels() {
        assert_eq!(option_label(0), "A");
        assert_eq!(option_label(3), "D");
        assert_eq!(option_index("b", 4), Some(1));
        assert_eq!(option_index(" D ", 4), Some(3));
        assert_eq!(option_index("E", 4), None);
        assert_eq!(option_index("AB", 4), None);
        assert_eq!(option_index("", 4), None);
    }

    #[test]
    fn numeric_labels_reach_every_option() {
        assert_eq!(option_index("1", 4), Some(0));
        assert_eq!(option_index("4", 4), Some(3));
        assert_eq!(option_index("5", 4), None);
        assert_eq!(option_index("0", 4), None);

        let count = 30;
        for index in 0..count {
            assert_eq!(option_index(&option_label(index), count), Some(index));
        }
        assert_eq!(option_label(27), "28");
    }
}
