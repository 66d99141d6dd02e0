//! Core data model types for orthoquiz.
//!
//! A quiz arrives either from the platform backend (Mongo-style field names
//! such as `_id` and `questionText`) or from a local quiz file. Both spellings
//! deserialize into the same types; serialization always uses snake_case.

use serde::{Deserialize, Serialize};

/// An ordered set of questions graded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    #[serde(alias = "_id")]
    pub id: String,
    /// Title shown above the questions.
    #[serde(default)]
    pub title: String,
    /// Lesson this quiz belongs to, when known.
    #[serde(default, alias = "lessonId", alias = "lesson")]
    pub lesson_id: Option<String>,
    /// Questions in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A prompt with a list of selectable choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "_id")]
    pub id: String,
    /// The prompt text.
    #[serde(default, alias = "questionText")]
    pub text: String,
    /// Choices in presentation order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// Whether content authors marked this choice as correct.
    #[serde(default, alias = "isCorrect")]
    pub is_correct: bool,
}

impl Quiz {
    /// Look up a question by id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Number of questions, which is also the maximum score.
    pub fn total(&self) -> u32 {
        crate::scoring::saturating_count(self.questions.len())
    }
}

impl Question {
    /// First choice with the given id.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// Number of choices flagged correct. Well-formed questions have one.
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_correct).count()
    }
}

impl Choice {
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_backend_payload() {
        let json = r#"{
            "_id": "665f1",
            "title": "The Nicene Creed",
            "lesson": "lesson-7",
            "questions": [
                {
                    "_id": "q1",
                    "questionText": "How many articles does the Creed have?",
                    "choices": [
                        {"_id": "c1", "text": "Twelve", "isCorrect": true},
                        {"_id": "c2", "text": "Seven", "isCorrect": false}
                    ]
                }
            ],
            "__v": 0
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.id, "665f1");
        assert_eq!(quiz.lesson_id.as_deref(), Some("lesson-7"));
        assert_eq!(quiz.questions[0].text, "How many articles does the Creed have?");
        assert!(quiz.questions[0].choices[0].is_correct);
        assert!(!quiz.questions[0].choices[1].is_correct);
    }

    #[test]
    fn serializes_snake_case_names() {
        let quiz = Quiz {
            id: "quiz".into(),
            title: "T".into(),
            lesson_id: None,
            questions: vec![Question {
                id: "q1".into(),
                text: "?".into(),
                choices: vec![Choice::new("c1", "yes", true)],
            }],
        };
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(json.contains("\"is_correct\":true"));
        assert!(!json.contains("isCorrect"));
    }

    #[test]
    fn lookup_helpers() {
        let question = Question {
            id: "q1".into(),
            text: "Pick".into(),
            choices: vec![
                Choice::new("a", "A", true),
                Choice::new("b", "B", true),
                Choice::new("c", "C", false),
            ],
        };
        assert_eq!(question.choice("b").map(|c| c.text.as_str()), Some("B"));
        assert!(question.choice("z").is_none());
        assert_eq!(question.correct_count(), 2);
    }
}
