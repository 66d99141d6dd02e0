//! The learner's in-progress selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from question id to the selected choice id.
///
/// One entry per question; absence means unanswered. Only the engine mutates
/// it, so outside the crate it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerState {
    selections: BTreeMap<String, String>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The choice selected for a question, if any.
    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.selections.get(question_id).map(String::as_str)
    }

    pub fn is_selected(&self, question_id: &str, choice_id: &str) -> bool {
        self.selected(question_id) == Some(choice_id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(q, c)| (q.as_str(), c.as_str()))
    }

    /// Record a selection, replacing any earlier one for the same question.
    pub(crate) fn record(&mut self, question_id: &str, choice_id: &str) -> Option<String> {
        self.selections
            .insert(question_id.to_string(), choice_id.to_string())
    }

    pub(crate) fn clear(&mut self) {
        self.selections.clear();
    }
}
