use crate::{Answer, LikertValue, QuestionId};

/// A single Likert statement in a survey.
///
/// The id, text and section are fixed when the survey is defined; only the
/// answer changes during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Identity of this question within its survey.
    id: QuestionId,

    /// The statement shown to the user.
    text: String,

    /// The section label. Questions with equal labels are scored together.
    section: String,

    answer: Answer,
}

impl Question {
    /// Create a new, unanswered question.
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            section: section.into(),
            answer: Answer::Unanswered,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the statement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the section label.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Get the answer state.
    pub fn answer(&self) -> Answer {
        self.answer
    }

    /// Get the chosen scale point, if answered.
    pub fn value(&self) -> Option<LikertValue> {
        self.answer.value()
    }

    /// Check if this question has been answered.
    pub fn is_answered(&self) -> bool {
        self.answer.is_answered()
    }

    pub(crate) fn set_answer(&mut self, answer: Answer) {
        self.answer = answer;
    }
}
