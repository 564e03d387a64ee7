use crate::QuestionId;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// No question with this id exists in the survey.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// Two questions share the same id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// An answer outside the Likert scale.
    #[error("Value {0} is outside the Likert scale 1..=7")]
    OutOfScale(i64),

    /// Question ids must not be empty.
    #[error("Question id must not be empty")]
    EmptyId,

    /// The question catalogue could not be parsed.
    #[error("Invalid catalogue: {0}")]
    Catalog(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a catalogue error from any error type.
    pub fn catalog(err: impl Into<anyhow::Error>) -> Self {
        Self::Catalog(err.into())
    }

    /// Check if this error is about a question id the survey does not know.
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, Self::UnknownQuestion(_))
    }
}
