use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{Answer, LikertValue, Question, QuestionId, SurveyError, group_by_section};

/// The state of one assessment session.
///
/// Owns the ordered list of questions; insertion order is display order.
/// There is exactly one writer (the survey view), so no locking is involved:
/// pass the state by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyState {
    questions: Vec<Question>,
}

/// How far a single section has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: String,
    pub answered: usize,
    pub total: usize,
}

impl SectionProgress {
    /// Answered share of the section in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.answered as f64 / self.total as f64
    }
}

impl SurveyState {
    /// Create a survey from its questions.
    ///
    /// Fails if an id is empty or used more than once.
    pub fn new(questions: Vec<Question>) -> Result<Self, SurveyError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.id().is_empty() {
                return Err(SurveyError::EmptyId);
            }
            if !seen.insert(question.id().as_str()) {
                return Err(SurveyError::DuplicateQuestion(question.id().clone()));
            }
        }
        Ok(Self { questions })
    }

    /// Create a survey without questions.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: impl AsRef<str>) -> Option<&Question> {
        let id = id.as_ref();
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Record an answer given as a raw scale point.
    ///
    /// Values outside `1..=7` are rejected with `SurveyError::OutOfScale`.
    /// Unknown ids are rejected with `SurveyError::UnknownQuestion`. In both
    /// cases the state is left unchanged.
    pub fn set_answer(&mut self, id: impl AsRef<str>, value: i64) -> Result<(), SurveyError> {
        let id = id.as_ref();
        let value = LikertValue::new(value).inspect_err(|_| {
            warn!(question = id, value, "rejected answer outside the scale");
        })?;
        self.set_value(id, value)
    }

    /// Record an answer for the question with the given id.
    pub fn set_value(
        &mut self,
        id: impl AsRef<str>,
        value: LikertValue,
    ) -> Result<(), SurveyError> {
        self.update(id.as_ref(), Answer::Answered(value))?;
        debug!(question = id.as_ref(), value = value.get(), "answer recorded");
        Ok(())
    }

    /// Return a single question to the unanswered state.
    pub fn clear_answer(&mut self, id: impl AsRef<str>) -> Result<(), SurveyError> {
        self.update(id.as_ref(), Answer::Unanswered)?;
        debug!(question = id.as_ref(), "answer cleared");
        Ok(())
    }

    fn update(&mut self, id: &str, answer: Answer) -> Result<(), SurveyError> {
        match self.questions.iter_mut().find(|q| q.id() == id) {
            Some(question) => {
                question.set_answer(answer);
                Ok(())
            }
            None => {
                warn!(question = id, "rejected answer for unknown question");
                Err(SurveyError::UnknownQuestion(QuestionId::new(id)))
            }
        }
    }

    /// Check if every question has been answered.
    ///
    /// A survey without questions is complete.
    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(Question::is_answered)
    }

    /// Get the number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    /// Answered share of the whole survey in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.answered_count() as f64 / self.questions.len() as f64
    }

    /// Answered counts per section, in first-seen section order.
    pub fn section_progress(&self) -> Vec<SectionProgress> {
        group_by_section(&self.questions)
            .into_iter()
            .map(|(section, questions)| SectionProgress {
                section: section.to_string(),
                answered: questions.iter().filter(|q| q.is_answered()).count(),
                total: questions.len(),
            })
            .collect()
    }

    /// Clear every answer, keeping question identity and order.
    pub fn reset(&mut self) {
        for question in &mut self.questions {
            question.set_answer(Answer::Unanswered);
        }
        info!(questions = self.questions.len(), "survey reset");
    }
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> SurveyState {
        SurveyState::new(vec![
            Question::new("a", "First", "One"),
            Question::new("b", "Second", "Two"),
            Question::new("c", "Third", "One"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SurveyState::new(vec![
            Question::new("a", "First", "One"),
            Question::new("a", "Again", "One"),
        ]);
        assert!(matches!(result, Err(SurveyError::DuplicateQuestion(id)) if id == "a"));
    }

    #[test]
    fn rejects_empty_ids() {
        let result = SurveyState::new(vec![Question::new("", "First", "One")]);
        assert!(matches!(result, Err(SurveyError::EmptyId)));
    }

    #[test]
    fn unknown_id_leaves_state_untouched() {
        let mut state = three_questions();
        let before = state.clone();

        let err = state.set_answer("zzz", 4).unwrap_err();
        assert!(err.is_unknown_question());
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_scale_leaves_state_untouched() {
        let mut state = three_questions();
        assert!(matches!(
            state.set_answer("a", 0),
            Err(SurveyError::OutOfScale(0))
        ));
        assert!(matches!(
            state.set_answer("a", 8),
            Err(SurveyError::OutOfScale(8))
        ));
        assert!(!state.question("a").unwrap().is_answered());
    }

    #[test]
    fn answers_can_be_overwritten_and_cleared() {
        let mut state = three_questions();
        state.set_answer("b", 2).unwrap();
        state.set_answer("b", 6).unwrap();
        assert_eq!(state.question("b").unwrap().value().map(LikertValue::get), Some(6));

        state.clear_answer("b").unwrap();
        assert_eq!(state.question("b").unwrap().answer(), Answer::Unanswered);
        assert!(state.clear_answer("nope").is_err());
    }

    #[test]
    fn empty_survey_is_complete() {
        let state = SurveyState::empty();
        assert!(state.is_complete());
        assert_eq!(state.progress(), 1.0);
        assert!(state.section_progress().is_empty());
    }

    #[test]
    fn progress_per_section() {
        let mut state = three_questions();
        state.set_answer("a", 3).unwrap();

        let progress = state.section_progress();
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].section, "One");
        assert_eq!((progress[0].answered, progress[0].total), (1, 2));
        assert_eq!(progress[0].fraction(), 0.5);
        assert_eq!(progress[1].section, "Two");
        assert_eq!(progress[1].fraction(), 0.0);

        assert_eq!(state.answered_count(), 1);
        assert!((state.progress() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn reset_keeps_order() {
        let mut state = three_questions();
        for id in ["a", "b", "c"] {
            state.set_answer(id, 7).unwrap();
        }
        assert!(state.is_complete());

        state.reset();
        assert!(!state.is_complete());
        assert_eq!(state.answered_count(), 0);
        let ids: Vec<_> = state.questions().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
