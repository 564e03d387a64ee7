use serde::Deserialize;

use crate::{Question, QuestionId, SurveyError, SurveyState};

/// A question set as written in a catalogue file.
///
/// ```
/// use likert_survey::SurveyCatalog;
///
/// let catalog = SurveyCatalog::from_json(r#"{
///     "title": "Quick check",
///     "questions": [
///         { "id": "1", "text": "You enjoy planning ahead.", "section": "Planning" }
///     ]
/// }"#).unwrap();
///
/// let state = catalog.into_state().unwrap();
/// assert_eq!(state.len(), 1);
/// assert!(!state.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SurveyCatalog {
    /// Human-readable title of the assessment.
    #[serde(default)]
    pub title: Option<String>,

    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<CatalogQuestion>,
}

/// One question entry of a catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CatalogQuestion {
    pub id: QuestionId,
    pub text: String,
    pub section: String,
}

impl SurveyCatalog {
    /// Parse a catalogue from JSON.
    pub fn from_json(json: &str) -> Result<Self, SurveyError> {
        serde_json::from_str(json).map_err(SurveyError::catalog)
    }

    /// Build a fresh, unanswered survey from this catalogue.
    ///
    /// Fails on empty or duplicate question ids.
    pub fn into_state(self) -> Result<SurveyState, SurveyError> {
        let questions = self
            .questions
            .into_iter()
            .map(|q| Question::new(q.id, q.text, q.section))
            .collect();
        SurveyState::new(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_questions_in_order() {
        let catalog = SurveyCatalog::from_json(
            r#"{
                "questions": [
                    { "id": "b", "text": "Second", "section": "S" },
                    { "id": "a", "text": "First", "section": "T" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.title, None);
        let state = catalog.into_state().unwrap();
        let ids: Vec<_> = state.questions().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(state.question("a").unwrap().section(), "T");
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = SurveyCatalog::from_json(
            r#"{ "questions": [ { "id": "1", "text": "x", "section": "s", "answer": 3 } ] }"#,
        );
        assert!(matches!(result, Err(SurveyError::Catalog(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SurveyCatalog::from_json("{").is_err());
    }

    #[test]
    fn duplicate_ids_fail_on_build() {
        let catalog = SurveyCatalog::from_json(
            r#"{ "questions": [
                { "id": "1", "text": "x", "section": "s" },
                { "id": "1", "text": "y", "section": "s" }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            catalog.into_state(),
            Err(SurveyError::DuplicateQuestion(_))
        ));
    }
}
