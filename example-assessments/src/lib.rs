//! Ready-made assessments.

use likert_survey::{SurveyCatalog, SurveyError, SurveyState};

/// The personality assessment catalogue: seven statements in four sections.
pub const PERSONALITY_JSON: &str = include_str!("../assessments/personality.json");

/// Parse the personality assessment catalogue.
pub fn personality_catalog() -> Result<SurveyCatalog, SurveyError> {
    SurveyCatalog::from_json(PERSONALITY_JSON)
}

/// A fresh, unanswered personality assessment.
pub fn personality_assessment() -> Result<SurveyState, SurveyError> {
    personality_catalog()?.into_state()
}
