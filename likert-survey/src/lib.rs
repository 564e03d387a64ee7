//! Core types for Likert-scale assessments.
//!
//! This crate is presentation-agnostic and provides:
//! - `Question`, `QuestionId`, `Answer` and `LikertValue` - Individual statements and their answers
//! - `SurveyState` - The owned, mutable state of one assessment session
//! - `ResultsProjection` and `group_by_section` - The read-side view used by results screens
//! - `GaugeBand`, `angle_for_value`, `gauge_angle` - Mapping scores onto a semicircular dial
//! - `SurveyCatalog` - Loading question sets from JSON
//! - `auth::AuthSession` - The local mobile-number/code sign-in gate

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::{Answer, LIKERT_MAX, LIKERT_MIN, LikertValue};

mod question;
pub use question::Question;

mod survey_state;
pub use survey_state::{SectionProgress, SurveyState};

mod results;
pub use results::{
    ResultsProjection, SectionResult, group_by_section, section_average, section_score,
};

mod gauge;
pub use gauge::{GAUGE_MAX_ANGLE, GaugeBand, angle_for_value, gauge_angle};

mod catalog;
pub use catalog::{CatalogQuestion, SurveyCatalog};

pub mod auth;

mod error;
pub use error::SurveyError;
