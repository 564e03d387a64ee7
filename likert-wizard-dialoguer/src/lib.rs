//! # likert-wizard-dialoguer
//!
//! Dialoguer front end for Likert assessments.
//!
//! The wizard signs the user in, walks through every unanswered statement one
//! section at a time, and prints the results. State lives in the caller's
//! `SurveyState` and `AuthSession`; the wizard only reads and writes them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use likert_survey::{ResultsProjection, auth::AuthSession};
//! use likert_report_html::ReportOptions;
//! use likert_wizard_dialoguer::DialoguerWizard;
//!
//! fn main() -> anyhow::Result<()> {
//!     let wizard = DialoguerWizard::new();
//!     let mut session = AuthSession::new();
//!     wizard.sign_in(&mut session)?;
//!
//!     let mut state = example_assessments::personality_assessment()?;
//!     wizard.run(&mut state)?;
//!     wizard.show_results(&ResultsProjection::from_state(&state), &ReportOptions::new());
//!     Ok(())
//! }
//! ```

mod wizard;

pub use wizard::{DialoguerWizard, WizardError, progress_bar, scale_items, value_for_selection};
