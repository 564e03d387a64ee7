//! Dialoguer wizard implementation.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use likert_report_html::{ReportOptions, render_report_text};
use likert_survey::{
    LikertValue, QuestionId, ResultsProjection, SurveyError, SurveyState,
    auth::{AuthSession, User},
};
use thiserror::Error;
use tracing::info;

/// Error type for the Dialoguer wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The survey rejected an answer.
    #[error("Survey error: {0}")]
    Survey(#[from] SurveyError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_err(err: dialoguer::Error) -> WizardError {
    if is_cancelled(&err) {
        WizardError::Cancelled
    } else {
        WizardError::Dialoguer(err)
    }
}

/// Items of the scale select, 1 first. The ends carry their anchor labels.
pub fn scale_items() -> Vec<String> {
    LikertValue::all()
        .map(|v| match v.get() {
            1 => format!("{v}  AGREE"),
            7 => format!("{v}  DISAGREE"),
            _ => v.to_string(),
        })
        .collect()
}

/// Convert a select index from `scale_items` into a scale point.
pub fn value_for_selection(index: usize) -> Result<LikertValue, SurveyError> {
    let raw = i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1));
    LikertValue::new(raw)
}

/// A text progress bar such as `[#####-----]` for `fraction` in `0.0..=1.0`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

const SIGN_IN_CHOICES: [&str; 2] = ["Log in with mobile number", "Create account"];

/// Dialoguer wizard for interactive CLI assessments.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Sign the session in, either with a mobile number and code or by
    /// creating an account.
    pub fn sign_in(&self, session: &mut AuthSession) -> Result<(), WizardError> {
        while !session.is_authenticated() {
            if self.ask_choice("Welcome", &SIGN_IN_CHOICES)? == 0 {
                self.log_in(session)?;
            } else {
                self.sign_up(session)?;
            }
        }
        Ok(())
    }

    fn log_in(&self, session: &mut AuthSession) -> Result<(), WizardError> {
        let mobile = self.ask_text("Mobile Number")?;
        if let Err(err) = session.request_code(&mobile) {
            println!("Error: {err}");
            return Ok(());
        }

        loop {
            let code = self.ask_text("Enter OTP")?;
            match session.login(&code) {
                Ok(()) => return Ok(()),
                Err(err) => println!("Error: {err}"),
            }
            if self.ask_confirm("Use a different mobile number?", false)? {
                session.cancel_code();
                return Ok(());
            }
        }
    }

    fn sign_up(&self, session: &mut AuthSession) -> Result<(), WizardError> {
        let name = self.ask_text("Full Name")?;
        let email = self.ask_text("Email")?;
        let mobile = self.ask_text("Mobile Number")?;
        if let Err(err) = session.signup(User::new(name, email, mobile)) {
            println!("Error: {err}");
        }
        Ok(())
    }

    /// Ask every unanswered question in display order.
    ///
    /// Already answered questions are kept, so an interrupted survey can be
    /// resumed by calling this again with the same state.
    pub fn run(&self, state: &mut SurveyState) -> Result<(), WizardError> {
        let pending: Vec<(QuestionId, String, String)> = state
            .questions()
            .iter()
            .filter(|q| !q.is_answered())
            .map(|q| (q.id().clone(), q.text().to_string(), q.section().to_string()))
            .collect();

        let items = scale_items();
        let mut current_section: Option<String> = None;

        for (id, text, section) in pending {
            if current_section.as_deref() != Some(section.as_str()) {
                self.print_section_header(state, &section);
                current_section = Some(section);
            }

            let index = self.ask_scale(&text, &items)?;
            state.set_value(&id, value_for_selection(index)?)?;
        }

        info!(answered = state.answered_count(), "survey complete");
        Ok(())
    }

    /// Print the results as a text report.
    pub fn show_results(&self, projection: &ResultsProjection<'_>, options: &ReportOptions) {
        println!();
        print!("{}", render_report_text(projection, options));
    }

    /// Ask a yes/no question.
    pub fn confirm(&self, prompt: &str) -> Result<bool, WizardError> {
        self.ask_confirm(prompt, true)
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool, WizardError> {
        let _theme;
        let mut builder: Confirm;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }
        builder = builder.with_prompt(prompt).default(default);
        builder.interact().map_err(map_err)
    }

    fn print_section_header(&self, state: &SurveyState, section: &str) {
        let progress = state
            .section_progress()
            .into_iter()
            .find(|p| p.section == section);

        println!();
        match progress {
            Some(p) => println!(
                "{section} {} {}/{}",
                progress_bar(p.fraction(), 20),
                p.answered,
                p.total
            ),
            None => println!("{section}"),
        }
    }

    fn ask_scale(&self, prompt: &str, items: &[String]) -> Result<usize, WizardError> {
        self.ask_select(prompt, items, 3)
    }

    fn ask_choice(&self, prompt: &str, items: &[&str]) -> Result<usize, WizardError> {
        self.ask_select(prompt, items, 0)
    }

    fn ask_select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: usize,
    ) -> Result<usize, WizardError> {
        let _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(items).default(default);
        builder.interact().map_err(map_err)
    }

    fn ask_text(&self, prompt: &str) -> Result<String, WizardError> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(prompt).allow_empty(false);
        builder.interact_text().map_err(map_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_creation() {
        let _wizard = DialoguerWizard::new();
        let _plain = DialoguerWizard::plain();
        let _default = DialoguerWizard::default();
    }

    #[test]
    fn sign_in_offers_login_first() {
        assert_eq!(SIGN_IN_CHOICES[0], "Log in with mobile number");
        assert_eq!(SIGN_IN_CHOICES[1], "Create account");
    }

    #[test]
    fn error_types() {
        let err = WizardError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        let err = WizardError::from(SurveyError::OutOfScale(9));
        assert_eq!(
            err.to_string(),
            "Survey error: Value 9 is outside the Likert scale 1..=7"
        );
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(map_err(err), WizardError::Cancelled));

        let err = dialoguer::Error::IO(std::io::Error::other("broken pipe"));
        assert!(matches!(map_err(err), WizardError::Dialoguer(_)));
    }

    #[test]
    fn scale_items_cover_scale() {
        let items = scale_items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0], "1  AGREE");
        assert_eq!(items[3], "4");
        assert_eq!(items[6], "7  DISAGREE");
    }

    #[test]
    fn selection_maps_to_value() {
        assert_eq!(value_for_selection(0).unwrap().get(), 1);
        assert_eq!(value_for_selection(6).unwrap().get(), 7);
        assert!(value_for_selection(7).is_err());
        assert!(value_for_selection(usize::MAX).is_err());
    }

    #[test]
    fn progress_bars() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(3.0, 4), "[####]");
    }
}
