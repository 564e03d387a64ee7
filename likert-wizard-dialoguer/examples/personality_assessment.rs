//! The full personality assessment: sign in, answer, review, and export.
//!
//! Run with: cargo run -p likert-wizard-dialoguer --example personality_assessment

use likert_report_html::{HtmlFileExporter, ReportOptions, export_report};
use likert_survey::{ResultsProjection, auth::AuthSession};
use likert_wizard_dialoguer::{DialoguerWizard, WizardError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let wizard = DialoguerWizard::new();
    let mut session = AuthSession::new();
    let mut state = example_assessments::personality_assessment()?;

    let outcome = wizard
        .sign_in(&mut session)
        .and_then(|()| wizard.run(&mut state));
    match outcome {
        Ok(()) => {}
        Err(WizardError::Cancelled) => {
            println!("Assessment cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let projection = ResultsProjection::from_state(&state);
    let options = ReportOptions::new();
    wizard.show_results(&projection, &options);

    if wizard.confirm("Download report?")? {
        match export_report(&projection, &options, &HtmlFileExporter::new(".")) {
            Ok(artifact) => println!("Report saved to {}", artifact.path.display()),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    session.logout();
    Ok(())
}
