//! # likert-report-html
//!
//! Render the results of a Likert assessment as a self-contained HTML document
//! (one SVG gauge per section) or as plain text, and hand the HTML to an
//! exporter such as a print/share service.
//!
//! ## Example
//!
//! ```rust
//! use likert_report_html::{ReportOptions, render_report_html};
//! use likert_survey::{Question, ResultsProjection, SurveyState};
//!
//! let mut state = SurveyState::new(vec![
//!     Question::new("1", "You plan ahead.", "Planning"),
//! ]).unwrap();
//! state.set_answer("1", 6).unwrap();
//!
//! let projection = ResultsProjection::from_state(&state);
//! let html = render_report_html(&projection, &ReportOptions::new());
//! assert!(html.contains("Section Average: <span class=\"report-average\">6.0</span>"));
//! ```

mod options;
pub use options::ReportOptions;

mod gauge;
pub use gauge::{GaugeSvg, arc_path, polar_to_cartesian};

mod generator;
pub use generator::{render_report_html, render_report_text};

mod export;
pub use export::{
    Artifact, HtmlFileExporter, HtmlFileExporterError, ReportError, ReportExporter, export_report,
};
